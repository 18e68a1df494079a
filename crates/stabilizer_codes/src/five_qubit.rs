// Copyright contributors to the Stabilizer Algebra project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use pauli_algebra::{OperatorFamily, Pauli, PauliOperator};

use crate::StabilizerCode;

/// Generators of the [[5,1,3]] code: cyclic shifts of XZZXI.
pub const FIVE_QUBIT_STABILIZERS: [[u8; 5]; 4] = [
    [1, 3, 3, 1, 0],
    [0, 1, 3, 3, 1],
    [1, 0, 1, 3, 3],
    [3, 1, 0, 1, 3],
];

/// The smallest code correcting an arbitrary single-qubit error.
pub fn five_qubit_code() -> StabilizerCode {
    let stabilizers = OperatorFamily::from_codes(&FIVE_QUBIT_STABILIZERS)
        .expect("The five-qubit generators are valid Pauli codes");
    let logicals = vec![
        PauliOperator::new(vec![Pauli::X; 5]),
        PauliOperator::new(vec![Pauli::Z; 5]),
    ];
    StabilizerCode::new("five-qubit", stabilizers, logicals)
        .expect("The five-qubit logicals act on five qubits")
}
