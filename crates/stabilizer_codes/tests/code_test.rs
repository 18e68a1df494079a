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

//! End-to-end checks of the code constructions against the Pauli algebra.

use std::sync::LazyLock;

use pauli_algebra::{Pauli, PauliOperator};
use rand::{Rng, SeedableRng, rngs::StdRng};
use stabilizer_codes::{
    CodeChoice, StabilizerCode, distance, five_qubit_code, logical_minimum_weight, surface_code,
};

// Shared fixture – the distance search walks 2^24 products, build the code once.
static SURFACE_3: LazyLock<StabilizerCode> =
    LazyLock::new(|| surface_code(3).expect("Size 3 is a valid surface code"));

#[test]
fn surface_code_of_size_three_is_valid() {
    let verification = SURFACE_3.verify();
    assert!(verification.stabilizers_commute);
    assert!(verification.stabilizers_independent);
    assert!(verification.is_valid());
    assert!(!SURFACE_3.stabilizers().any_anticommute());
    assert!(SURFACE_3.stabilizers().is_independent());
}

#[test]
fn surface_code_first_logical_has_weight_four() {
    let minimum = logical_minimum_weight(&SURFACE_3, 0).expect("X is a logical operator");
    assert_eq!(4, minimum.weight);
    assert_eq!(4, minimum.operator.weight());
}

#[test]
fn surface_code_distance_is_size_plus_one() {
    assert_eq!(4, distance(&SURFACE_3).unwrap());
}

#[test]
fn surface_code_detects_single_qubit_errors() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = SURFACE_3.qubits();
    for _ in 0..100 {
        let qubit = rng.random_range(0..n);
        let pauli = Pauli::NON_IDENTITY[rng.random_range(0..3)];
        let error = PauliOperator::single(n, qubit, pauli).unwrap();
        let syndrome = SURFACE_3.stabilizers().syndrome(&error).unwrap();
        assert!(
            syndrome.contains(&1),
            "{pauli} on qubit {qubit} is undetected"
        );
    }
}

#[test]
fn logical_times_stabilizer_is_still_logical() {
    let mut rng = StdRng::seed_from_u64(7);
    let stabilizers = SURFACE_3.stabilizers();
    for _ in 0..20 {
        let powers: Vec<u8> = (0..stabilizers.len())
            .map(|_| u8::from(rng.random_bool(0.5)))
            .collect();
        let stabilizer = stabilizers.weighted_product(&powers).unwrap();
        let equivalent = SURFACE_3.logicals()[0].product(&stabilizer).unwrap();
        let syndrome = stabilizers.syndrome(&equivalent).unwrap();
        assert!(syndrome.iter().all(|&s| s == 0));
        assert!(equivalent.weight() >= 4);
    }
}

#[test]
fn five_qubit_scenario() {
    let code = five_qubit_code();
    assert!(!code.stabilizers().any_anticommute());
    assert!(code.stabilizers().is_independent());

    let error = PauliOperator::from_codes(&[1, 1, 0, 0, 0]).unwrap();
    assert_eq!(vec![1, 0, 0, 1], code.stabilizers().syndrome(&error).unwrap());
    assert_eq!(3, distance(&code).unwrap());
}

#[test]
fn code_choices_build() {
    assert_eq!("surface-2", CodeChoice::Surface.code(2).unwrap().name());
    assert_eq!("five-qubit", CodeChoice::FiveQubit.code(2).unwrap().name());
    assert!(CodeChoice::Surface.code(0).is_err());
}

#[test]
fn codes_serialize_to_json() {
    let code = five_qubit_code();
    let json = serde_json::to_string(&code).unwrap();
    let back: StabilizerCode = serde_json::from_str(&json).unwrap();
    assert_eq!(code, back);
}
