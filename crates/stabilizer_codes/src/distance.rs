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

//! Minimum-weight logical operators by exhaustive search.
//!
//! Multiplying a logical operator by any stabilizer gives an equivalent logical
//! operator. We walk all `2^m` products of the `m` generators in Gray-code
//! order, so each step multiplies in a single generator and only the weight on
//! that generator's support has to be updated.

use log::debug;
use pauli_algebra::{OperatorFamily, Pauli, PauliOperator};

use crate::{CodeError, StabilizerCode};

/// Largest number of stabilizer generators (or logicals) we are willing to
/// enumerate products of.
pub const MAX_ENUMERATED_GENERATORS: usize = 30;

/// A lowest-weight representative of a logical operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumWeight {
    pub weight: usize,
    pub operator: PauliOperator,
}

/// Lowest-weight operator equivalent to the logical at `index`.
pub fn logical_minimum_weight(
    code: &StabilizerCode,
    index: usize,
) -> Result<MinimumWeight, CodeError> {
    let stabilizers = code.stabilizers();
    let logical = code
        .logicals()
        .get(index)
        .ok_or(CodeError::NoSuchLogical {
            index,
            logicals: code.logicals().len(),
        })?;
    check_logical(stabilizers, logical, index)?;
    coset_minimum(stabilizers, logical)
}

/// Code distance: the minimum weight over every non-trivial product of the
/// code's logical operators.
pub fn distance(code: &StabilizerCode) -> Result<usize, CodeError> {
    let stabilizers = code.stabilizers();
    let logicals = code.logicals();
    if logicals.is_empty() {
        return Err(CodeError::NoLogicals);
    }
    if logicals.len() > MAX_ENUMERATED_GENERATORS {
        return Err(CodeError::TooManyLogicals {
            logicals: logicals.len(),
            limit: MAX_ENUMERATED_GENERATORS,
        });
    }

    // Every product of logicals is non-trivial iff the logicals stay independent
    // modulo the stabilizer group.
    let mut extended = stabilizers.clone();
    let mut rank = extended.rank();
    for (index, logical) in logicals.iter().enumerate() {
        check_logical(stabilizers, logical, index)?;
        extended.push(logical.clone())?;
        let extended_rank = extended.rank();
        if extended_rank != rank + 1 {
            return Err(CodeError::NotALogical { index });
        }
        rank = extended_rank;
    }

    let logical_family = OperatorFamily::with_qubits(code.qubits(), logicals.to_vec())?;
    let mut best = usize::MAX;
    for combination in 1..(1_u64 << logicals.len()) {
        let powers: Vec<u8> = (0..logicals.len())
            .map(|i| ((combination >> i) & 1) as u8)
            .collect();
        let logical = logical_family.weighted_product(&powers)?;
        let minimum = coset_minimum(stabilizers, &logical)?;
        debug!(
            "Logical combination {powers:?} has minimum weight {}",
            minimum.weight
        );
        best = best.min(minimum.weight);
    }
    Ok(best)
}

fn check_logical(
    stabilizers: &OperatorFamily,
    logical: &PauliOperator,
    index: usize,
) -> Result<(), CodeError> {
    let syndrome = stabilizers.syndrome(logical)?;
    if syndrome.iter().any(|&s| s == 1) {
        return Err(CodeError::NotALogical { index });
    }
    let mut extended = stabilizers.clone();
    extended.push(logical.clone())?;
    if extended.rank() == stabilizers.rank() {
        return Err(CodeError::NotALogical { index });
    }
    Ok(())
}

fn coset_minimum(
    stabilizers: &OperatorFamily,
    logical: &PauliOperator,
) -> Result<MinimumWeight, CodeError> {
    let generators = stabilizers.len();
    if generators > MAX_ENUMERATED_GENERATORS {
        return Err(CodeError::TooManyGenerators {
            generators,
            limit: MAX_ENUMERATED_GENERATORS,
        });
    }
    debug!("Enumerating {} stabilizer products", 1_u64 << generators);

    let supports: Vec<Vec<(usize, Pauli)>> = stabilizers
        .iter()
        .map(|s| s.support().into_iter().map(|q| (q, s[q])).collect())
        .collect();

    let mut current: Vec<Pauli> = logical.paulis().to_vec();
    let mut weight = logical.weight();
    let mut best_weight = weight;
    let mut best_gray = 0_u64;

    for step in 1..(1_u64 << generators) {
        // Going from step - 1 to step flips exactly this bit of the Gray code
        let generator = step.trailing_zeros() as usize;
        for &(qubit, pauli) in &supports[generator] {
            let was_identity = current[qubit].is_identity();
            current[qubit] *= pauli;
            match (was_identity, current[qubit].is_identity()) {
                (true, false) => weight += 1,
                (false, true) => weight -= 1,
                _ => {}
            }
        }
        if weight < best_weight {
            best_weight = weight;
            best_gray = step ^ (step >> 1);
        }
    }

    let operator = if best_gray == 0 {
        logical.clone()
    } else {
        let powers: Vec<u8> = (0..generators)
            .map(|i| ((best_gray >> i) & 1) as u8)
            .collect();
        stabilizers.weighted_product(&powers)?.product(logical)?
    };
    debug_assert_eq!(best_weight, operator.weight());
    Ok(MinimumWeight {
        weight: best_weight,
        operator,
    })
}
