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

//! Independence of Pauli operators under the phase-free product.
//!
//! A family is independent when no non-empty subset multiplies to the identity,
//! which is linear independence of the family's image in GF(2)^2n. Rather than
//! building the binary symplectic matrix we eliminate directly on the Pauli
//! symbols, one qubit (column) at a time:
//!
//! 1. Scan the operators that have not been used as a pivot yet, in family
//!    order, and pick at most two pivots with distinct non-identity symbols on
//!    the current qubit. Two distinct symbols already generate the third, so a
//!    third pivot would be redundant.
//! 2. Clear the current qubit of every other unused operator by multiplying
//!    with the first pivot, the second pivot, or both, whichever leaves the
//!    identity on that qubit.
//! 3. An unused operator that has become the identity everywhere is a product
//!    of other members, so the family is dependent.
//!
//! The pivots are in echelon form, which makes their number the rank of the
//! family.

use log::{debug, trace};

use crate::{family::OperatorFamily, operator::PauliOperator, pauli::Pauli};

/// Whether no non-empty subset of `family` multiplies to the identity.
///
/// The empty family is independent and any family containing the identity
/// operator is dependent. `family` is left untouched; elimination happens on a
/// private copy.
pub fn is_independent(family: &OperatorFamily) -> bool {
    let mut elimination = Elimination::new(family);
    for qubit in 0..family.qubits() {
        elimination.eliminate_column(qubit);
        if let Some(index) = elimination.reduced_to_identity() {
            debug!("Operator {index} reduces to the identity after qubit {qubit}");
            return false;
        }
    }
    true
}

/// Number of independent generators in `family`.
pub fn rank(family: &OperatorFamily) -> usize {
    let mut elimination = Elimination::new(family);
    for qubit in 0..family.qubits() {
        elimination.eliminate_column(qubit);
    }
    elimination.pivot_count
}

/// Working state of the elimination.
struct Elimination {
    rows: Vec<PauliOperator>,
    /// Indices of the rows that have not been used as a pivot, in family order.
    remaining: Vec<usize>,
    pivot_count: usize,
}

impl Elimination {
    fn new(family: &OperatorFamily) -> Self {
        Self {
            rows: family.operators().to_vec(),
            remaining: (0..family.len()).collect(),
            pivot_count: 0,
        }
    }

    fn eliminate_column(&mut self, qubit: usize) {
        let pivots = self.select_pivots(qubit);
        if pivots.is_empty() {
            return;
        }
        trace!("Qubit {qubit}: pivots {pivots:?}");
        self.pivot_count += pivots.len();
        self.remaining.retain(|i| !pivots.contains(i));

        for &i in &self.remaining {
            if self.rows[i][qubit].is_identity() {
                continue;
            }
            let reduced = reduce(&self.rows, i, qubit, &pivots);
            trace!("Qubit {qubit}: row {i} {} -> {reduced}", self.rows[i]);
            self.rows[i] = reduced;
        }
    }

    /// Up to two remaining rows with distinct non-identity Paulis on `qubit`.
    fn select_pivots(&self, qubit: usize) -> Vec<usize> {
        let mut available = Pauli::NON_IDENTITY.to_vec();
        let mut pivots = Vec::with_capacity(2);
        for &i in &self.remaining {
            if available.len() == 1 {
                break;
            }
            let pauli = self.rows[i][qubit];
            // The identity is never available
            if let Some(pos) = available.iter().position(|&p| p == pauli) {
                available.swap_remove(pos);
                pivots.push(i);
            }
        }
        pivots
    }

    fn reduced_to_identity(&self) -> Option<usize> {
        self.remaining
            .iter()
            .copied()
            .find(|&i| self.rows[i].is_identity())
    }
}

/// Clear `qubit` of row `i` using one or both pivots.
///
/// Row `i` was not picked as a pivot, so either its Pauli on `qubit` equals the
/// first pivot's, or there are two pivots and one of the three products with
/// them cancels it.
fn reduce(rows: &[PauliOperator], i: usize, qubit: usize, pivots: &[usize]) -> PauliOperator {
    let row = &rows[i];
    let first = &rows[pivots[0]];
    let with_first = row.product_unchecked(first);
    if with_first[qubit].is_identity() {
        return with_first;
    }

    let Some(&second) = pivots.get(1) else {
        debug_assert!(false, "row {i} cannot be cleared on qubit {qubit}");
        return with_first;
    };
    let second = &rows[second];
    let with_second = row.product_unchecked(second);
    if with_second[qubit].is_identity() {
        return with_second;
    }

    let with_both = with_first.product_unchecked(second);
    debug_assert!(with_both[qubit].is_identity());
    with_both
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(ops: &[&str]) -> OperatorFamily {
        OperatorFamily::parse(ops).unwrap()
    }

    #[test]
    fn empty_family_is_independent() {
        let empty = OperatorFamily::new(vec![]).unwrap();
        assert!(is_independent(&empty));
        assert_eq!(0, rank(&empty));
    }

    #[test]
    fn identity_is_dependent() {
        assert!(!is_independent(&family(&["IIII"])));
        assert!(!is_independent(&family(&["xzIy", "IIII"])));
        assert_eq!(1, rank(&family(&["xzIy", "IIII"])));
    }

    #[test]
    fn single_operator_is_independent() {
        assert!(is_independent(&family(&["IIzI"])));
    }

    #[test]
    fn five_qubit_stabilizers() {
        let codes: [[u8; 5]; 4] = [
            [1, 3, 3, 1, 0],
            [0, 1, 3, 3, 1],
            [1, 0, 1, 3, 3],
            [3, 1, 0, 1, 3],
        ];
        let stabilizers = OperatorFamily::from_codes(&codes).unwrap();
        assert!(is_independent(&stabilizers));
        assert_eq!(4, rank(&stabilizers));
    }

    #[test]
    fn repeated_operator_is_dependent() {
        assert!(!is_independent(&family(&["xzzxI", "Ixzzx", "xzzxI"])));
    }

    #[test]
    fn product_of_members_is_dependent() {
        // xy * yz = zx
        assert!(!is_independent(&family(&["xy", "yz", "zx"])));
        assert_eq!(2, rank(&family(&["xy", "yz", "zx"])));
    }

    #[test]
    fn three_symbols_on_one_qubit() {
        // x * y = z on the single qubit
        assert!(!is_independent(&family(&["x", "y", "z"])));
        assert!(is_independent(&family(&["x", "z"])));
        assert_eq!(2, rank(&family(&["x", "y", "z"])));
    }

    #[test]
    fn needs_both_pivots() {
        // The last row is cleared on qubit 0 only by x * z, and the product
        // xI * zx * yx is the identity.
        assert!(!is_independent(&family(&["xI", "zx", "yx"])));
        assert!(is_independent(&family(&["xI", "zx", "yz"])));
    }

    #[test]
    fn dependency_found_late() {
        // zIIx * IzIx * IIzx = zzzx, exposed on the third qubit
        assert!(!is_independent(&family(&["zIIx", "IzIx", "IIzx", "zzzx"])));
        assert!(is_independent(&family(&["zIIx", "IzIx", "IIzx", "zzzz"])));
    }

    #[test]
    fn full_pauli_group_basis() {
        let basis = family(&["xII", "zII", "IxI", "IzI", "IIx", "IIz"]);
        assert!(is_independent(&basis));
        assert_eq!(6, rank(&basis));

        let mut overfull = basis.clone();
        overfull.push("yyy".parse().unwrap()).unwrap();
        assert!(!is_independent(&overfull));
        assert_eq!(6, rank(&overfull));
    }

    #[test]
    fn caller_family_is_untouched() {
        let stabilizers = family(&["xzzxI", "Ixzzx", "xIxzz", "zxIxz"]);
        let before = stabilizers.clone();
        assert!(is_independent(&stabilizers));
        assert_eq!(before, stabilizers);
    }
}
