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

use std::{fmt, ops::Index};

use serde::{Deserialize, Serialize};

use crate::{error::PauliError, independence, operator::PauliOperator};

/// An ordered family of Pauli operators acting on the same number of qubits.
///
/// The common length is checked once on construction, so the relations below
/// cannot fail on mismatched members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PauliOperator>", into = "Vec<PauliOperator>")]
pub struct OperatorFamily {
    qubits: usize,
    operators: Vec<PauliOperator>,
}

impl OperatorFamily {
    /// Build a family, taking the qubit count from the first operator.
    ///
    /// An empty list gives the empty family. Members must be non-empty and
    /// share the same length.
    pub fn new(operators: Vec<PauliOperator>) -> Result<Self, PauliError> {
        let qubits = operators.first().map_or(0, PauliOperator::len);
        if operators.is_empty() {
            return Ok(Self { qubits, operators });
        }
        Self::with_qubits(qubits, operators)
    }

    /// Build a family whose members act on exactly `qubits` qubits.
    pub fn with_qubits(qubits: usize, operators: Vec<PauliOperator>) -> Result<Self, PauliError> {
        if qubits == 0 {
            return Err(PauliError::MalformedFamily);
        }
        if let Some(op) = operators.iter().find(|op| op.len() != qubits) {
            return Err(PauliError::LengthMismatch {
                expected: qubits,
                found: op.len(),
            });
        }
        Ok(Self { qubits, operators })
    }

    /// Parse one operator per mnemonic string, e.g. `["xzzxI", "Ixzzx"]`.
    pub fn parse<S: AsRef<str>>(operators: &[S]) -> Result<Self, PauliError> {
        let ops = operators
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ops)
    }

    /// Build a family from rows in the integer encoding I=0, X=1, Y=2, Z=3.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, PauliError> {
        let ops = rows
            .iter()
            .map(|row| PauliOperator::from_codes(row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ops)
    }

    /// Number of qubits every member acts on; 0 only for the empty family.
    pub fn qubits(&self) -> usize {
        self.qubits
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn operators(&self) -> &[PauliOperator] {
        &self.operators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PauliOperator> {
        self.operators.iter()
    }

    /// Append an operator, checking its length against the family.
    pub fn push(&mut self, operator: PauliOperator) -> Result<(), PauliError> {
        if self.operators.is_empty() && self.qubits == 0 {
            if operator.is_empty() {
                return Err(PauliError::MalformedFamily);
            }
            self.qubits = operator.len();
        } else if operator.len() != self.qubits {
            return Err(PauliError::LengthMismatch {
                expected: self.qubits,
                found: operator.len(),
            });
        }
        self.operators.push(operator);
        Ok(())
    }

    /// Whether any two distinct members anticommute.
    ///
    /// Empty and single-member families trivially commute.
    pub fn any_anticommute(&self) -> bool {
        let ops = &self.operators;
        (0..ops.len()).any(|n| {
            (n + 1..ops.len()).any(|m| ops[n].commutation_unchecked(&ops[m]) == 1)
        })
    }

    /// Pairwise commutations, `table[n][m]` being 1 when members `n` and `m`
    /// anticommute.
    pub fn commutation_matrix(&self) -> Vec<Vec<u8>> {
        self.operators
            .iter()
            .map(|a| {
                self.operators
                    .iter()
                    .map(|b| a.commutation_unchecked(b))
                    .collect()
            })
            .collect()
    }

    /// The product of the members whose power is 1.
    ///
    /// `powers` holds one entry per member and every entry must be 0 or 1. The
    /// identity is returned when no power is set.
    pub fn weighted_product(&self, powers: &[u8]) -> Result<PauliOperator, PauliError> {
        if powers.len() != self.operators.len() {
            return Err(PauliError::LengthMismatch {
                expected: self.operators.len(),
                found: powers.len(),
            });
        }
        if let Some((index, &value)) = powers.iter().enumerate().find(|(_, p)| **p > 1) {
            return Err(PauliError::InvalidPower { index, value });
        }

        let mut out = PauliOperator::identity(self.qubits);
        for (op, _) in self
            .operators
            .iter()
            .zip(powers)
            .filter(|(_, power)| **power == 1)
        {
            out.multiply_unchecked(op);
        }
        Ok(out)
    }

    /// Commutation of `error` with every member, in family order.
    pub fn syndrome(&self, error: &PauliOperator) -> Result<Vec<u8>, PauliError> {
        if !self.operators.is_empty() && error.len() != self.qubits {
            return Err(PauliError::LengthMismatch {
                expected: self.qubits,
                found: error.len(),
            });
        }
        Ok(self
            .operators
            .iter()
            .map(|op| op.commutation_unchecked(error))
            .collect())
    }

    /// Whether no non-empty subset of the family multiplies to the identity.
    ///
    /// See [`independence::is_independent`].
    pub fn is_independent(&self) -> bool {
        independence::is_independent(self)
    }

    /// Dimension of the group generated by the family, ignoring phases.
    pub fn rank(&self) -> usize {
        independence::rank(self)
    }
}

impl Index<usize> for OperatorFamily {
    type Output = PauliOperator;

    fn index(&self, i: usize) -> &Self::Output {
        &self.operators[i]
    }
}

impl<'a> IntoIterator for &'a OperatorFamily {
    type Item = &'a PauliOperator;
    type IntoIter = std::slice::Iter<'a, PauliOperator>;

    fn into_iter(self) -> Self::IntoIter {
        self.operators.iter()
    }
}

impl TryFrom<Vec<PauliOperator>> for OperatorFamily {
    type Error = PauliError;

    fn try_from(value: Vec<PauliOperator>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OperatorFamily> for Vec<PauliOperator> {
    fn from(value: OperatorFamily) -> Self {
        value.operators
    }
}

impl fmt::Display for OperatorFamily {
    /// One operator per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.operators.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_QUBIT: [[u8; 5]; 4] = [
        [1, 3, 3, 1, 0],
        [0, 1, 3, 3, 1],
        [1, 0, 1, 3, 3],
        [3, 1, 0, 1, 3],
    ];

    fn five_qubit() -> OperatorFamily {
        OperatorFamily::from_codes(&FIVE_QUBIT).unwrap()
    }

    #[test]
    fn five_qubit_stabilizers_commute() {
        assert!(!five_qubit().any_anticommute());
    }

    #[test]
    fn anticommuting_pair_is_found() {
        let family = OperatorFamily::parse(&["xI", "Ix", "zI"]).unwrap();
        assert!(family.any_anticommute());
        assert_eq!(
            vec![vec![0, 0, 1], vec![0, 0, 0], vec![1, 0, 0]],
            family.commutation_matrix()
        );
    }

    #[test]
    fn trivial_families_commute() {
        assert!(!OperatorFamily::new(vec![]).unwrap().any_anticommute());
        assert!(!OperatorFamily::parse(&["xyz"]).unwrap().any_anticommute());
    }

    #[test]
    fn syndrome_of_weight_two_error() {
        let error = PauliOperator::from_codes(&[1, 1, 0, 0, 0]).unwrap();
        assert_eq!(vec![1, 0, 0, 1], five_qubit().syndrome(&error).unwrap());
    }

    #[test]
    fn syndrome_rejects_wrong_length() {
        let err = five_qubit()
            .syndrome(&PauliOperator::identity(4))
            .expect_err("must reject wrong length");
        assert_eq!(
            PauliError::LengthMismatch {
                expected: 5,
                found: 4
            },
            err
        );
    }

    #[test]
    fn weighted_product_selects_members() {
        let family = five_qubit();
        assert_eq!(
            PauliOperator::identity(5),
            family.weighted_product(&[0, 0, 0, 0]).unwrap()
        );
        assert_eq!(family[2], family.weighted_product(&[0, 0, 1, 0]).unwrap());
        let expected = family[0].product(&family[3]).unwrap();
        assert_eq!(expected, family.weighted_product(&[1, 0, 0, 1]).unwrap());
    }

    #[test]
    fn weighted_product_rejects_invalid_powers() {
        let family = five_qubit();
        assert_eq!(
            Err(PauliError::InvalidPower { index: 1, value: 2 }),
            family.weighted_product(&[1, 2, 0, 0])
        );
        assert_eq!(
            Err(PauliError::LengthMismatch {
                expected: 4,
                found: 3
            }),
            family.weighted_product(&[1, 0, 0])
        );
    }

    #[test]
    fn construction_checks_lengths() {
        let err = OperatorFamily::parse(&["xz", "xzz"]).expect_err("mixed lengths");
        assert_eq!(
            PauliError::LengthMismatch {
                expected: 2,
                found: 3
            },
            err
        );
        let err = OperatorFamily::new(vec![PauliOperator::identity(0)])
            .expect_err("zero-qubit members");
        assert_eq!(PauliError::MalformedFamily, err);
        assert_eq!(
            Err(PauliError::MalformedFamily),
            OperatorFamily::with_qubits(0, vec![])
        );
    }

    #[test]
    fn push_checks_lengths() {
        let mut family = OperatorFamily::new(vec![]).unwrap();
        family.push("xz".parse().unwrap()).unwrap();
        assert_eq!(2, family.qubits());
        assert_eq!(
            Err(PauliError::LengthMismatch {
                expected: 2,
                found: 1
            }),
            family.push("x".parse().unwrap())
        );
        assert_eq!(1, family.len());
    }

    #[test]
    fn display_lists_members() {
        let family = OperatorFamily::parse(&["xz", "Iy"]).unwrap();
        assert_eq!("xz\nIy", family.to_string());
    }
}
