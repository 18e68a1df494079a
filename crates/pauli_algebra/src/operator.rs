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

use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{error::PauliError, pauli::Pauli};

/// A phase-free Pauli operator on a fixed number of qubits.
///
/// Qubit `i` carries the `i`th symbol. Operators of different lengths cannot be
/// combined; every binary operation checks this and returns
/// [`PauliError::LengthMismatch`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PauliOperator(Vec<Pauli>);

impl PauliOperator {
    pub fn new(paulis: Vec<Pauli>) -> Self {
        Self(paulis)
    }

    /// The identity operator on `qubits` qubits.
    pub fn identity(qubits: usize) -> Self {
        Self(vec![Pauli::I; qubits])
    }

    /// `pauli` on `qubit` and identity elsewhere.
    pub fn single(qubits: usize, qubit: usize, pauli: Pauli) -> Result<Self, PauliError> {
        if qubit >= qubits {
            return Err(PauliError::QubitOutOfRange { qubit, qubits });
        }
        let mut op = Self::identity(qubits);
        op.0[qubit] = pauli;
        Ok(op)
    }

    /// Build an operator from the integer encoding I=0, X=1, Y=2, Z=3.
    pub fn from_codes(codes: &[u8]) -> Result<Self, PauliError> {
        codes
            .iter()
            .map(|&code| Pauli::try_from(code))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Sample an operator uniformly from all 4^qubits operators.
    pub fn random<R: Rng + ?Sized>(qubits: usize, rng: &mut R) -> Self {
        Self((0..qubits).map(|_| rng.random()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn paulis(&self) -> &[Pauli] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pauli> {
        self.0.iter()
    }

    pub fn codes(&self) -> Vec<u8> {
        self.0.iter().map(|p| p.code()).collect()
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().all(|p| p.is_identity())
    }

    /// Number of qubits on which the operator acts non-trivially.
    pub fn weight(&self) -> usize {
        self.0.iter().filter(|p| !p.is_identity()).count()
    }

    /// Indices of the qubits on which the operator acts non-trivially.
    pub fn support(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_identity())
            .map(|(i, _)| i)
            .collect()
    }

    /// 1 if the operators anticommute, 0 if they commute.
    ///
    /// This is the parity of the qubit-wise commutations: an even number of
    /// anticommuting qubits makes the operators commute.
    pub fn commutation(&self, other: &PauliOperator) -> Result<u8, PauliError> {
        self.check_len(other)?;
        Ok(self.commutation_unchecked(other))
    }

    pub fn commutes_with(&self, other: &PauliOperator) -> Result<bool, PauliError> {
        Ok(self.commutation(other)? == 0)
    }

    /// Qubit-wise phase-free product.
    pub fn product(&self, other: &PauliOperator) -> Result<PauliOperator, PauliError> {
        self.check_len(other)?;
        Ok(self.product_unchecked(other))
    }

    /// Multiply `other` onto `self` in place.
    pub fn multiply(&mut self, other: &PauliOperator) -> Result<(), PauliError> {
        self.check_len(other)?;
        self.multiply_unchecked(other);
        Ok(())
    }

    pub(crate) fn commutation_unchecked(&self, other: &PauliOperator) -> u8 {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0, |parity, (&p, &q)| parity ^ p.commutation(q))
    }

    pub(crate) fn multiply_unchecked(&mut self, other: &PauliOperator) {
        for (p, &q) in self.0.iter_mut().zip(other.0.iter()) {
            *p *= q;
        }
    }

    pub(crate) fn product_unchecked(&self, other: &PauliOperator) -> PauliOperator {
        PauliOperator(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(&p, &q)| p * q)
                .collect(),
        )
    }

    fn check_len(&self, other: &PauliOperator) -> Result<(), PauliError> {
        if self.len() != other.len() {
            return Err(PauliError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(())
    }
}

impl Index<usize> for PauliOperator {
    type Output = Pauli;

    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl From<Vec<Pauli>> for PauliOperator {
    fn from(value: Vec<Pauli>) -> Self {
        Self(value)
    }
}

impl From<&[Pauli]> for PauliOperator {
    fn from(value: &[Pauli]) -> Self {
        Self(value.to_vec())
    }
}

impl From<PauliOperator> for Vec<Pauli> {
    fn from(value: PauliOperator) -> Self {
        value.0
    }
}

impl FromIterator<Pauli> for PauliOperator {
    fn from_iter<T: IntoIterator<Item = Pauli>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PauliOperator {
    type Item = &'a Pauli;
    type IntoIter = std::slice::Iter<'a, Pauli>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
