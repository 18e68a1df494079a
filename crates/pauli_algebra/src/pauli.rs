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

use std::{
    fmt::Display,
    ops::{Mul, MulAssign},
};

use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

use crate::error::{PauliError, RawSymbol};

/// A single-qubit Pauli, ignoring phases.
///
/// The discriminants are the canonical integer encoding: I=0, X=1, Y=2, Z=3.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub enum Pauli {
    #[default]
    I = 0,
    X = 1,
    Y = 2,
    Z = 3,
}

impl Pauli {
    pub const ALL: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];
    pub const NON_IDENTITY: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    /// 1 if `self` and `other` anticommute, 0 if they commute.
    ///
    /// Two distinct non-identity Paulis always anticommute.
    pub fn commutation(self, other: Pauli) -> u8 {
        match (self, other) {
            (Pauli::I, _) | (_, Pauli::I) => 0,
            (Pauli::X, Pauli::X) | (Pauli::Y, Pauli::Y) | (Pauli::Z, Pauli::Z) => 0,
            (Pauli::X | Pauli::Y | Pauli::Z, Pauli::X | Pauli::Y | Pauli::Z) => 1,
        }
    }

    pub fn commutes_with(self, other: Pauli) -> bool {
        self.commutation(other) == 0
    }

    /// The phase-free product of two Paulis.
    ///
    /// The product of two distinct non-identity Paulis is the third one.
    pub fn product(self, other: Pauli) -> Pauli {
        match (self, other) {
            (Pauli::I, p) | (p, Pauli::I) => p,
            (Pauli::X, Pauli::X) | (Pauli::Y, Pauli::Y) | (Pauli::Z, Pauli::Z) => Pauli::I,
            (Pauli::X, Pauli::Y) | (Pauli::Y, Pauli::X) => Pauli::Z,
            (Pauli::X, Pauli::Z) | (Pauli::Z, Pauli::X) => Pauli::Y,
            (Pauli::Y, Pauli::Z) | (Pauli::Z, Pauli::Y) => Pauli::X,
        }
    }

    pub fn is_identity(self) -> bool {
        self == Pauli::I
    }

    /// Give the Paulis that anticommute with this Pauli.
    pub fn anticommuting(&self) -> Option<(Self, Self)> {
        match self {
            Self::I => None,
            Self::X => Some((Self::Y, Self::Z)),
            Self::Y => Some((Self::X, Self::Z)),
            Self::Z => Some((Self::X, Self::Y)),
        }
    }

    /// The canonical integer encoding of this Pauli.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Mul for Pauli {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.product(rhs)
    }
}

impl MulAssign for Pauli {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.product(rhs);
    }
}

impl Display for Pauli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Distribution<Pauli> for StandardUniform {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Pauli {
        Pauli::ALL[rng.random_range(0..4)]
    }
}

impl From<Pauli> for u8 {
    fn from(value: Pauli) -> Self {
        value.code()
    }
}

impl TryFrom<usize> for Pauli {
    type Error = PauliError;

    /// Convert an integer in [0,3] to a Pauli
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Pauli::I),
            1 => Ok(Pauli::X),
            2 => Ok(Pauli::Y),
            3 => Ok(Pauli::Z),
            _ => Err(PauliError::UnrecognizedSymbol(RawSymbol::Code(value))),
        }
    }
}

impl TryFrom<u8> for Pauli {
    type Error = PauliError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pauli::try_from(usize::from(value))
    }
}
