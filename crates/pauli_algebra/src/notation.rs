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

//! Mnemonic notation for Paulis: `I`, `x`, `y` and `z`.
//!
//! The identity is upper case and the other three are lower case, which keeps
//! long operators readable (`xzzxI`). The mapping is exact in both directions,
//! so `X` or `i` are rejected rather than normalized.

use std::{fmt, str::FromStr};

use crate::{
    error::{PauliError, RawSymbol},
    operator::PauliOperator,
    pauli::Pauli,
};

/// Integer code of the Pauli written as `c`.
pub fn to_symbol(c: char) -> Result<u8, PauliError> {
    Pauli::try_from(c).map(Pauli::code)
}

/// Mnemonic of the Pauli with integer code `code`.
pub fn to_char(code: u8) -> Result<char, PauliError> {
    Pauli::try_from(code).map(Pauli::to_char)
}

impl Pauli {
    pub fn to_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'x',
            Pauli::Y => 'y',
            Pauli::Z => 'z',
        }
    }
}

impl TryFrom<char> for Pauli {
    type Error = PauliError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'I' => Ok(Pauli::I),
            'x' => Ok(Pauli::X),
            'y' => Ok(Pauli::Y),
            'z' => Ok(Pauli::Z),
            c => Err(PauliError::UnrecognizedSymbol(RawSymbol::Char(c))),
        }
    }
}

impl fmt::Display for PauliOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for pauli in self.iter() {
            write!(f, "{}", pauli.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for PauliOperator {
    type Err = PauliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Pauli::try_from).collect()
    }
}
