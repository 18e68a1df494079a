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

use std::fmt::{Display, Formatter};

/// The raw input that could not be read as a Pauli symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSymbol {
    Char(char),
    Code(usize),
}

impl Display for RawSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Char(c) => write!(f, "character {c:?}"),
            Self::Code(code) => write!(f, "code {code}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauliError {
    /// Two operators (or an operator list and its powers) have different lengths.
    LengthMismatch { expected: usize, found: usize },
    /// A power outside of {0, 1} was passed to a weighted product.
    InvalidPower { index: usize, value: u8 },
    QubitOutOfRange { qubit: usize, qubits: usize },
    UnrecognizedSymbol(RawSymbol),
    /// A family of operators acting on zero qubits.
    MalformedFamily,
}

impl Display for PauliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "length mismatch: expected {expected}, found {found}")
            }
            Self::InvalidPower { index, value } => {
                write!(f, "power at {index} must be 0 or 1, found {value}")
            }
            Self::QubitOutOfRange { qubit, qubits } => {
                write!(f, "qubit {qubit} out of range for {qubits} qubits")
            }
            Self::UnrecognizedSymbol(raw) => write!(f, "unrecognized Pauli symbol: {raw}"),
            Self::MalformedFamily => write!(f, "operator family acts on zero qubits"),
        }
    }
}

impl std::error::Error for PauliError {}
