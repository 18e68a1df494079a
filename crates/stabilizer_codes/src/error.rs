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

use pauli_algebra::PauliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Pauli(PauliError),
    /// Surface codes need at least one plaquette per row.
    InvalidSize { size: usize },
    /// The distance search enumerates every stabilizer product, which is only
    /// feasible for a limited number of generators.
    TooManyGenerators { generators: usize, limit: usize },
    /// The operator at `index` anticommutes with a stabilizer or lies in the
    /// stabilizer group.
    NotALogical { index: usize },
    /// Asked for logical `index` of a code with only `logicals` of them.
    NoSuchLogical { index: usize, logicals: usize },
    /// The distance of a code is taken over its logical operators.
    NoLogicals,
    /// Every non-empty combination of logicals is searched.
    TooManyLogicals { logicals: usize, limit: usize },
}

impl Display for CodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pauli(err) => write!(f, "{err}"),
            Self::InvalidSize { size } => write!(f, "invalid surface code size: {size}"),
            Self::TooManyGenerators { generators, limit } => write!(
                f,
                "cannot enumerate products of {generators} stabilizers (limit {limit})"
            ),
            Self::NotALogical { index } => {
                write!(f, "operator {index} is not a non-trivial logical operator")
            }
            Self::NoSuchLogical { index, logicals } => {
                write!(f, "no logical {index} in a code with {logicals} logicals")
            }
            Self::NoLogicals => write!(f, "code has no logical operators"),
            Self::TooManyLogicals { logicals, limit } => write!(
                f,
                "cannot enumerate combinations of {logicals} logicals (limit {limit})"
            ),
        }
    }
}

impl std::error::Error for CodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pauli(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PauliError> for CodeError {
    fn from(value: PauliError) -> Self {
        Self::Pauli(value)
    }
}
