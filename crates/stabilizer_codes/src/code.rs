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

use std::fmt::Display;

use clap::ValueEnum;
use log::debug;
use pauli_algebra::{OperatorFamily, PauliError, PauliOperator};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{CodeError, five_qubit, surface};

/// A stabilizer code given by its generators and a choice of logical operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StabilizerCode {
    name: String,
    stabilizers: OperatorFamily,
    logicals: Vec<PauliOperator>,
}

impl StabilizerCode {
    /// Logical operators must act on as many qubits as the stabilizers.
    pub fn new(
        name: impl Into<String>,
        stabilizers: OperatorFamily,
        logicals: Vec<PauliOperator>,
    ) -> Result<Self, CodeError> {
        let qubits = stabilizers.qubits();
        if let Some(logical) = logicals
            .iter()
            .find(|l| qubits != 0 && l.len() != qubits)
        {
            return Err(CodeError::Pauli(PauliError::LengthMismatch {
                expected: qubits,
                found: logical.len(),
            }));
        }
        Ok(Self {
            name: name.into(),
            stabilizers,
            logicals,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stabilizers(&self) -> &OperatorFamily {
        &self.stabilizers
    }

    pub fn logicals(&self) -> &[PauliOperator] {
        &self.logicals
    }

    pub fn qubits(&self) -> usize {
        self.stabilizers.qubits()
    }

    /// Number of encoded qubits, n minus the rank of the stabilizer group.
    ///
    /// `None` when the generators have a larger rank than the number of
    /// qubits, which only happens if some of them anticommute.
    pub fn encoded_qubits(&self) -> Option<usize> {
        self.qubits().checked_sub(self.stabilizers.rank())
    }

    /// Pairs `(n, m)`, `n < m`, of anticommuting stabilizer generators.
    pub fn anticommuting_pairs(&self) -> Vec<(usize, usize)> {
        let table = self.stabilizers.commutation_matrix();
        table
            .iter()
            .enumerate()
            .flat_map(|(n, row)| {
                row.iter()
                    .enumerate()
                    .skip(n + 1)
                    .filter(|(_, c)| **c == 1)
                    .map(move |(m, _)| (n, m))
            })
            .collect()
    }

    /// Check that the generators define a valid code and the logicals are
    /// genuine logical operators.
    pub fn verify(&self) -> Verification {
        let stabilizers_commute = !self.stabilizers.any_anticommute();
        if !stabilizers_commute {
            debug!(
                "Anticommuting stabilizers in {}: {:?}",
                self.name,
                self.anticommuting_pairs()
            );
        }
        let stabilizers_independent = self.stabilizers.is_independent();

        let logicals_commute = self.logicals.iter().all(|logical| {
            self.stabilizers
                .syndrome(logical)
                .is_ok_and(|syndrome| syndrome.iter().all(|&s| s == 0))
        });

        // Stabilizers and logicals together must be independent, so no logical
        // is a product of stabilizers (or of stabilizers and other logicals).
        let mut extended = self.stabilizers.clone();
        let logicals_independent = self
            .logicals
            .iter()
            .all(|logical| extended.push(logical.clone()).is_ok())
            && extended.is_independent();

        let verification = Verification {
            stabilizers_commute,
            stabilizers_independent,
            logicals_commute,
            logicals_independent,
        };
        debug!("Verified {}: {verification:?}", self.name);
        verification
    }
}

impl<'de> Deserialize<'de> for StabilizerCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            name: String,
            stabilizers: OperatorFamily,
            logicals: Vec<PauliOperator>,
        }

        let fields = Fields::deserialize(deserializer)?;
        StabilizerCode::new(fields.name, fields.stabilizers, fields.logicals)
            .map_err(serde::de::Error::custom)
    }
}

/// Outcome of [`StabilizerCode::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// No two stabilizer generators anticommute.
    pub stabilizers_commute: bool,
    /// No product of generators is the identity.
    pub stabilizers_independent: bool,
    /// Every logical operator commutes with every stabilizer.
    pub logicals_commute: bool,
    /// No product of logicals lies in the stabilizer group.
    pub logicals_independent: bool,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        self.stabilizers_commute
            && self.stabilizers_independent
            && self.logicals_commute
            && self.logicals_independent
    }
}

impl Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = |ok: bool| if ok { "ok" } else { "FAILED" };
        writeln!(f, "stabilizers commute: {}", mark(self.stabilizers_commute))?;
        writeln!(
            f,
            "stabilizers independent: {}",
            mark(self.stabilizers_independent)
        )?;
        writeln!(f, "logicals commute: {}", mark(self.logicals_commute))?;
        write!(
            f,
            "logicals independent: {}",
            mark(self.logicals_independent)
        )
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CodeChoice {
    Surface,
    FiveQubit,
}

impl CodeChoice {
    /// Build the code; `size` is only used by size-parametrized families.
    pub fn code(&self, size: usize) -> Result<StabilizerCode, CodeError> {
        match self {
            Self::Surface => surface::surface_code(size),
            Self::FiveQubit => Ok(five_qubit::five_qubit_code()),
        }
    }
}

impl Display for CodeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Surface => write!(f, "surface"),
            Self::FiveQubit => write!(f, "five-qubit"),
        }
    }
}
