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

//! The planar surface code.
//!
//! The code lives on a `(2L + 1) x (2L + 1)` grid, `L` being the linear size.
//! Sites `(r, c)` with `r + c` even hold data qubits, numbered row by row.
//! Sites with `r + c` odd hold checks acting on their (up to four) horizontal
//! and vertical neighbours: Z checks on even rows and X checks on odd rows.
//! Every row of the grid thus has `L` checks between `L + 1` qubits or the
//! other way round.
//!
//! This gives `L^2 + (L + 1)^2` data qubits, `2L(L + 1)` independent checks,
//! one logical qubit and distance `L + 1`. The logical X runs along the top
//! row and the logical Z down the left column.

use pauli_algebra::{OperatorFamily, Pauli, PauliOperator};

use crate::{CodeError, StabilizerCode};

/// Build the planar surface code of linear size `size` (at least 1).
pub fn surface_code(size: usize) -> Result<StabilizerCode, CodeError> {
    if size == 0 {
        return Err(CodeError::InvalidSize { size });
    }
    let lattice = Lattice::new(size);

    let mut stabilizers = OperatorFamily::with_qubits(lattice.qubits(), vec![])?;
    for r in 0..lattice.side {
        for c in 0..lattice.side {
            if (r + c) % 2 == 1 {
                stabilizers.push(lattice.check(r, c))?;
            }
        }
    }

    let logical_x = lattice.string(Pauli::X, (0..lattice.side).step_by(2).map(|c| (0, c)))?;
    let logical_z = lattice.string(Pauli::Z, (0..lattice.side).step_by(2).map(|r| (r, 0)))?;

    StabilizerCode::new(
        format!("surface-{size}"),
        stabilizers,
        vec![logical_x, logical_z],
    )
}

struct Lattice {
    side: usize,
}

impl Lattice {
    fn new(size: usize) -> Self {
        Self {
            side: 2 * size + 1,
        }
    }

    fn qubits(&self) -> usize {
        (self.side * self.side).div_ceil(2)
    }

    /// Index of the data qubit on site `(r, c)`, which must have `r + c` even.
    fn qubit(&self, r: usize, c: usize) -> usize {
        debug_assert!((r + c) % 2 == 0);
        (r * self.side + c) / 2
    }

    fn neighbours(&self, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
        let side = self.side;
        [
            (r.checked_sub(1), Some(c)),
            (Some(r + 1), Some(c)),
            (Some(r), c.checked_sub(1)),
            (Some(r), Some(c + 1)),
        ]
        .into_iter()
        .filter_map(move |site| match site {
            (Some(r), Some(c)) if r < side && c < side => Some((r, c)),
            _ => None,
        })
    }

    /// The check on site `(r, c)`, which must have `r + c` odd.
    fn check(&self, r: usize, c: usize) -> PauliOperator {
        let pauli = if r % 2 == 0 { Pauli::Z } else { Pauli::X };
        let mut paulis = vec![Pauli::I; self.qubits()];
        for (nr, nc) in self.neighbours(r, c) {
            paulis[self.qubit(nr, nc)] = pauli;
        }
        PauliOperator::new(paulis)
    }

    /// Product of `pauli` on each of the given data sites.
    fn string(
        &self,
        pauli: Pauli,
        sites: impl Iterator<Item = (usize, usize)>,
    ) -> Result<PauliOperator, CodeError> {
        let n = self.qubits();
        let mut out = PauliOperator::identity(n);
        for (r, c) in sites {
            out.multiply(&PauliOperator::single(n, self.qubit(r, c), pauli)?)?;
        }
        Ok(out)
    }
}
