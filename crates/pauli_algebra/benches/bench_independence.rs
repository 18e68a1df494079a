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

//! Timing for the symbolic independence test on random families.
//!
//! Run with:
//!
//! ```sh
//! cargo bench --package pauli_algebra --bench bench_independence
//! ```

use std::hint::black_box;
use std::time::Instant;

use pauli_algebra::{OperatorFamily, PauliOperator};
use rand::{SeedableRng, rngs::StdRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(0xA5A5_5A5A);

    println!("=== Independence Benchmark ===");
    for (qubits, members) in [(16, 8), (64, 32), (144, 72)] {
        let families: Vec<OperatorFamily> = (0..100)
            .map(|_| {
                let ops = (0..members)
                    .map(|_| PauliOperator::random(qubits, &mut rng))
                    .collect();
                OperatorFamily::with_qubits(qubits, ops).expect("random operators share a length")
            })
            .collect();

        let start = Instant::now();
        let mut independent = 0;
        for family in &families {
            if black_box(family).is_independent() {
                independent += 1;
            }
        }
        let elapsed = start.elapsed();

        println!(
            "{qubits:>4} qubits, {members:>3} members: {:>10.2?} per family ({independent}/{} independent)",
            elapsed / families.len() as u32,
            families.len()
        );
    }
}
