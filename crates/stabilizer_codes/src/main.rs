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

use std::error::Error;

use clap::Parser;
use log::{info, warn};

use stabilizer_codes::{CodeChoice, logical_minimum_weight};

/// Print the stabilizer table of a code, check it and compute the weight of
/// its logical operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    code: CodeChoice,
    /// Linear size of size-parametrized codes
    #[arg(short, long, default_value_t = 3)]
    size: usize,
    /// Print the code as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // By default log INFO.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let code = cli.code.code(cli.size)?;
    info!(
        "Built {} on {} qubits with {} stabilizers",
        code.name(),
        code.qubits(),
        code.stabilizers().len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&code)?);
        return Ok(());
    }

    println!("Stabilizer,Weight");
    for stabilizer in code.stabilizers() {
        println!("{},{}", stabilizer, stabilizer.weight());
    }

    let verification = code.verify();
    println!("{verification}");
    if !verification.is_valid() {
        warn!("{} is not a valid stabilizer code", code.name());
        return Ok(());
    }

    println!("Logical,Weight,Minimum weight,Representative");
    for (index, logical) in code.logicals().iter().enumerate() {
        let minimum = logical_minimum_weight(&code, index)?;
        println!(
            "{},{},{},{}",
            logical,
            logical.weight(),
            minimum.weight,
            minimum.operator
        );
    }

    Ok(())
}
