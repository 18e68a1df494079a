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

pub mod code;
pub use code::{CodeChoice, StabilizerCode, Verification};

pub mod distance;
pub use distance::{MinimumWeight, distance, logical_minimum_weight};

mod error;
pub use error::CodeError;

pub mod five_qubit;
pub mod surface;

pub use five_qubit::five_qubit_code;
pub use surface::surface_code;
