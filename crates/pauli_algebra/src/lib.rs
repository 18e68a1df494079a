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

//! Phase-free algebra of Pauli operators.
//!
//! Paulis are combined and compared symbol by symbol, without tracking signs
//! or factors of i. This is all that is needed to check that a set of
//! stabilizer generators commutes and is independent.

pub mod error;
pub mod family;
pub mod independence;
pub mod notation;
pub mod operator;
pub mod pauli;

pub use error::{PauliError, RawSymbol};
pub use family::OperatorFamily;
pub use notation::{to_char, to_symbol};
pub use operator::PauliOperator;
pub use pauli::Pauli;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_plain_lists() {
        let family = OperatorFamily::parse(&["xz", "Iy"]).unwrap();
        let json = serde_json::to_string(&family).unwrap();
        assert_eq!(r#"[["X","Z"],["I","Y"]]"#, json);

        let back: OperatorFamily = serde_json::from_str(&json).unwrap();
        assert_eq!(family, back);
    }

    #[test]
    fn serde_rejects_mixed_lengths() {
        let result = serde_json::from_str::<OperatorFamily>(r#"[["X","Z"],["I"]]"#);
        assert!(result.is_err());
    }
}
