// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2024-2026 Moneta contributors. All rights reserved.
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Errors for currency resolution and monetary operations.
//!
//! All failures in this crate are local and synchronous: they surface directly
//! to the caller and are never retried or suppressed internally.

/// Errors raised by the currency registry and the currency builder.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// No currency is registered under the given code and namespace.
    #[error("Currency not found: '{code}' in namespace '{namespace}'")]
    NotFound {
        /// The requested currency code.
        code: String,
        /// The requested namespace.
        namespace: String,
    },
    /// A currency is already registered under the given code and namespace.
    #[error("Currency already registered: '{code}' in namespace '{namespace}'")]
    AlreadyExists {
        /// The conflicting currency code.
        code: String,
        /// The conflicting namespace.
        namespace: String,
    },
    /// A currency definition failed validation before registration.
    #[error("Invalid currency definition: {0}")]
    InvalidDefinition(String),
}

/// Errors raised by monetary construction, arithmetic, comparison, and splitting.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Two operands were bound to incompatible currencies.
    #[error("Currency mismatch: cannot combine {lhs} and {rhs}")]
    CurrencyMismatch {
        /// The left operand's currency code.
        lhs: String,
        /// The right operand's currency code.
        rhs: String,
    },
    /// A split count or ratio weight was outside the valid range.
    #[error("Argument out of range for '{param}' at position {index}, was {value}")]
    ArgumentOutOfRange {
        /// The offending parameter name.
        param: &'static str,
        /// The position of the offending value within the argument.
        index: usize,
        /// The offending value rendered as a string.
        value: String,
    },
    /// Scalar division by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The process-wide default context was already read or set.
    #[error("Default `MoneyContext` already initialized")]
    DefaultContextAlreadySet,
    /// A string could not be parsed as a monetary value.
    #[error("Error parsing `Money` from '{input}': {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// A currency could not be resolved during a monetary operation.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}
