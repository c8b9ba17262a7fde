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

//! Domain model for the Moneta money library.
//!
//! The `moneta-model` crate provides a precise monetary value type bound to a
//! currency, together with the supporting machinery a real monetary domain
//! needs:
//!
//! - [`Money`](types::Money) — an immutable `(amount, currency, context)`
//!   value with currency-aware arithmetic, comparison, and exact
//!   total-preserving splitting.
//! - [`Currency`](types::Currency) — immutable currency metadata (code,
//!   namespace, numeric code, symbol, decimal digits).
//! - [`CurrencyBuilder`](types::CurrencyBuilder) — a staging object for
//!   defining custom currencies and committing them into the registry.
//! - [`MoneyContext`](types::MoneyContext) — the rounding and
//!   currency-matching policy applied by every construction and operation.
//! - [`CurrencyRegistry`](registry::CurrencyRegistry) — the process-wide
//!   currency table, pre-populated with ISO-4217 and extensible at runtime.
//!
//! Amounts are held as [`rust_decimal::Decimal`] values and are always rounded
//! to the bound currency's minor unit (per the active [`MoneyContext`](types::MoneyContext))
//! at the point of construction or as the result of an operation.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod currencies;
pub mod enums;
pub mod errors;
pub mod registry;
pub mod types;

// Re-exports
pub use crate::{
    enums::RoundingMode,
    errors::{CurrencyError, MoneyError},
    registry::{CURRENCY_REGISTRY, CurrencyRegistry, ISO_NAMESPACE},
    types::{Currency, CurrencyBuilder, Money, MoneyContext},
};
