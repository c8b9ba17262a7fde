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

//! The rounding and currency-matching policy bound to every `Money` value.

use std::sync::OnceLock;

use derive_builder::Builder;
use rust_decimal::Decimal;

use crate::{enums::RoundingMode, errors::MoneyError, types::Currency};

static DEFAULT_CONTEXT: OnceLock<MoneyContext> = OnceLock::new();

/// The policy governing rounding and cross-currency comparison for monetary
/// values.
///
/// A context is immutable once created; many `Money` values may share one.
/// The process-wide default is initialized on first read and cannot be
/// mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Builder)]
#[builder(default, derive(Debug))]
pub struct MoneyContext {
    /// The rounding strategy applied at the currency's scale.
    pub rounding: RoundingMode,
    /// Whether a zero amount must still match currencies in comparisons.
    ///
    /// Under strict matching (the default) any cross-currency comparison
    /// fails, even when one side is zero. Under relaxed matching a zero
    /// amount is currency-agnostic.
    pub enforce_zero_currency_matching: bool,
    /// Optional cap on the effective scale, below the currency's decimal
    /// digits.
    pub max_scale: Option<u32>,
}

impl Default for MoneyContext {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::HalfEven,
            enforce_zero_currency_matching: true,
            max_scale: None,
        }
    }
}

impl MoneyContext {
    /// Returns a builder for configuring a new context.
    #[must_use]
    pub fn builder() -> MoneyContextBuilder {
        MoneyContextBuilder::default()
    }

    /// Returns the process-wide default context, initializing it to
    /// [`MoneyContext::default`] on first read.
    #[must_use]
    pub fn default_context() -> Self {
        *DEFAULT_CONTEXT.get_or_init(Self::default)
    }

    /// Installs `context` as the process-wide default.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DefaultContextAlreadySet`] if the default has
    /// already been read or set; the default never changes after first use.
    pub fn set_default(context: Self) -> Result<(), MoneyError> {
        DEFAULT_CONTEXT
            .set(context)
            .map_err(|_| MoneyError::DefaultContextAlreadySet)
    }

    /// Returns the effective scale for `currency` under this context: the
    /// currency's decimal digits, capped by [`max_scale`](Self::max_scale)
    /// when set.
    ///
    /// All minor-unit granular operations (splitting, increment/decrement)
    /// operate at this scale so that amounts survive the rounding applied at
    /// construction.
    #[must_use]
    pub fn effective_scale(&self, currency: &Currency) -> u32 {
        let scale = currency.minor_unit_scale();
        match self.max_scale {
            Some(max_scale) => scale.min(max_scale),
            None => scale,
        }
    }

    /// Rounds `amount` to the [effective scale](Self::effective_scale) for
    /// `currency`.
    ///
    /// Invoked by every `Money` constructor and arithmetic result.
    #[must_use]
    pub fn round(&self, amount: Decimal, currency: &Currency) -> Decimal {
        self.rounding.round(amount, self.effective_scale(currency))
    }
}
