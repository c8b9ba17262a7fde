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

//! A staging object for defining currencies and committing them into the
//! registry.

use ustr::Ustr;

use crate::{
    errors::CurrencyError,
    registry::{CURRENCY_REGISTRY, ISO_NAMESPACE},
    types::{Currency, currency::check_decimal_digits},
};

/// Stages the fields of a [`Currency`] for construction or modification.
///
/// All fields start unset; unset fields fall back to defaults at
/// [`build`](Self::build) time (namespace "ISO-4217", name = code, symbol
/// "¤", two decimal digits, active). Building never touches the registry;
/// [`register`](Self::register) commits the built currency into the
/// process-wide [`CURRENCY_REGISTRY`].
#[derive(Debug, Clone, Default)]
pub struct CurrencyBuilder {
    code: Option<Ustr>,
    namespace: Option<Ustr>,
    numeric_code: Option<Ustr>,
    name: Option<Ustr>,
    symbol: Option<Ustr>,
    decimal_digits: Option<u8>,
    is_active: Option<bool>,
}

impl CurrencyBuilder {
    /// Creates a new builder with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the currency code.
    pub fn code<T: AsRef<str>>(&mut self, code: T) -> &mut Self {
        self.code = Some(Ustr::from(code.as_ref()));
        self
    }

    /// Sets the namespace the code belongs to.
    pub fn namespace<T: AsRef<str>>(&mut self, namespace: T) -> &mut Self {
        self.namespace = Some(Ustr::from(namespace.as_ref()));
        self
    }

    /// Sets the numeric code.
    pub fn numeric_code<T: AsRef<str>>(&mut self, numeric_code: T) -> &mut Self {
        self.numeric_code = Some(Ustr::from(numeric_code.as_ref()));
        self
    }

    /// Sets the English name.
    pub fn name<T: AsRef<str>>(&mut self, name: T) -> &mut Self {
        self.name = Some(Ustr::from(name.as_ref()));
        self
    }

    /// Sets the display symbol.
    pub fn symbol<T: AsRef<str>>(&mut self, symbol: T) -> &mut Self {
        self.symbol = Some(Ustr::from(symbol.as_ref()));
        self
    }

    /// Sets the number of decimal digits of the minor unit.
    pub fn decimal_digits(&mut self, decimal_digits: u8) -> &mut Self {
        self.decimal_digits = Some(decimal_digits);
        self
    }

    /// Sets whether the currency is in circulation.
    pub fn is_active(&mut self, is_active: bool) -> &mut Self {
        self.is_active = Some(is_active);
        self
    }

    /// Copies all fields of `currency` into the builder for editing.
    pub fn load_data_from_currency(&mut self, currency: &Currency) -> &mut Self {
        self.code = Some(currency.code);
        self.namespace = Some(currency.namespace);
        self.numeric_code = Some(currency.numeric_code);
        self.name = Some(currency.name);
        self.symbol = Some(currency.symbol);
        self.decimal_digits = Some(currency.decimal_digits);
        self.is_active = Some(currency.is_active);
        self
    }

    /// Validates the staged fields and produces an immutable [`Currency`]
    /// without touching the registry.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::InvalidDefinition`] if the code is unset or
    /// empty, or the decimal digits are out of range.
    pub fn build(&self) -> Result<Currency, CurrencyError> {
        let code = self
            .code
            .filter(|c| !c.is_empty())
            .ok_or_else(|| CurrencyError::InvalidDefinition("`code` must be set".to_string()))?;
        let decimal_digits = self.decimal_digits.unwrap_or(2);
        check_decimal_digits(decimal_digits)
            .map_err(|e| CurrencyError::InvalidDefinition(e.to_string()))?;

        let mut currency = Currency::new_checked(
            code.as_str(),
            self.namespace.map_or(ISO_NAMESPACE, |ns| ns.as_str()),
            self.numeric_code.map_or("", |nc| nc.as_str()),
            self.name.map_or(code.as_str(), |n| n.as_str()),
            self.symbol.map_or("¤", |s| s.as_str()),
            decimal_digits,
        )
        .map_err(|e| CurrencyError::InvalidDefinition(e.to_string()))?;
        currency.is_active = self.is_active.unwrap_or(true);
        Ok(currency)
    }

    /// Builds the currency and registers it in the process-wide registry.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the `(code, namespace)` key is
    /// already registered.
    pub fn register(&self) -> Result<Currency, CurrencyError> {
        let currency = self.build()?;
        CURRENCY_REGISTRY.register(currency)
    }
}
