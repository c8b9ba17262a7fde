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

//! Represents a medium of exchange in a specified denomination.

use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use moneta_core::correctness::{
    FAILED, check_in_range_inclusive_u32, check_nonempty_string, check_valid_code,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use ustr::Ustr;

use crate::{
    errors::CurrencyError,
    registry::{CURRENCY_REGISTRY, ISO_NAMESPACE},
};

/// The maximum number of decimal digits a currency may declare.
///
/// Bounded by the maximum scale of [`rust_decimal::Decimal`].
pub const MAX_DECIMAL_DIGITS: u8 = 28;

/// Sentinel for currencies where decimal digits are not applicable
/// (precious metals, test funds). Treated as zero digits wherever a
/// concrete scale is required.
pub const DIGITS_NOT_APPLICABLE: u8 = u8::MAX;

/// Checks if the given `decimal_digits` value is representable.
///
/// # Errors
///
/// Returns an error if `decimal_digits` exceeds [`MAX_DECIMAL_DIGITS`]
/// and is not the [`DIGITS_NOT_APPLICABLE`] sentinel.
pub fn check_decimal_digits(decimal_digits: u8) -> anyhow::Result<()> {
    if decimal_digits == DIGITS_NOT_APPLICABLE {
        return Ok(());
    }
    check_in_range_inclusive_u32(
        u32::from(decimal_digits),
        0,
        u32::from(MAX_DECIMAL_DIGITS),
        "decimal_digits",
    )
}

/// Represents a medium of exchange in a specified denomination.
///
/// A currency is immutable value data: replacing one in the registry means
/// registering a new instance under the same `(code, namespace)` key, never
/// mutating in place. Equality and hashing consider only the identifying
/// `(code, namespace)` pair.
#[derive(Clone, Copy, Eq)]
pub struct Currency {
    /// The currency code, unique within its namespace (e.g. "USD", "EUR").
    pub code: Ustr,
    /// The namespace the code belongs to (e.g. "ISO-4217").
    pub namespace: Ustr,
    /// The numeric code assigned within the namespace (e.g. "978" for EUR).
    pub numeric_code: Ustr,
    /// The full English name of the currency.
    pub name: Ustr,
    /// The display symbol (e.g. "€"), or the generic "¤" when unknown.
    pub symbol: Ustr,
    /// The number of decimal digits of the minor unit, or
    /// [`DIGITS_NOT_APPLICABLE`].
    pub decimal_digits: u8,
    /// Whether the currency is currently in circulation.
    pub is_active: bool,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` or `namespace` is empty or contains whitespace/control characters.
    /// - `name` is the empty string.
    /// - `decimal_digits` is invalid per [`check_decimal_digits`].
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        namespace: T,
        numeric_code: T,
        name: T,
        symbol: T,
        decimal_digits: u8,
    ) -> anyhow::Result<Self> {
        check_valid_code(&code, "code")?;
        check_nonempty_string(&namespace, "namespace")?;
        check_nonempty_string(&name, "name")?;
        check_decimal_digits(decimal_digits)?;
        Ok(Self {
            code: Ustr::from(code.as_ref()),
            namespace: Ustr::from(namespace.as_ref()),
            numeric_code: Ustr::from(numeric_code.as_ref()),
            name: Ustr::from(name.as_ref()),
            symbol: Ustr::from(symbol.as_ref()),
            decimal_digits,
            is_active: true,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    pub fn new<T: AsRef<str>>(
        code: T,
        namespace: T,
        numeric_code: T,
        name: T,
        symbol: T,
        decimal_digits: u8,
    ) -> Self {
        Self::new_checked(code, namespace, numeric_code, name, symbol, decimal_digits)
            .expect(FAILED)
    }

    /// Creates a new [`Currency`] in the default "ISO-4217" namespace.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    pub fn iso(code: &str, numeric_code: &str, name: &str, symbol: &str, decimal_digits: u8) -> Self {
        Self::new(code, ISO_NAMESPACE, numeric_code, name, symbol, decimal_digits)
    }

    /// Returns the scale used for the minor unit: the declared decimal digits,
    /// or zero when digits are [not applicable](DIGITS_NOT_APPLICABLE).
    #[must_use]
    pub fn minor_unit_scale(&self) -> u32 {
        if self.decimal_digits == DIGITS_NOT_APPLICABLE {
            0
        } else {
            u32::from(self.decimal_digits)
        }
    }

    /// Returns the smallest representable increment, `10^-decimal_digits`
    /// (e.g. `0.01` for EUR, `1` for JPY, `0.001` for BHD).
    #[must_use]
    pub fn minimal_amount(&self) -> Decimal {
        Decimal::new(1, self.minor_unit_scale())
    }

    /// Returns `true` if this is the "no currency" sentinel (`XXX`).
    #[must_use]
    pub fn is_no_currency(&self) -> bool {
        *self == Self::no_currency()
    }

    /// Attempts to resolve a [`Currency`] from the process registry, returning
    /// `None` if not found.
    #[must_use]
    pub fn try_from_str(s: &str) -> Option<Self> {
        CURRENCY_REGISTRY.get(s).ok()
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.namespace == other.namespace
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.namespace.hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', namespace='{}', numeric_code='{}', name='{}', symbol='{}', decimal_digits={})",
            stringify!(Currency),
            self.code,
            self.namespace,
            self.numeric_code,
            self.name,
            self.symbol,
            self.decimal_digits,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CURRENCY_REGISTRY.get(s)
    }
}

impl<T: AsRef<str>> From<T> for Currency {
    fn from(value: T) -> Self {
        Self::from_str(value.as_ref()).expect(FAILED)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let currency_str: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&currency_str).map_err(serde::de::Error::custom)
    }
}
