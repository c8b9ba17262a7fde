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

//! Represents an amount of money in a specified currency denomination.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};

use moneta_core::correctness::FAILED;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thousands::Separable;

use crate::{
    errors::MoneyError,
    types::{Currency, MoneyContext, split},
};

/// The currency-agnostic multiplicative identity: multiplying any `Money` by
/// this scalar yields an equal `Money`.
pub const MULTIPLICATIVE_IDENTITY: Decimal = Decimal::ONE;

/// Represents an amount of money in a specified currency denomination.
///
/// The amount is always rounded to the currency's minor unit per the bound
/// [`MoneyContext`] at the point of construction or as the result of an
/// operation. Values are immutable: every operation yields a new `Money`.
///
/// Equality and hashing consider amount and currency only; the bound context
/// does not participate.
#[derive(Clone, Copy, Eq)]
pub struct Money {
    /// The monetary amount, rounded to the currency's minor unit.
    pub amount: Decimal,
    /// The currency denomination associated with the amount.
    pub currency: Currency,
    /// The rounding and comparison policy bound to this value.
    pub context: MoneyContext,
}

impl Money {
    /// Creates a new [`Money`] instance bound to the given `context`.
    ///
    /// The `amount` is rounded per `context` before storage.
    #[must_use]
    pub fn with_context(amount: Decimal, currency: Currency, context: MoneyContext) -> Self {
        Self {
            amount: context.round(amount, &currency),
            currency,
            context,
        }
    }

    /// Creates a new [`Money`] instance bound to the process-wide default
    /// context.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self::with_context(amount, currency, MoneyContext::default_context())
    }

    /// Creates a new [`Money`] instance with a value of zero in the given
    /// [`Currency`].
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// The additive identity: zero amount bound to the
    /// [no-currency sentinel](Currency::no_currency). Adding it to any `Money`
    /// yields an equal `Money` of that money's currency.
    #[must_use]
    pub fn additive_identity() -> Self {
        Self::new(Decimal::ZERO, Currency::no_currency())
    }

    /// Returns `true` if the amount of this instance is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `true` if this instance is the additive identity (zero amount,
    /// no-currency sentinel).
    #[must_use]
    pub fn is_additive_identity(&self) -> bool {
        self.is_zero() && self.currency.is_no_currency()
    }

    /// Returns the amount as a count of the currency's minor units
    /// (e.g. `1.50 EUR` -> 150, `1500 JPY` -> 1500).
    #[must_use]
    pub fn minor_units(&self) -> i128 {
        let mut amount = self.amount;
        amount.rescale(self.currency.minor_unit_scale());
        amount.mantissa()
    }

    /// Creates a new [`Money`] from a count of the currency's minor units,
    /// bound to the default context.
    #[must_use]
    pub fn from_minor_units(units: i128, currency: Currency) -> Self {
        Self::from_minor_units_with_context(units, currency, MoneyContext::default_context())
    }

    /// Creates a new [`Money`] from a count of the currency's minor units,
    /// bound to the given `context`.
    #[must_use]
    pub fn from_minor_units_with_context(
        units: i128,
        currency: Currency,
        context: MoneyContext,
    ) -> Self {
        let amount = Decimal::from_i128_with_scale(units, currency.minor_unit_scale());
        Self::with_context(amount, currency, context)
    }

    /// Adds `rhs` to this value.
    ///
    /// Currencies must match, with the zero-currency relaxation: an operand
    /// that is the [additive identity](Self::additive_identity) adopts the
    /// other side's currency, and under relaxed matching
    /// (`enforce_zero_currency_matching = false` on the left operand's
    /// context) any zero-amount operand is currency-agnostic the same way.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for non-zero operands of
    /// different currencies.
    ///
    /// # Panics
    ///
    /// Panics if the amount overflows the decimal range.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MoneyError> {
        if self.currency == rhs.currency {
            let amount = self
                .amount
                .checked_add(rhs.amount)
                .expect("Overflow occurred when adding `Money`");
            return Ok(Self::with_context(amount, self.currency, self.context));
        }
        if rhs.is_additive_identity() {
            return Ok(*self);
        }
        if self.is_additive_identity() {
            return Ok(Self::with_context(rhs.amount, rhs.currency, rhs.context));
        }
        if !self.context.enforce_zero_currency_matching {
            if rhs.is_zero() {
                return Ok(*self);
            }
            if self.is_zero() {
                return Ok(Self::with_context(rhs.amount, rhs.currency, rhs.context));
            }
        }
        Err(self.mismatch(rhs))
    }

    /// Subtracts `rhs` from this value, under the same currency rules as
    /// [`try_add`](Self::try_add).
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] for non-zero operands of
    /// different currencies.
    ///
    /// # Panics
    ///
    /// Panics if the amount overflows the decimal range.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MoneyError> {
        if self.currency == rhs.currency {
            let amount = self
                .amount
                .checked_sub(rhs.amount)
                .expect("Underflow occurred when subtracting `Money`");
            return Ok(Self::with_context(amount, self.currency, self.context));
        }
        if rhs.is_additive_identity() {
            return Ok(*self);
        }
        if self.is_additive_identity() {
            return Ok(Self::with_context(-rhs.amount, rhs.currency, rhs.context));
        }
        if !self.context.enforce_zero_currency_matching {
            if rhs.is_zero() {
                return Ok(*self);
            }
            if self.is_zero() {
                return Ok(Self::with_context(-rhs.amount, rhs.currency, rhs.context));
            }
        }
        Err(self.mismatch(rhs))
    }

    /// Multiplies the amount by a currency-agnostic scalar, preserving
    /// currency and context; the result is rounded per the context.
    #[must_use]
    pub fn mul_scalar(&self, factor: Decimal) -> Self {
        Self::with_context(self.amount * factor, self.currency, self.context)
    }

    /// Divides the amount by a currency-agnostic scalar, preserving currency
    /// and context; the result is rounded per the context.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] if `divisor` is zero.
    pub fn try_div_scalar(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::with_context(
            self.amount / divisor,
            self.currency,
            self.context,
        ))
    }

    /// Returns this value increased by one minor unit of its currency
    /// (`+1` for JPY, `+0.01` for EUR, `+0.001` for BHD).
    ///
    /// When the context caps the scale below the currency's digits, the step
    /// is one unit at the effective scale, so incrementing always moves the
    /// amount.
    #[must_use]
    pub fn increment(&self) -> Self {
        Self::with_context(self.amount + self.effective_step(), self.currency, self.context)
    }

    /// Returns this value decreased by one minor unit of its currency, under
    /// the same scale rules as [`increment`](Self::increment).
    #[must_use]
    pub fn decrement(&self) -> Self {
        Self::with_context(self.amount - self.effective_step(), self.currency, self.context)
    }

    fn effective_step(&self) -> Decimal {
        Decimal::new(1, self.context.effective_scale(&self.currency))
    }

    /// Compares two monetary values under the left operand's context.
    ///
    /// With equal currencies the amounts are compared directly. With
    /// different currencies:
    ///
    /// - strict matching (`enforce_zero_currency_matching = true`): always a
    ///   [`MoneyError::CurrencyMismatch`], even when one side is zero;
    /// - relaxed matching: a zero side is currency-agnostic, so the non-zero
    ///   side's sign determines the ordering (both zero compare equal); two
    ///   non-zero sides still mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] as described above.
    pub fn compare(&self, other: &Self) -> Result<Ordering, MoneyError> {
        if self.currency == other.currency {
            return Ok(self.amount.cmp(&other.amount));
        }
        if self.context.enforce_zero_currency_matching {
            return Err(self.mismatch(other));
        }
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ok(Ordering::Equal),
            (true, false) => Ok(Decimal::ZERO.cmp(&other.amount)),
            (false, true) => Ok(self.amount.cmp(&Decimal::ZERO)),
            (false, false) => Err(self.mismatch(other)),
        }
    }

    /// Splits this value into `n` parts whose amounts sum exactly to this
    /// amount: no minor unit is lost or created. Earlier parts receive the
    /// leftover minor units.
    ///
    /// Splitting operates at the context's effective scale, so a `max_scale`
    /// cap below the currency's digits preserves the total at that coarser
    /// granularity.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArgumentOutOfRange`] if `n` is zero.
    pub fn split(&self, n: usize) -> Result<Vec<Self>, MoneyError> {
        if n == 0 {
            return Err(MoneyError::ArgumentOutOfRange {
                param: "n",
                index: 0,
                value: "0".to_string(),
            });
        }
        let (units, scale) = self.effective_units();
        let parts = split::split_even(units, n);
        Ok(self.from_unit_parts(parts, scale))
    }

    /// Splits this value into parts proportional to `ratios`, preserving
    /// input order, with the parts summing exactly to this amount. Operates
    /// at the context's effective scale like [`split`](Self::split).
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArgumentOutOfRange`] if `ratios` is empty, any
    /// weight is negative (the error names its position), or all weights are
    /// zero.
    pub fn split_by_ratios(&self, ratios: &[Decimal]) -> Result<Vec<Self>, MoneyError> {
        let (units, scale) = self.effective_units();
        let parts = split::split_by_ratios(units, ratios)?;
        Ok(self.from_unit_parts(parts, scale))
    }

    // The stored amount has at most the effective scale, so the rescale is
    // exact and the mantissa is a whole count of effective units.
    fn effective_units(&self) -> (i128, u32) {
        let scale = self.context.effective_scale(&self.currency);
        let mut amount = self.amount;
        amount.rescale(scale);
        (amount.mantissa(), scale)
    }

    fn from_unit_parts(&self, parts: Vec<i128>, scale: u32) -> Vec<Self> {
        parts
            .into_iter()
            .map(|units| {
                Self::with_context(
                    Decimal::from_i128_with_scale(units, scale),
                    self.currency,
                    self.context,
                )
            })
            .collect()
    }

    /// Returns a formatted string representation of this instance with
    /// thousands separators.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        let mut amount = self.amount;
        amount.rescale(self.currency.minor_unit_scale());
        format!(
            "{} {}",
            amount.separate_with_underscores(),
            self.currency.code
        )
    }

    fn mismatch(&self, other: &Self) -> MoneyError {
        MoneyError::CurrencyMismatch {
            lhs: self.currency.code.to_string(),
            rhs: other.currency.code.to_string(),
        }
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(MoneyError::Parse {
                input: value.to_string(),
                reason: "expected '<amount> <currency>'".to_string(),
            });
        }

        let clean_amount = parts[0].replace('_', "");
        let decimal = if clean_amount.contains(['e', 'E']) {
            Decimal::from_scientific(&clean_amount)
        } else {
            Decimal::from_str(&clean_amount)
        }
        .map_err(|e| MoneyError::Parse {
            input: value.to_string(),
            reason: e.to_string(),
        })?;

        let currency = Currency::from_str(parts[1])?;
        Ok(Self::new(decimal, currency))
    }
}

impl<T: AsRef<str>> From<T> for Money {
    fn from(value: T) -> Self {
        Self::from_str(value.as_ref()).expect(FAILED)
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency == other.currency
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            currency: self.currency,
            context: self.context,
        }
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs).expect(FAILED)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs).expect(FAILED)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = self.try_add(&other).expect(FAILED);
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = self.try_sub(&other).expect(FAILED);
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;
    fn div(self, rhs: Decimal) -> Self::Output {
        self.try_div_scalar(rhs).expect(FAILED)
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut amount = self.amount;
        amount.rescale(self.currency.minor_unit_scale());
        write!(f, "{}({}, {})", stringify!(Money), amount, self.currency)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut amount = self.amount;
        amount.rescale(self.currency.minor_unit_scale());
        write!(f, "{} {}", amount, self.currency)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let money_str: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&money_str).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::enums::RoundingMode;

    #[fixture]
    fn relaxed() -> MoneyContext {
        MoneyContext::builder()
            .enforce_zero_currency_matching(false)
            .build()
            .unwrap()
    }

    #[rstest]
    fn test_debug() {
        let money = Money::new(dec!(1010.12), Currency::USD());
        assert_eq!(format!("{money:?}"), "Money(1010.12, USD)");
    }

    #[rstest]
    fn test_display() {
        let money = Money::new(dec!(1010.1), Currency::USD());
        assert_eq!(format!("{money}"), "1010.10 USD");
    }

    #[rstest]
    #[case(dec!(1.005), Currency::USD(), dec!(1.00))] // ties to even
    #[case(dec!(1.015), Currency::USD(), dec!(1.02))]
    #[case(dec!(1.2), Currency::JPY(), dec!(1))]
    #[case(dec!(1.2345), Currency::BHD(), dec!(1.234))]
    fn test_construction_rounds_to_currency_digits(
        #[case] amount: Decimal,
        #[case] currency: Currency,
        #[case] expected: Decimal,
    ) {
        let money = Money::new(amount, currency);
        assert_eq!(money.amount, expected);
    }

    #[rstest]
    fn test_construction_with_custom_rounding_context() {
        let context = MoneyContext::builder()
            .rounding(RoundingMode::HalfAwayFromZero)
            .build()
            .unwrap();
        let money = Money::with_context(dec!(1.005), Currency::USD(), context);
        assert_eq!(money.amount, dec!(1.01));
    }

    #[rstest]
    fn test_zero_constructor() {
        let money = Money::zero(Currency::USD());
        assert!(money.is_zero());
        assert_eq!(money.currency, Currency::USD());
    }

    #[rstest]
    fn test_equality_ignores_context() {
        let strict = Money::new(dec!(10), Currency::EUR());
        let relaxed_ctx = MoneyContext::builder()
            .enforce_zero_currency_matching(false)
            .build()
            .unwrap();
        let relaxed = Money::with_context(dec!(10), Currency::EUR(), relaxed_ctx);
        assert_eq!(strict, relaxed);
    }

    #[rstest]
    fn test_equality_requires_currency() {
        let eur = Money::new(dec!(10), Currency::EUR());
        let usd = Money::new(dec!(10), Currency::USD());
        assert_ne!(eur, usd);
    }

    #[rstest]
    fn test_add_same_currency() {
        let a = Money::new(dec!(1000.00), Currency::USD());
        let b = Money::new(dec!(500.50), Currency::USD());
        assert_eq!(a + b, Money::new(dec!(1500.50), Currency::USD()));
    }

    #[rstest]
    fn test_add_assign_and_sub_assign() {
        let usd = Currency::USD();
        let mut money = Money::new(dec!(100), usd);
        money += Money::new(dec!(50), usd);
        assert_eq!(money.amount, dec!(150.00));
        money -= Money::new(dec!(25), usd);
        assert_eq!(money.amount, dec!(125.00));
    }

    #[rstest]
    fn test_add_currency_mismatch() {
        let eur = Money::new(dec!(10), Currency::EUR());
        let usd = Money::new(dec!(10), Currency::USD());
        assert_eq!(
            eur.try_add(&usd).unwrap_err(),
            MoneyError::CurrencyMismatch {
                lhs: "EUR".to_string(),
                rhs: "USD".to_string(),
            }
        );
    }

    #[rstest]
    #[should_panic(expected = "CurrencyMismatch")]
    fn test_add_operator_currency_mismatch_panics() {
        let eur = Money::new(dec!(10), Currency::EUR());
        let usd = Money::new(dec!(10), Currency::USD());
        let _ = eur + usd;
    }

    #[rstest]
    fn test_additive_identity() {
        let money = Money::new(dec!(12.34), Currency::EUR());
        let identity = Money::additive_identity();
        assert!(identity.is_additive_identity());

        let left = identity + money;
        let right = money + identity;
        assert_eq!(left, money);
        assert_eq!(right, money);
        assert_eq!(left.currency, Currency::EUR());
    }

    #[rstest]
    fn test_sub_additive_identity() {
        let money = Money::new(dec!(12.34), Currency::EUR());
        let identity = Money::additive_identity();
        assert_eq!(money - identity, money);
        assert_eq!(identity - money, -money);
    }

    #[rstest]
    fn test_zero_usd_is_not_additive_identity_under_strict() {
        let eur = Money::new(dec!(10), Currency::EUR());
        let zero_usd = Money::zero(Currency::USD());
        assert!(eur.try_add(&zero_usd).is_err());
    }

    #[rstest]
    fn test_relaxed_add_adopts_nonzero_currency(relaxed: MoneyContext) {
        let eur = Money::with_context(dec!(10), Currency::EUR(), relaxed);
        let zero_usd = Money::zero(Currency::USD());
        let sum = eur.try_add(&zero_usd).unwrap();
        assert_eq!(sum, eur);

        let zero_eur = Money::with_context(dec!(0), Currency::EUR(), relaxed);
        let usd = Money::new(dec!(7), Currency::USD());
        let sum = zero_eur.try_add(&usd).unwrap();
        assert_eq!(sum, usd);
    }

    #[rstest]
    fn test_multiplicative_identity() {
        let money = Money::new(dec!(12.34), Currency::EUR());
        assert_eq!(money * MULTIPLICATIVE_IDENTITY, money);
    }

    #[rstest]
    fn test_mul_scalar_rounds_per_context() {
        let money = Money::new(dec!(10.00), Currency::USD());
        assert_eq!((money * dec!(1.5)).amount, dec!(15.00));
        assert_eq!((money * dec!(0.333)).amount, dec!(3.33));
    }

    #[rstest]
    fn test_div_scalar() {
        let money = Money::new(dec!(100.00), Currency::USD());
        assert_eq!((money / dec!(4)).amount, dec!(25.00));
        assert_eq!((money / dec!(3)).amount, dec!(33.33));
        assert_eq!(
            money.try_div_scalar(dec!(0)).unwrap_err(),
            MoneyError::DivisionByZero
        );
    }

    #[rstest]
    fn test_negation() {
        let money = Money::new(dec!(100.00), Currency::USD());
        assert_eq!(-money, Money::new(dec!(-100.00), Currency::USD()));
        assert_eq!(-(-money), money);
    }

    #[rstest]
    #[case(Currency::JPY(), dec!(100), dec!(101))]
    #[case(Currency::USD(), dec!(100), dec!(100.01))]
    #[case(Currency::EUR(), dec!(100), dec!(100.01))]
    #[case(Currency::BHD(), dec!(100), dec!(100.001))]
    fn test_increment_moves_one_minor_unit(
        #[case] currency: Currency,
        #[case] start: Decimal,
        #[case] expected: Decimal,
    ) {
        let money = Money::new(start, currency);
        assert_eq!(money.increment().amount, expected);
        assert_eq!(money.increment().decrement(), money);
    }

    #[rstest]
    fn test_compare_same_currency() {
        let m1 = Money::new(dec!(100), Currency::USD());
        let m2 = Money::new(dec!(200), Currency::USD());
        assert_eq!(m1.compare(&m2).unwrap(), Ordering::Less);
        assert_eq!(m2.compare(&m1).unwrap(), Ordering::Greater);
        assert_eq!(m1.compare(&m1).unwrap(), Ordering::Equal);
        assert!(m1 < m2);
        assert!(m2 > m1);
    }

    #[rstest]
    fn test_compare_strict_rejects_cross_currency_even_for_zero() {
        let eur = Money::new(dec!(10), Currency::EUR());
        let zero_usd = Money::zero(Currency::USD());
        assert!(matches!(
            eur.compare(&zero_usd),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
        assert_eq!(eur.partial_cmp(&zero_usd), None);
    }

    #[rstest]
    fn test_compare_relaxed_zero_is_currency_agnostic(relaxed: MoneyContext) {
        let ten_eur = Money::with_context(dec!(10), Currency::EUR(), relaxed);
        let zero_eur = Money::with_context(dec!(0), Currency::EUR(), relaxed);
        let minus_eur = Money::with_context(dec!(-5), Currency::EUR(), relaxed);
        let zero_usd = Money::zero(Currency::USD());
        let ten_usd = Money::new(dec!(10), Currency::USD());

        assert_eq!(ten_eur.compare(&zero_usd).unwrap(), Ordering::Greater);
        assert_eq!(zero_eur.compare(&ten_usd).unwrap(), Ordering::Less);
        assert_eq!(zero_eur.compare(&zero_usd).unwrap(), Ordering::Equal);
        assert_eq!(minus_eur.compare(&zero_usd).unwrap(), Ordering::Less);

        // Two non-zero sides still mismatch, even relaxed
        assert!(matches!(
            ten_eur.compare(&ten_usd),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[rstest]
    fn test_split_even_preserves_total() {
        let money = Money::new(dec!(1.00), Currency::EUR());
        let parts = money.split(3).unwrap();
        let amounts: Vec<Decimal> = parts.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![dec!(0.34), dec!(0.33), dec!(0.33)]);
        assert_eq!(parts.iter().map(|p| p.amount).sum::<Decimal>(), dec!(1.00));
        assert!(parts.iter().all(|p| p.currency == Currency::EUR()));
    }

    #[rstest]
    fn test_split_zero_parts_fails() {
        let money = Money::new(dec!(1.00), Currency::EUR());
        assert_eq!(
            money.split(0).unwrap_err(),
            MoneyError::ArgumentOutOfRange {
                param: "n",
                index: 0,
                value: "0".to_string(),
            }
        );
    }

    #[rstest]
    fn test_split_by_ratios_spec_vectors() {
        let money = Money::new(dec!(1.00), Currency::EUR());

        let parts = money.split_by_ratios(&[dec!(2), dec!(3), dec!(3)]).unwrap();
        let amounts: Vec<Decimal> = parts.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![dec!(0.25), dec!(0.38), dec!(0.37)]);

        let parts = money
            .split_by_ratios(&[dec!(200), dec!(300), dec!(1)])
            .unwrap();
        let amounts: Vec<Decimal> = parts.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![dec!(0.40), dec!(0.60), dec!(0.00)]);
    }

    #[rstest]
    fn test_split_by_ratios_negative_weight_fails() {
        let money = Money::new(dec!(1.00), Currency::EUR());
        let result = money.split_by_ratios(&[dec!(1), dec!(-2)]);
        assert_eq!(
            result.unwrap_err(),
            MoneyError::ArgumentOutOfRange {
                param: "ratios",
                index: 1,
                value: "-2".to_string(),
            }
        );
    }

    #[rstest]
    fn test_split_jpy_whole_units() {
        let money = Money::new(dec!(100), Currency::JPY());
        let parts = money.split(3).unwrap();
        let amounts: Vec<Decimal> = parts.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![dec!(34), dec!(33), dec!(33)]);
    }

    #[rstest]
    fn test_split_with_max_scale_preserves_total() {
        let context = MoneyContext::builder().max_scale(Some(0)).build().unwrap();
        let money = Money::with_context(dec!(1.00), Currency::EUR(), context);
        assert_eq!(money.amount, dec!(1));

        let parts = money.split(3).unwrap();
        let amounts: Vec<Decimal> = parts.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![dec!(1), dec!(0), dec!(0)]);
        assert_eq!(parts.iter().map(|p| p.amount).sum::<Decimal>(), money.amount);

        let parts = money.split_by_ratios(&[dec!(2), dec!(3), dec!(3)]).unwrap();
        assert_eq!(parts.iter().map(|p| p.amount).sum::<Decimal>(), money.amount);
    }

    #[rstest]
    fn test_increment_with_max_scale_moves_amount() {
        let context = MoneyContext::builder().max_scale(Some(0)).build().unwrap();
        let money = Money::with_context(dec!(5.00), Currency::EUR(), context);
        assert_eq!(money.increment().amount, dec!(6));
        assert_eq!(money.increment().decrement(), money);
    }

    #[rstest]
    fn test_minor_units_roundtrip() {
        let money = Money::new(dec!(1.50), Currency::EUR());
        assert_eq!(money.minor_units(), 150);
        assert_eq!(Money::from_minor_units(150, Currency::EUR()), money);

        let money = Money::new(dec!(1500), Currency::JPY());
        assert_eq!(money.minor_units(), 1500);
    }

    #[rstest]
    #[case("0 USD", dec!(0.00), Currency::USD())]
    #[case("1.1 EUR", dec!(1.10), Currency::EUR())]
    #[case("10_000.10 USD", dec!(10000.10), Currency::USD())]
    #[case("1e3 USD", dec!(1000.00), Currency::USD())]
    #[case("2.5E-1 EUR", dec!(0.25), Currency::EUR())]
    #[case("-123.45 USD", dec!(-123.45), Currency::USD())]
    fn test_from_str_valid_input(
        #[case] input: &str,
        #[case] expected_amount: Decimal,
        #[case] expected_currency: Currency,
    ) {
        let money = Money::from(input);
        assert_eq!(money.amount, expected_amount);
        assert_eq!(money.currency, expected_currency);
    }

    #[rstest]
    #[case("0USD")] // no whitespace separator
    #[case("0x00 USD")] // invalid decimal
    #[case("0 NOPE")] // unknown currency
    #[case("0 USD USD")] // too many parts
    fn test_from_str_invalid_input(#[case] input: &str) {
        assert!(Money::from_str(input).is_err());
    }

    #[rstest]
    fn test_to_formatted_string() {
        let money = Money::new(dec!(1000), Currency::USD());
        assert_eq!(money.to_formatted_string(), "1_000.00 USD");
    }

    #[rstest]
    fn test_serialization_roundtrip() {
        let money = Money::new(dec!(123.45), Currency::USD());
        let serialized = serde_json::to_string(&money).unwrap();
        assert_eq!(serialized, "\"123.45 USD\"");
        let deserialized: Money = serde_json::from_str(&serialized).unwrap();
        assert_eq!(money, deserialized);
    }

    #[rstest]
    fn test_hash_follows_equality() {
        use std::{
            collections::hash_map::DefaultHasher,
            hash::{Hash, Hasher},
        };

        fn hash_of(money: &Money) -> u64 {
            let mut hasher = DefaultHasher::new();
            money.hash(&mut hasher);
            hasher.finish()
        }

        let m1 = Money::new(dec!(100), Currency::USD());
        let m2 = Money::new(dec!(100.00), Currency::USD());
        let m3 = Money::new(dec!(100), Currency::AUD());
        assert_eq!(hash_of(&m1), hash_of(&m2));
        assert_ne!(hash_of(&m1), hash_of(&m3));
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Property-based testing
    ////////////////////////////////////////////////////////////////////////////////

    use proptest::prelude::*;

    fn currency_strategy() -> impl Strategy<Value = Currency> {
        prop_oneof![
            Just(Currency::USD()),
            Just(Currency::EUR()),
            Just(Currency::GBP()),
            Just(Currency::JPY()),
            Just(Currency::BHD()),
            Just(Currency::CHF()),
        ]
    }

    fn money_strategy() -> impl Strategy<Value = Money> {
        (-1_000_000_000i64..1_000_000_000i64, currency_strategy())
            .prop_map(|(units, currency)| Money::from_minor_units(i128::from(units), currency))
    }

    proptest! {
        #[rstest]
        fn prop_addition_commutative(m1 in money_strategy(), m2 in money_strategy()) {
            if m1.currency == m2.currency {
                prop_assert_eq!(m1 + m2, m2 + m1);
            }
        }

        #[rstest]
        fn prop_subtraction_inverse_of_addition(m1 in money_strategy(), m2 in money_strategy()) {
            if m1.currency == m2.currency {
                prop_assert_eq!((m1 + m2) - m2, m1);
            }
        }

        #[rstest]
        fn prop_additive_identity_is_neutral(money in money_strategy()) {
            prop_assert_eq!(money + Money::additive_identity(), money);
            prop_assert_eq!(Money::additive_identity() + money, money);
        }

        #[rstest]
        fn prop_comparison_trichotomy(m1 in money_strategy(), m2 in money_strategy()) {
            if m1.currency == m2.currency {
                let eq = m1 == m2;
                let lt = m1 < m2;
                let gt = m1 > m2;
                prop_assert_eq!([eq, lt, gt].iter().filter(|&&x| x).count(), 1);
            }
        }

        #[rstest]
        fn prop_split_preserves_total(money in money_strategy(), n in 1usize..20) {
            let parts = money.split(n).unwrap();
            prop_assert_eq!(parts.len(), n);
            let total: Decimal = parts.iter().map(|p| p.amount).sum();
            prop_assert_eq!(total.normalize(), money.amount.normalize());
        }

        #[rstest]
        fn prop_split_by_ratios_preserves_total(
            money in money_strategy(),
            weights in proptest::collection::vec(0u32..100, 1..8),
        ) {
            prop_assume!(weights.iter().any(|w| *w > 0));
            let ratios: Vec<Decimal> = weights.iter().map(|w| Decimal::from(*w)).collect();
            let parts = money.split_by_ratios(&ratios).unwrap();
            let total: Decimal = parts.iter().map(|p| p.amount).sum();
            prop_assert_eq!(total.normalize(), money.amount.normalize());
        }

        #[rstest]
        fn prop_increment_then_decrement_is_identity(money in money_strategy()) {
            prop_assert_eq!(money.increment().decrement(), money);
        }

        #[rstest]
        fn prop_string_roundtrip(money in money_strategy()) {
            let parsed = Money::from_str(&money.to_string()).unwrap();
            prop_assert_eq!(parsed, money);
        }
    }
}
