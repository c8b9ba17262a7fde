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

//! Enumerations for the monetary domain model.

use rust_decimal::{Decimal, RoundingStrategy};

/// The strategy used when rounding a monetary amount to a currency's scale.
///
/// The named modes map onto [`rust_decimal::RoundingStrategy`]; `Custom` wraps
/// an arbitrary rounding function taking the amount and the target scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display)]
#[non_exhaustive]
pub enum RoundingMode {
    /// Round to nearest, ties to the even neighbor (banker's rounding).
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero (commercial rounding).
    HalfAwayFromZero,
    /// Round to nearest, ties toward zero.
    HalfTowardZero,
    /// Always round away from zero.
    AwayFromZero,
    /// Always round toward zero (truncate).
    TowardZero,
    /// Always round toward negative infinity.
    Floor,
    /// Always round toward positive infinity.
    Ceiling,
    /// A caller-supplied rounding function of `(amount, scale)`.
    Custom(fn(Decimal, u32) -> Decimal),
}

impl RoundingMode {
    /// Rounds `amount` to `scale` decimal places using this mode.
    #[must_use]
    pub fn round(&self, amount: Decimal, scale: u32) -> Decimal {
        let strategy = match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfTowardZero => RoundingStrategy::MidpointTowardZero,
            Self::AwayFromZero => RoundingStrategy::AwayFromZero,
            Self::TowardZero => RoundingStrategy::ToZero,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Custom(f) => return f(amount, scale),
        };
        amount.round_dp_with_strategy(scale, strategy)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(RoundingMode::HalfEven, dec!(1.005), dec!(1.00))]
    #[case(RoundingMode::HalfEven, dec!(1.015), dec!(1.02))]
    #[case(RoundingMode::HalfAwayFromZero, dec!(1.005), dec!(1.01))]
    #[case(RoundingMode::HalfAwayFromZero, dec!(-1.005), dec!(-1.01))]
    #[case(RoundingMode::HalfTowardZero, dec!(1.005), dec!(1.00))]
    #[case(RoundingMode::AwayFromZero, dec!(1.001), dec!(1.01))]
    #[case(RoundingMode::TowardZero, dec!(1.009), dec!(1.00))]
    #[case(RoundingMode::Floor, dec!(-1.001), dec!(-1.01))]
    #[case(RoundingMode::Ceiling, dec!(1.001), dec!(1.01))]
    fn test_round_modes(
        #[case] mode: RoundingMode,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(mode.round(amount, 2), expected);
    }

    #[rstest]
    fn test_custom_mode() {
        fn truncate(amount: Decimal, scale: u32) -> Decimal {
            amount.trunc_with_scale(scale)
        }
        let mode = RoundingMode::Custom(truncate);
        assert_eq!(mode.round(dec!(1.999), 2), dec!(1.99));
    }

    #[rstest]
    fn test_default_is_half_even() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfEven);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(RoundingMode::HalfEven.to_string(), "HalfEven");
        assert_eq!(RoundingMode::AwayFromZero.to_string(), "AwayFromZero");
    }
}
