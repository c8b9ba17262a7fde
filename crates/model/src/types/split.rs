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

//! The stateless split engine: exact total-preserving distribution of an
//! amount of minor units over parts.
//!
//! All functions operate on whole minor units (`i128`), so no rounding can
//! leak value: the parts always sum exactly to the input total.

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::errors::MoneyError;

/// Splits `total_units` into `n` parts whose sum is exactly `total_units`.
///
/// Every part receives `total_units / n` truncated toward zero; the remaining
/// minor units are handed out one-by-one to the earliest parts, each carrying
/// the remainder's sign.
///
/// # Panics
///
/// Panics if `n` is zero (callers validate the part count).
#[must_use]
pub fn split_even(total_units: i128, n: usize) -> Vec<i128> {
    assert!(n > 0, "`n` must be positive");
    let n_units = n as i128;
    let base = total_units / n_units;
    let remainder = total_units - base * n_units;
    let step: i128 = if remainder >= 0 { 1 } else { -1 };

    let mut parts = vec![base; n];
    for part in parts.iter_mut().take(remainder.unsigned_abs() as usize) {
        *part += step;
    }
    parts
}

/// Splits `total_units` into parts proportional to `ratios`, preserving input
/// order, such that the parts sum exactly to `total_units`.
///
/// Each part starts at its exact proportional share truncated toward zero;
/// leftover minor units are then distributed one-by-one to the earliest parts
/// whose truncated share fell short of the exact share, until the total is
/// exhausted.
///
/// # Errors
///
/// Returns [`MoneyError::ArgumentOutOfRange`] if:
/// - `ratios` is empty.
/// - Any ratio weight is negative (the error names its position).
/// - All ratio weights are zero.
pub fn split_by_ratios(total_units: i128, ratios: &[Decimal]) -> Result<Vec<i128>, MoneyError> {
    if ratios.is_empty() {
        return Err(MoneyError::ArgumentOutOfRange {
            param: "ratios",
            index: 0,
            value: "<empty>".to_string(),
        });
    }
    for (index, ratio) in ratios.iter().enumerate() {
        if ratio.is_sign_negative() && !ratio.is_zero() {
            return Err(MoneyError::ArgumentOutOfRange {
                param: "ratios",
                index,
                value: ratio.to_string(),
            });
        }
    }
    let weight_sum: Decimal = ratios.iter().sum();
    if weight_sum.is_zero() {
        return Err(MoneyError::ArgumentOutOfRange {
            param: "ratios",
            index: 0,
            value: "0 (weight sum)".to_string(),
        });
    }

    let total = Decimal::from_i128_with_scale(total_units, 0);
    let mut parts = Vec::with_capacity(ratios.len());
    let mut fell_short = Vec::with_capacity(ratios.len());
    for ratio in ratios {
        let exact = total * ratio / weight_sum;
        let truncated = exact.trunc();
        // Exact shares stay well within i128 here since `truncated` <= |total|
        parts.push(truncated.to_i128().unwrap_or_default());
        fell_short.push(exact != truncated);
    }

    let mut leftover: i128 = total_units - parts.iter().sum::<i128>();
    let step: i128 = if leftover >= 0 { 1 } else { -1 };
    while leftover != 0 {
        let mut distributed = false;
        for (part, short) in parts.iter_mut().zip(&fell_short) {
            if leftover == 0 {
                break;
            }
            if *short {
                *part += step;
                leftover -= step;
                distributed = true;
            }
        }
        if !distributed {
            // No part fell short of its exact share; spread from the front
            for part in &mut parts {
                if leftover == 0 {
                    break;
                }
                *part += step;
                leftover -= step;
            }
        }
    }
    Ok(parts)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(100, 3, vec![34, 33, 33])]
    #[case(100, 4, vec![25, 25, 25, 25])]
    #[case(101, 4, vec![26, 25, 25, 25])]
    #[case(7, 3, vec![3, 2, 2])]
    #[case(0, 3, vec![0, 0, 0])]
    #[case(-100, 3, vec![-34, -33, -33])]
    #[case(2, 5, vec![1, 1, 0, 0, 0])]
    fn test_split_even(#[case] total: i128, #[case] n: usize, #[case] expected: Vec<i128>) {
        let parts = split_even(total, n);
        assert_eq!(parts, expected);
        assert_eq!(parts.iter().sum::<i128>(), total);
    }

    #[rstest]
    #[should_panic(expected = "`n` must be positive")]
    fn test_split_even_zero_parts_panics() {
        let _ = split_even(100, 0);
    }

    #[rstest]
    #[case(100, vec![dec!(2), dec!(3), dec!(3)], vec![25, 38, 37])]
    #[case(100, vec![dec!(200), dec!(300), dec!(1)], vec![40, 60, 0])]
    #[case(100, vec![dec!(1), dec!(1)], vec![50, 50])]
    #[case(100, vec![dec!(1)], vec![100])]
    #[case(100, vec![dec!(0), dec!(1)], vec![0, 100])]
    #[case(0, vec![dec!(2), dec!(3)], vec![0, 0])]
    #[case(-100, vec![dec!(2), dec!(3), dec!(3)], vec![-25, -38, -37])]
    #[case(100, vec![dec!(0.5), dec!(0.5)], vec![50, 50])]
    fn test_split_by_ratios(
        #[case] total: i128,
        #[case] ratios: Vec<Decimal>,
        #[case] expected: Vec<i128>,
    ) {
        let parts = split_by_ratios(total, &ratios).unwrap();
        assert_eq!(parts, expected);
        assert_eq!(parts.iter().sum::<i128>(), total);
    }

    #[rstest]
    fn test_split_by_ratios_negative_weight_names_position() {
        let result = split_by_ratios(100, &[dec!(2), dec!(-3), dec!(3)]);
        assert_eq!(
            result.unwrap_err(),
            MoneyError::ArgumentOutOfRange {
                param: "ratios",
                index: 1,
                value: "-3".to_string(),
            }
        );
    }

    #[rstest]
    fn test_split_by_ratios_empty_fails() {
        assert!(matches!(
            split_by_ratios(100, &[]),
            Err(MoneyError::ArgumentOutOfRange { .. })
        ));
    }

    #[rstest]
    fn test_split_by_ratios_zero_weight_sum_fails() {
        assert!(matches!(
            split_by_ratios(100, &[dec!(0), dec!(0)]),
            Err(MoneyError::ArgumentOutOfRange { .. })
        ));
    }

    proptest! {
        #[rstest]
        fn prop_split_even_preserves_total(
            total in -1_000_000_000i128..1_000_000_000i128,
            n in 1usize..50,
        ) {
            let parts = split_even(total, n);
            prop_assert_eq!(parts.len(), n);
            prop_assert_eq!(parts.iter().sum::<i128>(), total);
            // Parts differ by at most one minor unit
            let min = parts.iter().min().unwrap();
            let max = parts.iter().max().unwrap();
            prop_assert!(max - min <= 1);
        }

        #[rstest]
        fn prop_split_by_ratios_preserves_total(
            total in -1_000_000i128..1_000_000i128,
            weights in proptest::collection::vec(0u32..1_000, 1..10),
        ) {
            prop_assume!(weights.iter().any(|w| *w > 0));
            let ratios: Vec<Decimal> = weights.iter().map(|w| Decimal::from(*w)).collect();
            let parts = split_by_ratios(total, &ratios).unwrap();
            prop_assert_eq!(parts.len(), ratios.len());
            prop_assert_eq!(parts.iter().sum::<i128>(), total);
        }
    }
}
