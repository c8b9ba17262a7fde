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

//! Functions for condition checks similar to design-by-contract.
//!
//! A condition is a predicate which must be true just prior to the execution of
//! some section of code, for correct behavior as per the design specification.
//! Each function returns an `anyhow::Result` so that the caller decides whether
//! a violation is propagated as an error or raised as a panic via
//! [`expect`](Result::expect) with the [`FAILED`] message.

/// Standard message prefix for failed correctness checks.
pub const FAILED: &str = "Condition failed";

/// Checks the string `s` is non-empty.
///
/// # Errors
///
/// Returns an error if `s` is empty.
pub fn check_nonempty_string<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    if s.as_ref().is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    }
    Ok(())
}

/// Checks the string `s` is a valid code: non-empty ASCII with no whitespace or
/// control characters.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is empty.
/// - `s` contains non-ASCII, whitespace, or control characters.
pub fn check_valid_code<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();
    check_nonempty_string(s, param)?;
    if !s
        .chars()
        .all(|c| c.is_ascii() && !c.is_whitespace() && !c.is_control())
    {
        anyhow::bail!("invalid string for '{param}' contained invalid characters, was '{s}'")
    }
    Ok(())
}

/// Checks the `value` is within the given inclusive range.
///
/// # Errors
///
/// Returns an error if `value` is outside of [`l`, `r`].
pub fn check_in_range_inclusive_u32(value: u32, l: u32, r: u32, param: &str) -> anyhow::Result<()> {
    if value < l || value > r {
        anyhow::bail!("invalid u32 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}
