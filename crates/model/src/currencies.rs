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

//! Built-in ISO-4217 `Currency` constants.

use std::sync::OnceLock;

use ustr::Ustr;

use crate::{
    registry::ISO_NAMESPACE,
    types::{Currency, currency::DIGITS_NOT_APPLICABLE},
};

///////////////////////////////////////////////////////////////////////////////
// Fiat currencies
///////////////////////////////////////////////////////////////////////////////
static AUD_LOCK: OnceLock<Currency> = OnceLock::new();
static BHD_LOCK: OnceLock<Currency> = OnceLock::new();
static BRL_LOCK: OnceLock<Currency> = OnceLock::new();
static CAD_LOCK: OnceLock<Currency> = OnceLock::new();
static CHF_LOCK: OnceLock<Currency> = OnceLock::new();
static CLF_LOCK: OnceLock<Currency> = OnceLock::new();
static CNY_LOCK: OnceLock<Currency> = OnceLock::new();
static CZK_LOCK: OnceLock<Currency> = OnceLock::new();
static DKK_LOCK: OnceLock<Currency> = OnceLock::new();
static EUR_LOCK: OnceLock<Currency> = OnceLock::new();
static GBP_LOCK: OnceLock<Currency> = OnceLock::new();
static HKD_LOCK: OnceLock<Currency> = OnceLock::new();
static HUF_LOCK: OnceLock<Currency> = OnceLock::new();
static ILS_LOCK: OnceLock<Currency> = OnceLock::new();
static INR_LOCK: OnceLock<Currency> = OnceLock::new();
static JPY_LOCK: OnceLock<Currency> = OnceLock::new();
static KRW_LOCK: OnceLock<Currency> = OnceLock::new();
static KWD_LOCK: OnceLock<Currency> = OnceLock::new();
static MXN_LOCK: OnceLock<Currency> = OnceLock::new();
static NOK_LOCK: OnceLock<Currency> = OnceLock::new();
static NZD_LOCK: OnceLock<Currency> = OnceLock::new();
static PLN_LOCK: OnceLock<Currency> = OnceLock::new();
static SAR_LOCK: OnceLock<Currency> = OnceLock::new();
static SEK_LOCK: OnceLock<Currency> = OnceLock::new();
static SGD_LOCK: OnceLock<Currency> = OnceLock::new();
static THB_LOCK: OnceLock<Currency> = OnceLock::new();
static TND_LOCK: OnceLock<Currency> = OnceLock::new();
static TRY_LOCK: OnceLock<Currency> = OnceLock::new();
static TWD_LOCK: OnceLock<Currency> = OnceLock::new();
static USD_LOCK: OnceLock<Currency> = OnceLock::new();
static ZAR_LOCK: OnceLock<Currency> = OnceLock::new();

///////////////////////////////////////////////////////////////////////////////
// Commodity backed currencies
///////////////////////////////////////////////////////////////////////////////
static XAG_LOCK: OnceLock<Currency> = OnceLock::new();
static XAU_LOCK: OnceLock<Currency> = OnceLock::new();
static XPT_LOCK: OnceLock<Currency> = OnceLock::new();

///////////////////////////////////////////////////////////////////////////////
// Sentinel
///////////////////////////////////////////////////////////////////////////////
static XXX_LOCK: OnceLock<Currency> = OnceLock::new();

fn iso_currency(
    lock: &OnceLock<Currency>,
    code: &str,
    numeric_code: &str,
    name: &str,
    symbol: &str,
    decimal_digits: u8,
) -> Currency {
    *lock.get_or_init(|| Currency {
        code: Ustr::from(code),
        namespace: Ustr::from(ISO_NAMESPACE),
        numeric_code: Ustr::from(numeric_code),
        name: Ustr::from(name),
        symbol: Ustr::from(symbol),
        decimal_digits,
        is_active: true,
    })
}

impl Currency {
    ///////////////////////////////////////////////////////////////////////////
    // Fiat currencies
    ///////////////////////////////////////////////////////////////////////////
    /// The Australian dollar (AUD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn AUD() -> Self {
        iso_currency(&AUD_LOCK, "AUD", "036", "Australian dollar", "$", 2)
    }

    /// The Bahraini dinar (BHD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn BHD() -> Self {
        iso_currency(&BHD_LOCK, "BHD", "048", "Bahraini dinar", "BD", 3)
    }

    /// The Brazilian real (BRL) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn BRL() -> Self {
        iso_currency(&BRL_LOCK, "BRL", "986", "Brazilian real", "R$", 2)
    }

    /// The Canadian dollar (CAD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn CAD() -> Self {
        iso_currency(&CAD_LOCK, "CAD", "124", "Canadian dollar", "$", 2)
    }

    /// The Swiss franc (CHF) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn CHF() -> Self {
        iso_currency(&CHF_LOCK, "CHF", "756", "Swiss franc", "Fr.", 2)
    }

    /// The Unidad de Fomento (CLF) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn CLF() -> Self {
        iso_currency(&CLF_LOCK, "CLF", "990", "Unidad de Fomento", "UF", 4)
    }

    /// The Chinese yuan (CNY) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn CNY() -> Self {
        iso_currency(&CNY_LOCK, "CNY", "156", "Chinese yuan", "¥", 2)
    }

    /// The Czech koruna (CZK) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn CZK() -> Self {
        iso_currency(&CZK_LOCK, "CZK", "203", "Czech koruna", "Kč", 2)
    }

    /// The Danish krone (DKK) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn DKK() -> Self {
        iso_currency(&DKK_LOCK, "DKK", "208", "Danish krone", "kr", 2)
    }

    /// The Euro (EUR) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn EUR() -> Self {
        iso_currency(&EUR_LOCK, "EUR", "978", "Euro", "€", 2)
    }

    /// The Pound sterling (GBP) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn GBP() -> Self {
        iso_currency(&GBP_LOCK, "GBP", "826", "Pound sterling", "£", 2)
    }

    /// The Hong Kong dollar (HKD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn HKD() -> Self {
        iso_currency(&HKD_LOCK, "HKD", "344", "Hong Kong dollar", "$", 2)
    }

    /// The Hungarian forint (HUF) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn HUF() -> Self {
        iso_currency(&HUF_LOCK, "HUF", "348", "Hungarian forint", "Ft", 2)
    }

    /// The Israeli new shekel (ILS) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn ILS() -> Self {
        iso_currency(&ILS_LOCK, "ILS", "376", "Israeli new shekel", "₪", 2)
    }

    /// The Indian rupee (INR) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn INR() -> Self {
        iso_currency(&INR_LOCK, "INR", "356", "Indian rupee", "₹", 2)
    }

    /// The Japanese yen (JPY) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn JPY() -> Self {
        iso_currency(&JPY_LOCK, "JPY", "392", "Japanese yen", "¥", 0)
    }

    /// The South Korean won (KRW) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn KRW() -> Self {
        iso_currency(&KRW_LOCK, "KRW", "410", "South Korean won", "₩", 0)
    }

    /// The Kuwaiti dinar (KWD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn KWD() -> Self {
        iso_currency(&KWD_LOCK, "KWD", "414", "Kuwaiti dinar", "KD", 3)
    }

    /// The Mexican peso (MXN) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn MXN() -> Self {
        iso_currency(&MXN_LOCK, "MXN", "484", "Mexican peso", "$", 2)
    }

    /// The Norwegian krone (NOK) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn NOK() -> Self {
        iso_currency(&NOK_LOCK, "NOK", "578", "Norwegian krone", "kr", 2)
    }

    /// The New Zealand dollar (NZD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn NZD() -> Self {
        iso_currency(&NZD_LOCK, "NZD", "554", "New Zealand dollar", "$", 2)
    }

    /// The Polish złoty (PLN) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn PLN() -> Self {
        iso_currency(&PLN_LOCK, "PLN", "985", "Polish złoty", "zł", 2)
    }

    /// The Saudi riyal (SAR) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn SAR() -> Self {
        iso_currency(&SAR_LOCK, "SAR", "682", "Saudi riyal", "SR", 2)
    }

    /// The Swedish krona (SEK) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn SEK() -> Self {
        iso_currency(&SEK_LOCK, "SEK", "752", "Swedish krona", "kr", 2)
    }

    /// The Singapore dollar (SGD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn SGD() -> Self {
        iso_currency(&SGD_LOCK, "SGD", "702", "Singapore dollar", "$", 2)
    }

    /// The Thai baht (THB) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn THB() -> Self {
        iso_currency(&THB_LOCK, "THB", "764", "Thai baht", "฿", 2)
    }

    /// The Tunisian dinar (TND) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn TND() -> Self {
        iso_currency(&TND_LOCK, "TND", "788", "Tunisian dinar", "DT", 3)
    }

    /// The Turkish lira (TRY) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn TRY() -> Self {
        iso_currency(&TRY_LOCK, "TRY", "949", "Turkish lira", "₺", 2)
    }

    /// The New Taiwan dollar (TWD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn TWD() -> Self {
        iso_currency(&TWD_LOCK, "TWD", "901", "New Taiwan dollar", "NT$", 2)
    }

    /// The United States dollar (USD) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn USD() -> Self {
        iso_currency(&USD_LOCK, "USD", "840", "United States dollar", "$", 2)
    }

    /// The South African rand (ZAR) currency.
    #[allow(non_snake_case)]
    #[must_use]
    pub fn ZAR() -> Self {
        iso_currency(&ZAR_LOCK, "ZAR", "710", "South African rand", "R", 2)
    }

    ///////////////////////////////////////////////////////////////////////////
    // Commodity backed currencies
    ///////////////////////////////////////////////////////////////////////////
    /// Silver, one troy ounce (XAG).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn XAG() -> Self {
        iso_currency(
            &XAG_LOCK,
            "XAG",
            "961",
            "Silver (one troy ounce)",
            "¤",
            DIGITS_NOT_APPLICABLE,
        )
    }

    /// Gold, one troy ounce (XAU).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn XAU() -> Self {
        iso_currency(
            &XAU_LOCK,
            "XAU",
            "959",
            "Gold (one troy ounce)",
            "¤",
            DIGITS_NOT_APPLICABLE,
        )
    }

    /// Platinum, one troy ounce (XPT).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn XPT() -> Self {
        iso_currency(
            &XPT_LOCK,
            "XPT",
            "962",
            "Platinum (one troy ounce)",
            "¤",
            DIGITS_NOT_APPLICABLE,
        )
    }

    ///////////////////////////////////////////////////////////////////////////
    // Sentinel
    ///////////////////////////////////////////////////////////////////////////
    /// The "no currency" sentinel (XXX).
    #[allow(non_snake_case)]
    #[must_use]
    pub fn XXX() -> Self {
        iso_currency(
            &XXX_LOCK,
            "XXX",
            "999",
            "No currency",
            "¤",
            DIGITS_NOT_APPLICABLE,
        )
    }

    /// The "no currency" sentinel (`XXX`), the currency of the additive identity.
    #[must_use]
    pub fn no_currency() -> Self {
        Self::XXX()
    }
}

/// Returns the built-in ISO-4217 currency table used to seed the registry.
pub(crate) fn iso_4217_currencies() -> Vec<Currency> {
    vec![
        Currency::AUD(),
        Currency::BHD(),
        Currency::BRL(),
        Currency::CAD(),
        Currency::CHF(),
        Currency::CLF(),
        Currency::CNY(),
        Currency::CZK(),
        Currency::DKK(),
        Currency::EUR(),
        Currency::GBP(),
        Currency::HKD(),
        Currency::HUF(),
        Currency::ILS(),
        Currency::INR(),
        Currency::JPY(),
        Currency::KRW(),
        Currency::KWD(),
        Currency::MXN(),
        Currency::NOK(),
        Currency::NZD(),
        Currency::PLN(),
        Currency::SAR(),
        Currency::SEK(),
        Currency::SGD(),
        Currency::THB(),
        Currency::TND(),
        Currency::TRY(),
        Currency::TWD(),
        Currency::USD(),
        Currency::ZAR(),
        Currency::XAG(),
        Currency::XAU(),
        Currency::XPT(),
        Currency::XXX(),
    ]
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_builtin_table_has_unique_codes() {
        let currencies = iso_4217_currencies();
        let mut codes: Vec<&str> = currencies.iter().map(|c| c.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), currencies.len());
    }

    #[rstest]
    #[case(Currency::USD(), "840", 2)]
    #[case(Currency::EUR(), "978", 2)]
    #[case(Currency::JPY(), "392", 0)]
    #[case(Currency::BHD(), "048", 3)]
    #[case(Currency::XXX(), "999", DIGITS_NOT_APPLICABLE)]
    fn test_builtin_metadata(
        #[case] currency: Currency,
        #[case] numeric_code: &str,
        #[case] decimal_digits: u8,
    ) {
        assert_eq!(currency.numeric_code.as_str(), numeric_code);
        assert_eq!(currency.decimal_digits, decimal_digits);
        assert_eq!(currency.namespace.as_str(), ISO_NAMESPACE);
    }
}
