use std::collections::HashSet;
use std::sync::LazyLock;

pub const BASE_URL: &str = "https://api.bnm.gov.my/public";
pub const ACCEPT_HEADER: &str = "application/vnd.BNM.API.v1+json";

// https://www.swiftcodes.info/malaysia/
static SWIFT_CODES: [&str; 35] = [
    "BKKBMYKL", "CIBBMYKL", "CITIMYKL", "HLBBMYKL", "HBMBMYKL", "ICBKMYKL", "MBBEMYKL",
    "OCBCMYKL", "PBBEMYKL", "RHBBMYKL", "SCBLMYKX", "UOVBMYKL", "AIBBMYKL", "ALSRMYKL",
    "AISLMYKL", "BIMBMYKL", "BMMBMYKL", "CTBBMYKL", "HLIBMYKL", "HMABMYKL", "KFHOMYKL",
    "MBISMYKL", "AFBQMYKL", "OABBMYKL", "PUIBMYKL", "RHBAMYKL", "SCSRMYKK", "AGOBMYKL",
    "BSNAMYK1", "PHBMMYKL", "MFBBMYKL", "ARBKMYKL", "BKCHMYKL", "RJHIMYKL", "BKRMMYKL",
];

// ISO 4217 active codes, funds and X-codes included.
static CURRENCY_CODES: [&str; 181] = [
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD",
    "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP",
    "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP",
    "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HRK", "HTG", "HUF", "IDR",
    "ILS", "INR", "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW",
    "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA",
    "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD",
    "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG",
    "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE",
    "SLL", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP",
    "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS", "VED",
    "VES", "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XDR",
    "XOF", "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW", "ZWL",
];

pub const PRODUCTS: [&str; 3] = ["money_market_operations", "interbank", "overall"];
pub const SESSIONS: [&str; 4] = ["0900", "1130", "1200", "1700"];
pub const QUOTES: [&str; 2] = ["rm", "fx"];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::load);

/// Read-only tables of the values the API accepts.
///
/// Built once per process and handed to clients by reference.
#[derive(Debug)]
pub struct Catalog {
    swift_codes: HashSet<&'static str>,
    currency_codes: HashSet<&'static str>,
}

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    fn load() -> Self {
        Catalog {
            swift_codes: SWIFT_CODES.into_iter().collect(),
            currency_codes: CURRENCY_CODES.into_iter().collect(),
        }
    }

    pub fn is_swift_code(&self, code: &str) -> bool {
        self.swift_codes.contains(code)
    }

    pub fn is_currency_code(&self, code: &str) -> bool {
        self.currency_codes.contains(code)
    }

    pub fn swift_codes(&self) -> &'static [&'static str] {
        &SWIFT_CODES
    }

    pub fn currency_codes(&self) -> &'static [&'static str] {
        &CURRENCY_CODES
    }

    /// Canonical spelling of a product category, if it is one.
    pub fn product(&self, name: &str) -> Option<&'static str> {
        PRODUCTS.into_iter().find(|p| *p == name)
    }

    pub fn session(&self, name: &str) -> Option<&'static str> {
        SESSIONS.into_iter().find(|s| *s == name)
    }

    pub fn quote(&self, name: &str) -> Option<&'static str> {
        QUOTES.into_iter().find(|q| *q == name)
    }
}
