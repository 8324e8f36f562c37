use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

use crate::catalog::{Catalog, PRODUCTS};
use crate::error::ArgumentError;

const MIN_YEAR_EXCLUSIVE: i32 = 2000;
const MAX_SEARCH_QUERY_LEN: usize = 50;

pub fn validate_bank_code<'a>(catalog: &Catalog, code: &'a str) -> Result<&'a str, ArgumentError> {
    if catalog.is_swift_code(code) {
        Ok(code)
    } else {
        Err(ArgumentError::BankCode(
            code.to_string(),
            catalog.swift_codes().len(),
        ))
    }
}

pub fn validate_currency_code<'a>(
    catalog: &Catalog,
    code: &'a str,
) -> Result<&'a str, ArgumentError> {
    if code.len() == 3 && catalog.is_currency_code(code) {
        Ok(code)
    } else {
        Err(ArgumentError::CurrencyCode(code.to_string()))
    }
}

/// Consumer-alert search terms are 1 to 49 characters and not `.` or `..`.
/// Anything else is refused; leaving the query out altogether means
/// "no filter".
pub fn validate_search_query(query: &str) -> Result<&str, ArgumentError> {
    let len = query.chars().count();
    // dot segments would be swallowed by URL normalisation
    if len > 0 && len < MAX_SEARCH_QUERY_LEN && query != "." && query != ".." {
        Ok(query)
    } else {
        Err(ArgumentError::SearchQuery(len))
    }
}

/// Interest rate and volume breakdown: money market operations, interbank
/// or overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product(&'static str);

impl Product {
    pub fn new(catalog: &Catalog, name: &str) -> Result<Self, ArgumentError> {
        catalog
            .product(name)
            .map(Product)
            .ok_or_else(|| ArgumentError::Product(name.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Product {
    fn default() -> Self {
        Product(PRODUCTS[0])
    }
}

impl FromStr for Product {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::new(Catalog::builtin(), s)
    }
}

/// Which daily exchange-rate snapshot to read and what it is quoted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    session: &'static str,
    quote: &'static str,
}

impl Snapshot {
    pub fn new(catalog: &Catalog, session: &str, quote: &str) -> Result<Self, ArgumentError> {
        let session = catalog
            .session(session)
            .ok_or_else(|| ArgumentError::Session(session.to_string()))?;
        let quote = catalog
            .quote(quote)
            .ok_or_else(|| ArgumentError::Quote(quote.to_string()))?;
        Ok(Snapshot { session, quote })
    }

    pub fn session(&self) -> &'static str {
        self.session
    }

    pub fn quote(&self) -> &'static str {
        self.quote
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot {
            session: "1130",
            quote: "rm",
        }
    }
}

/// Date filters as a caller hands them in, before validation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateArgs<'a> {
    pub date: Option<&'a str>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl<'a> DateArgs<'a> {
    pub fn latest() -> Self {
        DateArgs::default()
    }

    pub fn on(date: &'a str) -> Self {
        DateArgs {
            date: Some(date),
            ..DateArgs::default()
        }
    }

    pub fn month(year: i32, month: u32) -> Self {
        DateArgs {
            date: None,
            year: Some(year),
            month: Some(month),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.year.is_none() && self.month.is_none()
    }
}

/// Time scope shared by the time-series endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateSelector {
    #[default]
    Latest,
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

impl DateSelector {
    pub fn from_args(args: DateArgs) -> Result<Self, ArgumentError> {
        match (args.date, args.year, args.month) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(ArgumentError::ConflictingDateArgs),
            (Some(date), None, None) => parse_day(date).map(DateSelector::Day),
            (None, Some(year), Some(month)) => {
                check_year(year)?;
                if !(1..=12).contains(&month) {
                    return Err(ArgumentError::Month(month));
                }
                Ok(DateSelector::Month { year, month })
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                Err(ArgumentError::IncompleteYearMonth)
            }
            (None, None, None) => Ok(DateSelector::Latest),
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, DateSelector::Latest)
    }

    pub fn path_segments(&self) -> Vec<String> {
        match self {
            DateSelector::Latest => vec![],
            DateSelector::Day(date) => {
                vec!["date".to_string(), date.format("%Y-%m-%d").to_string()]
            }
            DateSelector::Month { year, month } => vec![
                "year".to_string(),
                year.to_string(),
                "month".to_string(),
                month.to_string(),
            ],
        }
    }

    /// `""`, `/date/{YYYY-MM-DD}` or `/year/{year}/month/{month}`.
    pub fn path_suffix(&self) -> String {
        self.path_segments()
            .iter()
            .map(|s| format!("/{}", s))
            .collect()
    }
}

fn parse_day(date: &str) -> Result<NaiveDate, ArgumentError> {
    let invalid = || ArgumentError::Date(date.to_string());
    // %m and %d would otherwise accept unpadded fields
    if date.len() != 10 {
        return Err(invalid());
    }
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?;
    if parsed.year() <= MIN_YEAR_EXCLUSIVE {
        return Err(invalid());
    }
    Ok(parsed)
}

fn check_year(year: i32) -> Result<i32, ArgumentError> {
    if year > MIN_YEAR_EXCLUSIVE {
        Ok(year)
    } else {
        Err(ArgumentError::Year(year))
    }
}

/// Year filter of the overnight policy rate endpoint. Unlike
/// [`DateSelector`] it has no month and no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OprYear(i32);

impl OprYear {
    pub fn new(year: i32) -> Result<Self, ArgumentError> {
        check_year(year).map(OprYear)
    }

    pub fn year(&self) -> i32 {
        self.0
    }

    pub fn path_segments(&self) -> Vec<String> {
        vec!["year".to_string(), self.0.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    #[test]
    fn validate_bank_code_pass_every_known_code() {
        for code in catalog().swift_codes() {
            assert_eq!(validate_bank_code(catalog(), code), Ok(*code));
        }
    }

    #[test]
    fn validate_bank_code_fail_unknown_or_wrong_case() {
        for code in ["", "MBBEMY", "mbbemykl", "MBBEMYKLXXX", "XXXXMYKL"] {
            assert!(matches!(
                validate_bank_code(catalog(), code),
                Err(ArgumentError::BankCode(_, 35))
            ));
        }
    }

    #[test]
    fn validate_currency_code_pass_every_known_code() {
        for code in catalog().currency_codes() {
            assert!(validate_currency_code(catalog(), code).is_ok());
        }
    }

    #[test]
    fn validate_currency_code_fail_length_or_membership() {
        for code in ["US", "USDD", "ZZZ", "usd", ""] {
            assert_eq!(
                validate_currency_code(catalog(), code),
                Err(ArgumentError::CurrencyCode(code.to_string()))
            );
        }
    }

    #[test]
    fn validate_search_query_pass_bounds() {
        assert!(validate_search_query("a").is_ok());
        let longest = "a".repeat(49);
        assert!(validate_search_query(&longest).is_ok());
    }

    #[test]
    fn validate_search_query_fail_bounds() {
        assert_eq!(validate_search_query(""), Err(ArgumentError::SearchQuery(0)));
        let fifty = "a".repeat(50);
        assert_eq!(
            validate_search_query(&fifty),
            Err(ArgumentError::SearchQuery(50))
        );
        let sixty = "a".repeat(60);
        assert!(validate_search_query(&sixty).is_err());
    }

    #[test]
    fn validate_search_query_fail_dot_segments() {
        assert_eq!(validate_search_query("."), Err(ArgumentError::SearchQuery(1)));
        assert_eq!(validate_search_query(".."), Err(ArgumentError::SearchQuery(2)));
        assert!(validate_search_query("...").is_ok());
        assert!(validate_search_query("a.b").is_ok());
    }

    #[test]
    fn validate_search_query_pass_counts_chars_not_bytes() {
        let query = "é".repeat(30);
        assert!(validate_search_query(&query).is_ok());
    }

    #[test]
    fn product_pass_parse() {
        assert_eq!("overall".parse::<Product>().unwrap().as_str(), "overall");
        assert_eq!(
            Product::new(catalog(), "interbank").unwrap().as_str(),
            "interbank"
        );
        assert_eq!(Product::default().as_str(), "money_market_operations");
    }

    #[test]
    fn product_fail_parse() {
        let err = "bogus".parse::<Product>().unwrap_err();
        assert_eq!(err, ArgumentError::Product("bogus".to_string()));
        assert!(err.to_string().contains("interbank"));
    }

    #[test]
    fn snapshot_pass_defaults() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.session(), "1130");
        assert_eq!(snapshot.quote(), "rm");
        assert_eq!(Snapshot::new(catalog(), "1700", "fx").unwrap().quote(), "fx");
    }

    #[test]
    fn snapshot_fail_session() {
        assert_eq!(
            Snapshot::new(catalog(), "0300", "rm"),
            Err(ArgumentError::Session("0300".to_string()))
        );
    }

    #[test]
    fn snapshot_fail_quote() {
        assert_eq!(
            Snapshot::new(catalog(), "0900", "xx"),
            Err(ArgumentError::Quote("xx".to_string()))
        );
    }

    #[test]
    fn date_selector_pass_latest() {
        let selector = DateSelector::from_args(DateArgs::latest()).unwrap();
        assert!(selector.is_latest());
        assert_eq!(selector.path_suffix(), "");
    }

    #[test]
    fn date_selector_pass_exact_date() {
        let selector = DateSelector::from_args(DateArgs::on("2021-06-15")).unwrap();
        assert_eq!(selector.path_suffix(), "/date/2021-06-15");
    }

    #[test]
    fn date_selector_pass_year_month() {
        let selector = DateSelector::from_args(DateArgs::month(2021, 6)).unwrap();
        assert_eq!(selector.path_suffix(), "/year/2021/month/6");
        let selector = DateSelector::from_args(DateArgs::month(2001, 12)).unwrap();
        assert_eq!(selector.path_suffix(), "/year/2001/month/12");
    }

    #[test]
    fn date_selector_fail_year_not_after_2000() {
        assert_eq!(
            DateSelector::from_args(DateArgs::on("1999-06-15")),
            Err(ArgumentError::Date("1999-06-15".to_string()))
        );
        assert_eq!(
            DateSelector::from_args(DateArgs::on("2000-12-31")),
            Err(ArgumentError::Date("2000-12-31".to_string()))
        );
        assert_eq!(
            DateSelector::from_args(DateArgs::month(2000, 6)),
            Err(ArgumentError::Year(2000))
        );
    }

    #[test]
    fn date_selector_fail_malformed_date() {
        for date in ["2021-13-01", "2021-02-30", "2021/06/15", "2021-6-15", "yesterday", ""] {
            assert_eq!(
                DateSelector::from_args(DateArgs::on(date)),
                Err(ArgumentError::Date(date.to_string())),
                "{}",
                date
            );
        }
    }

    #[test]
    fn date_selector_fail_month_range() {
        assert_eq!(
            DateSelector::from_args(DateArgs::month(2021, 0)),
            Err(ArgumentError::Month(0))
        );
        assert_eq!(
            DateSelector::from_args(DateArgs::month(2021, 13)),
            Err(ArgumentError::Month(13))
        );
    }

    #[test]
    fn date_selector_fail_both_before_parsing() {
        let args = DateArgs {
            date: Some("2021-06-15"),
            year: Some(2021),
            month: Some(6),
        };
        assert_eq!(
            DateSelector::from_args(args),
            Err(ArgumentError::ConflictingDateArgs)
        );
        // garbage on both sides still reports the conflict first
        let args = DateArgs {
            date: Some("not a date"),
            year: Some(1),
            month: None,
        };
        assert_eq!(
            DateSelector::from_args(args),
            Err(ArgumentError::ConflictingDateArgs)
        );
    }

    #[test]
    fn date_selector_fail_incomplete_year_month() {
        let only_year = DateArgs {
            year: Some(2021),
            ..DateArgs::default()
        };
        let only_month = DateArgs {
            month: Some(6),
            ..DateArgs::default()
        };
        assert_eq!(
            DateSelector::from_args(only_year),
            Err(ArgumentError::IncompleteYearMonth)
        );
        assert_eq!(
            DateSelector::from_args(only_month),
            Err(ArgumentError::IncompleteYearMonth)
        );
    }

    #[test]
    fn opr_year_pass() {
        assert_eq!(OprYear::new(2001).unwrap().path_segments(), vec!["year", "2001"]);
        assert_eq!(OprYear::new(9999).unwrap().year(), 9999);
    }

    #[test]
    fn opr_year_fail() {
        assert_eq!(OprYear::new(2000), Err(ArgumentError::Year(2000)));
    }
}
