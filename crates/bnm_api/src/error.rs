use std::fmt;

/// A caller-supplied filter the API would not accept.
///
/// Raised before any request is made. Every message names what is allowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("invalid bank code '{0}': expected one of the {1} supported SWIFT codes")]
    BankCode(String, usize),
    #[error("invalid currency code '{0}': expected a 3-letter ISO 4217 code")]
    CurrencyCode(String),
    #[error("invalid product type '{0}': expected one of {allowed}", allowed = OneOf(&crate::catalog::PRODUCTS))]
    Product(String),
    #[error("invalid session '{0}': expected one of {allowed}", allowed = OneOf(&crate::catalog::SESSIONS))]
    Session(String),
    #[error("invalid quote '{0}': expected one of {allowed}", allowed = OneOf(&crate::catalog::QUOTES))]
    Quote(String),
    #[error("search query must be 1 to 49 characters and not '.' or '..', got {0} characters")]
    SearchQuery(usize),
    #[error("supply either a date or a year and month, not both")]
    ConflictingDateArgs,
    #[error("year and month must be supplied together")]
    IncompleteYearMonth,
    #[error("invalid date '{0}': expected YYYY-MM-DD with a year after 2000")]
    Date(String),
    #[error("invalid year {0}: expected a year after 2000")]
    Year(i32),
    #[error("invalid month {0}: expected 1 to 12")]
    Month(u32),
    #[error("a date filter on exchange rates requires a currency code")]
    DateRequiresCurrency,
}

struct OneOf<'a>(&'a [&'a str]);

impl fmt::Display for OneOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error("remote call failed with status {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unsupported conversion: {0}")]
    UnsupportedConversion(String),
    #[error("bad configuration: {0}")]
    Config(String),
}

impl From<bnm_model::ConversionError> for Error {
    fn from(err: bnm_model::ConversionError) -> Error {
        Error::UnsupportedConversion(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_error_pass_names_products() {
        let msg = ArgumentError::Product("bogus".to_string()).to_string();
        assert!(msg.contains("money_market_operations, interbank, overall"));
    }

    #[test]
    fn argument_error_pass_names_sessions() {
        let msg = ArgumentError::Session("0300".to_string()).to_string();
        assert!(msg.contains("0900, 1130, 1200, 1700"));
    }

    #[test]
    fn error_pass_remote_carries_status() {
        let err = Error::Remote {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "remote call failed with status 404: not found"
        );
    }
}
