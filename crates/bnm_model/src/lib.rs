use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod table;

pub use table::{ConversionError, Table};

/// Shape a caller wants the API payload handed back in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Tabular,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Tabular => "tabular",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown response format '{0}', expected one of: json, tabular")]
pub struct UnknownFormat(pub String);

impl FromStr for ResponseFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ResponseFormat::Json),
            // "df" is what dataframe-minded callers ask for
            "tabular" | "table" | "df" => Ok(ResponseFormat::Tabular),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// A decoded API response in the representation that was asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Json(serde_json::Value),
    Table(Table),
}

impl Payload {
    pub fn format(&self) -> ResponseFormat {
        match self {
            Payload::Json(_) => ResponseFormat::Json,
            Payload::Table(_) => ResponseFormat::Tabular,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Payload::Json(_) => None,
            Payload::Table(table) => Some(table),
        }
    }
}
