//! Client for Bank Negara Malaysia's public open data API.
//!
//! Every endpoint validates its filters against the shared [`Catalog`]
//! before anything touches the network, then issues a single GET and hands
//! the body back as JSON or as a [`Table`].

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod request;
pub mod transport;
pub mod validation;

pub use api::BnmAPI;
pub use bnm_model::{Payload, ResponseFormat, Table};
pub use catalog::Catalog;
pub use config::ClientConfig;
pub use error::{ArgumentError, Error};
pub use request::EndpointRequest;
pub use transport::{HttpTransport, RawResponse, Transport};
pub use validation::{DateArgs, DateSelector, OprYear, Product, Snapshot};
