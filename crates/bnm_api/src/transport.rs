use log::warn;
use reqwest::Url;
use reqwest::header::HeaderMap;

use crate::error::Error;

/// Status and body of a finished GET, whatever the status was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Something that can perform a single GET.
pub trait Transport {
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse, Error>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        HttpTransport::new()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse, Error> {
        let res = self
            .client
            .get(url.clone())
            .headers(headers.clone())
            .send()?;
        let status = res.status().as_u16();
        let body = res.text()?;
        Ok(RawResponse { status, body })
    }
}

/// One attempt, no retry. 200 and 201 hand back the body, anything else
/// becomes [`Error::Remote`].
pub fn dispatch<T: Transport + ?Sized>(
    transport: &T,
    url: &Url,
    headers: &HeaderMap,
) -> Result<String, Error> {
    let res = transport.get(url, headers)?;
    match res.status {
        200 | 201 => Ok(res.body),
        status => {
            warn!("dispatch | status: {} | url: {}", status, url);
            Err(Error::Remote {
                status,
                body: res.body,
            })
        }
    }
}
