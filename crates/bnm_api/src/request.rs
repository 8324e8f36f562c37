use reqwest::Url;

use crate::error::Error;

/// One fully validated call: resource, path segments and query, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    resource: &'static str,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl EndpointRequest {
    pub fn new(resource: &'static str) -> Self {
        EndpointRequest {
            resource,
            segments: vec![],
            query: vec![],
        }
    }

    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }

    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Path below the base URL, unencoded, e.g. `/base-rate/MBBEMYKL`.
    pub fn path(&self) -> String {
        let mut path = format!("/{}", self.resource);
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    /// Absolute URL with every segment percent-encoded.
    pub fn url(&self, base_url: &str) -> Result<Url, Error> {
        let mut url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("base url '{}': {}", base_url, e)))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::Config(format!("base url '{}' cannot be a base", base_url)))?;
            path.pop_if_empty();
            path.push(self.resource);
            for segment in &self.segments {
                path.push(segment);
            }
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}
