use bnm_model::{Payload, ResponseFormat, Table};
use log::debug;

use crate::catalog::Catalog;
use crate::config::ClientConfig;
use crate::error::{ArgumentError, Error};
use crate::request::EndpointRequest;
use crate::transport::{self, HttpTransport, Transport};
use crate::validation::{
    DateArgs, DateSelector, OprYear, Product, Snapshot, validate_bank_code,
    validate_currency_code, validate_search_query,
};

/// Bank Negara Malaysia open API client.
///
/// Every `*_request` method validates its filters and builds the call
/// without doing any I/O; the method of the same name without the suffix
/// sends it and decodes the answer.
pub struct BnmAPI<T: Transport = HttpTransport> {
    config: ClientConfig,
    catalog: &'static Catalog,
    transport: T,
}

impl BnmAPI {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, Catalog::builtin(), HttpTransport::new())
    }

    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }
}

impl Default for BnmAPI {
    fn default() -> Self {
        BnmAPI::new()
    }
}

impl<T: Transport> BnmAPI<T> {
    pub fn with_transport(config: ClientConfig, catalog: &'static Catalog, transport: T) -> Self {
        BnmAPI {
            config,
            catalog,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Sends an already built request and converts the body.
    pub fn fetch(
        &self,
        request: &EndpointRequest,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let url = request.url(self.config.base_url())?;
        let headers = self.config.header_map()?;

        debug!("{} | url: {}", request.resource(), url);

        let body = transport::dispatch(&self.transport, &url, &headers)?;
        into_payload(&body, format.unwrap_or(self.config.default_format()))
    }

    /// Base rate and base lending rate, optionally for one bank.
    pub fn base_rate_request(&self, bank_code: Option<&str>) -> Result<EndpointRequest, ArgumentError> {
        let mut request = EndpointRequest::new("base-rate");
        if let Some(code) = bank_code {
            request = request.segment(validate_bank_code(self.catalog, code)?);
        }
        Ok(request)
    }

    pub fn base_rate(
        &self,
        bank_code: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.base_rate_request(bank_code)?;
        self.fetch(&request, format)
    }

    pub fn fx_turnover_request(&self, date: DateArgs) -> Result<EndpointRequest, ArgumentError> {
        dated("fx-turn-over", date)
    }

    pub fn fx_turnover(&self, date: DateArgs, format: Option<ResponseFormat>) -> Result<Payload, Error> {
        let request = self.fx_turnover_request(date)?;
        self.fetch(&request, format)
    }

    /// Exchange rates for a snapshot session, optionally narrowed to one
    /// currency and then to a date or month. A date filter without a
    /// currency is refused.
    pub fn exchange_rate_request(
        &self,
        session: Option<&str>,
        quote: Option<&str>,
        currency_code: Option<&str>,
        date: DateArgs,
    ) -> Result<EndpointRequest, ArgumentError> {
        let defaults = Snapshot::default();
        let snapshot = Snapshot::new(
            self.catalog,
            session.unwrap_or(defaults.session()),
            quote.unwrap_or(defaults.quote()),
        )?;

        let mut request = EndpointRequest::new("exchange-rate");
        match currency_code {
            Some(code) => {
                let code = validate_currency_code(self.catalog, code)?;
                let selector = DateSelector::from_args(date)?;
                request = request.segment(code).segments(selector.path_segments());
            }
            None if !date.is_empty() => return Err(ArgumentError::DateRequiresCurrency),
            None => {}
        }

        Ok(request
            .param("session", snapshot.session())
            .param("quote", snapshot.quote()))
    }

    pub fn exchange_rate(
        &self,
        session: Option<&str>,
        quote: Option<&str>,
        currency_code: Option<&str>,
        date: DateArgs,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.exchange_rate_request(session, quote, currency_code, date)?;
        self.fetch(&request, format)
    }

    /// Financial consumer alerts. `None` lists them all.
    pub fn consumer_alert_request(
        &self,
        search_query: Option<&str>,
    ) -> Result<EndpointRequest, ArgumentError> {
        let mut request = EndpointRequest::new("consumer-alert");
        if let Some(query) = search_query {
            request = request.segment(validate_search_query(query)?);
        }
        Ok(request)
    }

    pub fn consumer_alert(
        &self,
        search_query: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.consumer_alert_request(search_query)?;
        self.fetch(&request, format)
    }

    pub fn interbank_swap_request(&self, date: DateArgs) -> Result<EndpointRequest, ArgumentError> {
        dated("interbank-swap", date)
    }

    pub fn interbank_swap(
        &self,
        date: DateArgs,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.interbank_swap_request(date)?;
        self.fetch(&request, format)
    }

    pub fn interest_rate_request(
        &self,
        product: Option<&str>,
        date: DateArgs,
    ) -> Result<EndpointRequest, ArgumentError> {
        with_product(self.catalog, "interest-rate", product, date)
    }

    pub fn interest_rate(
        &self,
        product: Option<&str>,
        date: DateArgs,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.interest_rate_request(product, date)?;
        self.fetch(&request, format)
    }

    pub fn interest_volume_request(
        &self,
        product: Option<&str>,
        date: DateArgs,
    ) -> Result<EndpointRequest, ArgumentError> {
        with_product(self.catalog, "interest-volume", product, date)
    }

    pub fn interest_volume(
        &self,
        product: Option<&str>,
        date: DateArgs,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.interest_volume_request(product, date)?;
        self.fetch(&request, format)
    }

    pub fn islamic_interbank_rate_request(
        &self,
        date: DateArgs,
    ) -> Result<EndpointRequest, ArgumentError> {
        dated("islamic-interbank-rate", date)
    }

    pub fn islamic_interbank_rate(
        &self,
        date: DateArgs,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.islamic_interbank_rate_request(date)?;
        self.fetch(&request, format)
    }

    pub fn kijang_emas_request(&self, date: DateArgs) -> Result<EndpointRequest, ArgumentError> {
        dated("kijang-emas", date)
    }

    pub fn kijang_emas(&self, date: DateArgs, format: Option<ResponseFormat>) -> Result<Payload, Error> {
        let request = self.kijang_emas_request(date)?;
        self.fetch(&request, format)
    }

    /// Overnight policy rate, optionally for a single year.
    pub fn opr_request(&self, year: Option<i32>) -> Result<EndpointRequest, ArgumentError> {
        let mut request = EndpointRequest::new("opr");
        if let Some(year) = year {
            request = request.segments(OprYear::new(year)?.path_segments());
        }
        Ok(request)
    }

    pub fn opr(&self, year: Option<i32>, format: Option<ResponseFormat>) -> Result<Payload, Error> {
        let request = self.opr_request(year)?;
        self.fetch(&request, format)
    }

    pub fn renminbi_deposit_acceptance_rate_request(&self) -> EndpointRequest {
        EndpointRequest::new("renminbi-deposit-acceptance-rate")
    }

    pub fn renminbi_deposit_acceptance_rate(
        &self,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        self.fetch(&self.renminbi_deposit_acceptance_rate_request(), format)
    }

    pub fn renminbi_fx_forward_price_request(&self) -> EndpointRequest {
        EndpointRequest::new("renminbi-fx-forward-price")
    }

    pub fn renminbi_fx_forward_price(&self, format: Option<ResponseFormat>) -> Result<Payload, Error> {
        self.fetch(&self.renminbi_fx_forward_price_request(), format)
    }

    pub fn usd_interbank_intraday_rate_request(
        &self,
        date: DateArgs,
    ) -> Result<EndpointRequest, ArgumentError> {
        dated("usd-interbank-intraday-rate", date)
    }

    pub fn usd_interbank_intraday_rate(
        &self,
        date: DateArgs,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.usd_interbank_intraday_rate_request(date)?;
        self.fetch(&request, format)
    }

    pub fn kl_usd_reference_rate_request(
        &self,
        date: DateArgs,
    ) -> Result<EndpointRequest, ArgumentError> {
        dated("kl-usd-reference-rate", date)
    }

    pub fn kl_usd_reference_rate(
        &self,
        date: DateArgs,
        format: Option<ResponseFormat>,
    ) -> Result<Payload, Error> {
        let request = self.kl_usd_reference_rate_request(date)?;
        self.fetch(&request, format)
    }
}

fn dated(resource: &'static str, date: DateArgs) -> Result<EndpointRequest, ArgumentError> {
    let selector = DateSelector::from_args(date)?;
    Ok(EndpointRequest::new(resource).segments(selector.path_segments()))
}

fn with_product(
    catalog: &Catalog,
    resource: &'static str,
    product: Option<&str>,
    date: DateArgs,
) -> Result<EndpointRequest, ArgumentError> {
    let product = match product {
        Some(name) => Product::new(catalog, name)?,
        None => Product::default(),
    };
    Ok(dated(resource, date)?.param("product", product.as_str()))
}

fn into_payload(body: &str, format: ResponseFormat) -> Result<Payload, Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match format {
        ResponseFormat::Json => Ok(Payload::Json(value)),
        ResponseFormat::Tabular => Ok(Payload::Table(Table::from_envelope(&value)?)),
    }
}
