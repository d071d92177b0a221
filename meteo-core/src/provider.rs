use async_trait::async_trait;
use indexmap::IndexMap;
use std::fmt::Debug;

use crate::{
    ClientConfig, Credentials, FetchError, Series, WeatherRequest, WeatherSeries,
    provider::meteomatics::MeteomaticsProvider,
};

pub mod meteomatics;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the temperature, precipitation and humidity buckets.
    async fn fetch(&self, request: &WeatherRequest) -> Result<WeatherSeries, FetchError>;

    /// Fetch every series in the response, keyed by parameter identifier.
    async fn fetch_all(
        &self,
        request: &WeatherRequest,
    ) -> Result<IndexMap<String, Series>, FetchError>;
}

/// One-shot fetch against the public Meteomatics API with default settings.
pub async fn fetch(
    time_spec: &str,
    parameters: &str,
    location: &str,
    username: &str,
    password: &str,
) -> Result<WeatherSeries, FetchError> {
    let provider = MeteomaticsProvider::with_defaults()?;
    let request =
        WeatherRequest::new(time_spec, parameters, location, Credentials::new(username, password));

    provider.fetch(&request).await
}

/// Blocking form of [`fetch`]: returns once the single request completes or times out.
///
/// Drives the request on a private single-threaded runtime, so it must not be
/// called from inside an async context.
pub fn fetch_blocking(
    time_spec: &str,
    parameters: &str,
    location: &str,
    username: &str,
    password: &str,
) -> Result<WeatherSeries, FetchError> {
    let request =
        WeatherRequest::new(time_spec, parameters, location, Credentials::new(username, password));

    fetch_blocking_with(ClientConfig::default(), &request)
}

/// [`fetch_blocking`] against an explicit configuration.
pub fn fetch_blocking_with(
    config: ClientConfig,
    request: &WeatherRequest,
) -> Result<WeatherSeries, FetchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(FetchError::Runtime)?;

    // The client is built inside the runtime that drives it; its connection
    // pool does not outlive this call.
    runtime.block_on(async {
        let provider = MeteomaticsProvider::new(config)?;
        provider.fetch(request).await
    })
}
