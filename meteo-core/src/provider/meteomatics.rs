use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use tracing::{debug, instrument, warn};

use crate::{
    ApiResponse, ClientConfig, FetchError, Series, WeatherRequest, WeatherSeries, collect_series,
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct MeteomaticsProvider {
    config: ClientConfig,
    http: Client,
}

impl MeteomaticsProvider {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, http })
    }

    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[instrument(
        skip_all,
        fields(time_spec = %request.time_spec, parameters = %request.parameters, location = %request.location)
    )]
    async fn fetch_response(&self, request: &WeatherRequest) -> Result<ApiResponse, FetchError> {
        let url = request.url(&self.config.base_url);
        debug!(%url, "sending Meteomatics request");

        let res = self
            .http
            .get(&url)
            .header(AUTHORIZATION, request.credentials.authorization_header())
            .send()
            .await?;

        let status = res.status();
        debug!(status = status.as_u16(), "received Meteomatics response");

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Meteomatics request rejected");
            return Err(FetchError::Api { status: status.as_u16() });
        }

        let body = res.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&body)?;

        debug!(blocks = parsed.data.len(), "parsed Meteomatics response");
        Ok(parsed)
    }
}

#[async_trait]
impl WeatherProvider for MeteomaticsProvider {
    async fn fetch(&self, request: &WeatherRequest) -> Result<WeatherSeries, FetchError> {
        let response = self.fetch_response(request).await?;
        Ok(WeatherSeries::from_response(&response))
    }

    async fn fetch_all(
        &self,
        request: &WeatherRequest,
    ) -> Result<IndexMap<String, Series>, FetchError> {
        let response = self.fetch_response(request).await?;
        Ok(collect_series(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_config() {
        let cfg = ClientConfig { base_url: "http://localhost:9".into(), timeout_secs: 3 };
        let provider = MeteomaticsProvider::new(cfg).expect("client builds");

        assert_eq!(provider.config().base_url, "http://localhost:9");
        assert_eq!(provider.config().timeout_secs, 3);
    }

    #[test]
    fn with_defaults_uses_public_api() {
        let provider = MeteomaticsProvider::with_defaults().expect("client builds");

        assert_eq!(provider.config().base_url, "https://api.meteomatics.com");
    }
}
