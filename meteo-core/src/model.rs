use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;

use crate::auth::Credentials;

/// Timestamp -> value, in the order the API returned them.
pub type Series = IndexMap<String, Reading>;

/// A numeric value exactly as the API sent it.
///
/// Displays in its JSON form: `0.0` stays `0.0`, `87` stays `87`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Reading(serde_json::Number);

impl Reading {
    /// `None` for NaN or infinite input, which JSON cannot carry.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self)
    }

    pub fn as_f64(&self) -> f64 {
        // Always `Some` without serde_json's `arbitrary_precision`.
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Everything needed for one fetch. Values are passed through to the API untouched.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    /// Single timestamp or `start--end:step`, e.g. `2024-01-15T00:00:00Z--2024-01-18T00:00:00Z:PT1H`.
    pub time_spec: String,
    /// Comma separated parameter identifiers, e.g. `t_2m:C,precip_1h:mm`.
    pub parameters: String,
    /// `latitude,longitude`.
    pub location: String,
    pub credentials: Credentials,
}

impl WeatherRequest {
    pub fn new(
        time_spec: impl Into<String>,
        parameters: impl Into<String>,
        location: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            time_spec: time_spec.into(),
            parameters: parameters.into(),
            location: location.into(),
            credentials,
        }
    }

    /// Resource path below the API origin: `{time_spec}/{parameters}/{location}/json`.
    pub fn path(&self) -> String {
        format!("{}/{}/{}/json", self.time_spec, self.parameters, self.location)
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// The measurements this tool knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Temperature,
    Precipitation,
    Humidity,
}

impl ParameterKind {
    pub const fn all() -> &'static [ParameterKind] {
        &[ParameterKind::Temperature, ParameterKind::Precipitation, ParameterKind::Humidity]
    }

    /// Meteomatics identifier routed into this bucket.
    pub fn identifier(&self) -> &'static str {
        match self {
            ParameterKind::Temperature => "t_2m:C",
            ParameterKind::Precipitation => "precip_1h:mm",
            ParameterKind::Humidity => "relative_humidity_2m:pct",
        }
    }

    /// Exact match only; `t_2m:F` is not a temperature as far as we are concerned.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.identifier() == identifier)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParameterKind::Temperature => "Temperature",
            ParameterKind::Precipitation => "Precipitation",
            ParameterKind::Humidity => "Relative Humidity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ParameterKind::Temperature => "°C",
            ParameterKind::Precipitation => "mm",
            ParameterKind::Humidity => "%",
        }
    }
}

/// The three buckets produced by one successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSeries {
    pub temperature: Series,
    pub precipitation: Series,
    pub humidity: Series,
}

impl WeatherSeries {
    pub fn get(&self, kind: ParameterKind) -> &Series {
        match kind {
            ParameterKind::Temperature => &self.temperature,
            ParameterKind::Precipitation => &self.precipitation,
            ParameterKind::Humidity => &self.humidity,
        }
    }

    fn get_mut(&mut self, kind: ParameterKind) -> &mut Series {
        match kind {
            ParameterKind::Temperature => &mut self.temperature,
            ParameterKind::Precipitation => &mut self.precipitation,
            ParameterKind::Humidity => &mut self.humidity,
        }
    }

    /// Route each identifier's series into its bucket; unknown identifiers are dropped.
    pub fn from_response(response: &ApiResponse) -> Self {
        let mut series = Self::default();

        for (identifier, values) in collect_series(response) {
            match ParameterKind::from_identifier(&identifier) {
                Some(kind) => series.get_mut(kind).extend(values),
                None => tracing::debug!(parameter = %identifier, "dropping unrecognised parameter"),
            }
        }

        series
    }

    pub fn is_empty(&self) -> bool {
        ParameterKind::all().iter().all(|kind| self.get(*kind).is_empty())
    }
}

/// Flatten the response into one series per parameter identifier.
///
/// Blocks repeating an identifier and coordinates within a block merge into
/// the same series; a repeated date keeps its first position and takes the
/// last value.
pub fn collect_series(response: &ApiResponse) -> IndexMap<String, Series> {
    let mut out: IndexMap<String, Series> = IndexMap::new();

    for block in &response.data {
        let series = out.entry(block.parameter.clone()).or_default();
        for coordinate in &block.coordinates {
            for entry in &coordinate.dates {
                series.insert(entry.date.clone(), entry.value.clone());
            }
        }
    }

    out
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub data: Vec<ParameterBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterBlock {
    pub parameter: String,
    pub coordinates: Vec<CoordinateBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoordinateBlock {
    pub dates: Vec<DateValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateValue {
    pub date: String,
    pub value: Reading,
}
