use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "meteo",
    version,
    about = "Fetch temperature, precipitation and humidity series from Meteomatics"
)]
pub struct Cli {
    /// Date or range with step, e.g. "2024-01-15T00:00:00Z--2024-01-18T00:00:00Z:PT1H".
    pub time_spec: String,

    /// Comma separated parameters, e.g. "t_2m:C,precip_1h:mm,relative_humidity_2m:pct".
    pub parameters: String,

    /// Latitude and longitude, e.g. "52.520551,13.461804".
    pub location: String,

    /// Meteomatics API username.
    pub username: String,

    /// Meteomatics API password.
    pub password: String,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let series = meteo_core::fetch_blocking(
            &self.time_spec,
            &self.parameters,
            &self.location,
            &self.username,
            &self.password,
        )
        .with_context(|| format!("Failed to fetch weather data for {}", self.location))?;

        info!(
            temperature = series.temperature.len(),
            precipitation = series.precipitation.len(),
            humidity = series.humidity.len(),
            "fetched series"
        );

        let mut stdout = io::stdout().lock();
        output::render(&series, &mut stdout)
            .and_then(|()| stdout.flush())
            .context("Failed to write weather data to stdout")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_five_positionals_in_order() {
        let cli = Cli::try_parse_from([
            "meteo",
            "2024-01-15T00:00:00Z--2024-01-18T00:00:00Z:PT1H",
            "t_2m:C,precip_1h:mm",
            "52.520551,13.461804",
            "user",
            "pass",
        ])
        .expect("valid arguments");

        assert_eq!(cli.time_spec, "2024-01-15T00:00:00Z--2024-01-18T00:00:00Z:PT1H");
        assert_eq!(cli.parameters, "t_2m:C,precip_1h:mm");
        assert_eq!(cli.location, "52.520551,13.461804");
        assert_eq!(cli.username, "user");
        assert_eq!(cli.password, "pass");
    }

    #[test]
    fn missing_arguments_are_rejected() {
        let err = Cli::try_parse_from(["meteo", "now", "t_2m:C", "52.5,13.4", "user"]);

        assert!(err.is_err());
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let err = Cli::try_parse_from(["meteo", "now", "t_2m:C", "52.5,13.4", "u", "p", "x"]);

        assert!(err.is_err());
    }
}
