//! Human-readable rendering of fetched series.

use meteo_core::{ParameterKind, WeatherSeries};
use std::io::{self, Write};

/// Write every bucket under its heading, separated by blank lines.
pub fn render<W: Write>(series: &WeatherSeries, out: &mut W) -> io::Result<()> {
    for (i, kind) in ParameterKind::all().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} Data:", kind.label())?;
        for (date, value) in series.get(*kind) {
            writeln!(out, "Date: {date}, {}: {value}{}", kind.label(), kind.unit())?;
        }
    }

    Ok(())
}
