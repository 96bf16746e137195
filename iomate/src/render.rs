//! Output rendering for signal listings.

use iomate_common::config::OutputFormat;
use iomate_common::io::SignalDefinition;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization failed: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Top-level document for structured formats.
#[derive(Serialize)]
struct Listing<'a> {
    signals: &'a [&'static SignalDefinition],
}

/// Render `signals` in `format`. Text and JSON output end with a newline.
pub fn render(
    signals: &[&'static SignalDefinition],
    format: OutputFormat,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(signals)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&Listing { signals })?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Toml => Ok(toml::to_string(&Listing { signals })?),
    }
}

fn render_text(signals: &[&'static SignalDefinition]) -> String {
    signals
        .iter()
        .map(|d| format!("{}\t{}\t{:#04x}\n", d.class, d.name, d.address))
        .collect()
}
