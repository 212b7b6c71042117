//! Loading geometry parameters from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dactyl::layout::{CurvatureStyle, GeometryParameters};
use tracing::{debug, info};

/// Read parameters from `path`, or the defaults when no path is given.
///
/// Missing fields take their default values. `style` overrides the style
/// from the file.
pub fn load(path: Option<&Path>, style: Option<CurvatureStyle>) -> Result<GeometryParameters> {
    let mut params = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let params = parse(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?;
            info!(path = %path.display(), "config loaded");
            params
        }
        None => {
            debug!("no config given, using defaults");
            GeometryParameters::default()
        }
    };

    if let Some(style) = style {
        params = params.with_style(style);
    }
    Ok(params)
}

/// Parse parameters from a JSON document.
pub fn parse(text: &str) -> Result<GeometryParameters> {
    Ok(serde_json::from_str(text)?)
}

/// The default parameters as pretty JSON.
pub fn defaults_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&GeometryParameters::default())?)
}
