//! Viewer configuration parsed from environment variables.

use shapes::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use shapes::scene::Viewport;

pub const VIEWPORT_WIDTH_VAR: &str = "SHAPEVIEW_VIEWPORT_WIDTH";
pub const VIEWPORT_HEIGHT_VAR: &str = "SHAPEVIEW_VIEWPORT_HEIGHT";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub viewport: Viewport,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { viewport: Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT) }
    }
}

impl ViewerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SHAPEVIEW_VIEWPORT_WIDTH`: default 800
    /// - `SHAPEVIEW_VIEWPORT_HEIGHT`: default 600
    ///
    /// Values that are not positive finite numbers fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let width = parse_dimension(VIEWPORT_WIDTH_VAR, lookup(VIEWPORT_WIDTH_VAR).as_deref(), DEFAULT_VIEWPORT_WIDTH);
        let height = parse_dimension(VIEWPORT_HEIGHT_VAR, lookup(VIEWPORT_HEIGHT_VAR).as_deref(), DEFAULT_VIEWPORT_HEIGHT);
        Self { viewport: Viewport::new(width, height) }
    }

    /// Apply command-line overrides on top of the environment.
    #[must_use]
    pub fn with_overrides(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        if let Some(width) = width {
            self.viewport.width = override_dimension("--viewport-width", width, self.viewport.width);
        }
        if let Some(height) = height {
            self.viewport.height = override_dimension("--viewport-height", height, self.viewport.height);
        }
        self
    }
}

fn parse_dimension(key: &str, raw: Option<&str>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if is_dimension(value) => value,
        _ => {
            tracing::warn!(key, value = raw, default, "ignoring invalid viewport dimension");
            default
        }
    }
}

fn override_dimension(flag: &str, value: f64, current: f64) -> f64 {
    if is_dimension(value) {
        value
    } else {
        tracing::warn!(flag, value, current, "ignoring invalid viewport dimension");
        current
    }
}

fn is_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
