#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ViewerConfig::from_lookup(lookup(&[]));
    assert_eq!(cfg, ViewerConfig::default());
    assert_eq!(cfg.viewport.width, DEFAULT_VIEWPORT_WIDTH);
    assert_eq!(cfg.viewport.height, DEFAULT_VIEWPORT_HEIGHT);
}

#[test]
fn reads_both_dimensions() {
    let cfg = ViewerConfig::from_lookup(lookup(&[(VIEWPORT_WIDTH_VAR, "1024"), (VIEWPORT_HEIGHT_VAR, " 768 ")]));
    assert_eq!(cfg.viewport, Viewport::new(1024.0, 768.0));
}

#[test]
fn invalid_values_fall_back() {
    let cfg = ViewerConfig::from_lookup(lookup(&[(VIEWPORT_WIDTH_VAR, "wide"), (VIEWPORT_HEIGHT_VAR, "-5")]));
    assert_eq!(cfg, ViewerConfig::default());
    let cfg = ViewerConfig::from_lookup(lookup(&[(VIEWPORT_WIDTH_VAR, "0"), (VIEWPORT_HEIGHT_VAR, "inf")]));
    assert_eq!(cfg, ViewerConfig::default());
}

#[test]
fn overrides_replace_environment() {
    let cfg = ViewerConfig::from_lookup(lookup(&[(VIEWPORT_WIDTH_VAR, "1024")])).with_overrides(Some(320.0), None);
    assert_eq!(cfg.viewport, Viewport::new(320.0, DEFAULT_VIEWPORT_HEIGHT));
}

#[test]
fn invalid_overrides_are_ignored() {
    let cfg = ViewerConfig::default().with_overrides(Some(-1.0), Some(f64::NAN));
    assert_eq!(cfg, ViewerConfig::default());
}

#[test]
fn invalid_override_keeps_environment_value() {
    let cfg = ViewerConfig::from_lookup(lookup(&[(VIEWPORT_WIDTH_VAR, "1024")])).with_overrides(Some(0.0), Some(480.0));
    assert_eq!(cfg.viewport, Viewport::new(1024.0, 480.0));
}
