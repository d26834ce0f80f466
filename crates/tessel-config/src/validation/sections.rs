//! Per-section validators.

use crate::schema::TesselConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_border(errors: &mut Vec<String>, config: &TesselConfig) {
    validate_range_f64(errors, "border.width", config.border.width, 0.0, 20.0);
    validate_range_f64(errors, "border.offset", config.border.offset, -10.0, 10.0);
}

pub(crate) fn validate_floating(errors: &mut Vec<String>, config: &TesselConfig) {
    validate_range_f64(
        errors,
        "floating.width",
        config.floating.width,
        100.0,
        10000.0,
    );
    validate_range_f64(
        errors,
        "floating.height",
        config.floating.height,
        100.0,
        10000.0,
    );
}

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &TesselConfig) {
    validate_range_f64(errors, "layout.gap", config.layout.gap, 0.0, 100.0);
    validate_range_f64(errors, "layout.padding", config.layout.padding, 0.0, 200.0);
    validate_range_f64(
        errors,
        "layout.stack_bar_height",
        config.layout.stack_bar_height,
        0.0,
        100.0,
    );
}

pub(crate) fn validate_sync(errors: &mut Vec<String>, config: &TesselConfig) {
    validate_range(errors, "sync.coalesce_ms", config.sync.coalesce_ms, 0, 1000);
}
