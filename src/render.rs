use crate::{
    page::{self, Page},
    response::AnalysisResponse,
};
use serde_json::Value;

/// Binds the analysis fields into the page's display elements.
/// Absent text fields render empty; an absent image leaves the element alone.
pub fn render<P: Page>(page: &P, analysis: &AnalysisResponse) {
    page.set_text(
        page::HEALTH_STATUS,
        analysis.health_status.as_deref().unwrap_or_default(),
    );
    page.set_text(
        page::AVERAGE_HPI,
        &analysis.average_hpi.map(js_number).unwrap_or_default(),
    );
    page.set_text(
        page::HPI_VALUES,
        &analysis
            .hpi_percentage
            .as_ref()
            .map(js_pretty_json)
            .unwrap_or_default(),
    );
    if let Some(image) = &analysis.hpi_image {
        page.set_image_src(page::HPI_IMAGE, &page::image_data_uri(image));
    }
}

/// Formats `value` the way a JavaScript number converts to a string.
pub fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// Two-space indented JSON keeping key order, with whole floats printed
/// without a fractional part.
pub fn js_pretty_json(value: &Value) -> String {
    let value = whole_floats_as_integers(value);
    // Serializing a Value cannot fail; fall back to the compact form anyway.
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

fn whole_floats_as_integers(value: &Value) -> Value {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(x) if number.is_f64() && x.fract() == 0.0 && x.abs() < i64::MAX as f64 => {
                Value::from(x as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(whole_floats_as_integers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), whole_floats_as_integers(item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}
