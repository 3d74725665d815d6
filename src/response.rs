use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
pub struct UploadResponse {
    pub image_url: String,
}

#[derive(Serialize)]
pub struct AnalysisRequest<'a> {
    pub image_url: &'a str,
}

/// Every field is optional so a partial response still renders what it has.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    pub health_status: Option<String>,
    pub average_hpi: Option<f64>,
    /// `Some(Value::Null)` for an explicit `null`, `None` when absent.
    #[serde(deserialize_with = "present")]
    pub hpi_percentage: Option<Value>,
    /// Base64 PNG, no data URI prefix.
    pub hpi_image: Option<String>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
