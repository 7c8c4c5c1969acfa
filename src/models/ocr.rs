use serde::{Deserialize, Serialize};
use crate::utils::PassportError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrLine {
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrWord {
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub bbox: BoundingBox,
}

/// What the OCR engine hands over: the recognised text plus metadata.
/// Only `text` feeds the parser; the rest is carried into reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrOutput {
    pub text: String,
    #[serde(default)]
    pub confidence: Option<f32>,
    /// Seconds spent in recognition
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub lines: Vec<OcrLine>,
    #[serde(default)]
    pub words: Vec<OcrWord>,
}

impl OcrOutput {
    pub fn from_text(text: impl Into<String>) -> Self {
        OcrOutput {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PassportError> {
        serde_json::from_str(json)
            .map_err(|e| PassportError::InvalidOcrOutput(format!("Failed to decode OCR JSON: {}", e)))
    }
}
