use serde::{Deserialize, Serialize};

/// Fixed frame measurements for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewConfig {
    /// Garment body width (px).
    pub garment_width: f64,
    /// Canvas height (px).
    pub canvas_height: f64,
    pub sleeve_width: f64,
    /// Offset of the sleeve panels from the top of the body (px).
    pub sleeve_top: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            garment_width: 260.0,
            canvas_height: 420.0,
            sleeve_width: 62.0,
            sleeve_top: 46.0,
        }
    }
}
