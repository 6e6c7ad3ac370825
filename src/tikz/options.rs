use serde::{Deserialize, Serialize};

/// Parameters of a single path emission.
///
/// Missing fields take their defaults when deserialized, so a partial config such as
/// `{"unit": "mm"}` is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Annotate the first point with this value.
    pub label: Option<f64>,
    /// Decorate each segment with an arrow marker.
    pub direction: bool,
    /// Suffix of every coordinate.
    pub unit: String,
    /// Segments longer than this (in raw coordinate units) get the large arrow.
    pub arrow_threshold: f64,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            label: None,
            direction: true,
            unit: "cm".to_string(),
            arrow_threshold: 1.0,
        }
    }
}

impl EmitOptions {
    pub fn with_label(mut self, label: f64) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_direction(mut self, direction: bool) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_arrow_threshold(mut self, threshold: f64) -> Self {
        self.arrow_threshold = threshold;
        self
    }
}
