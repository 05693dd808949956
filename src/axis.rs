use serde_json::{Map, Value};

/// A linear mapping between a widget's pixel extent and its domain interval.
///
/// Nothing guards against a zero extent or an empty domain; those produce
/// non-finite results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub domain: (f64, f64),
    pub pixels: f64,
}

impl Axis {
    pub fn new(domain: (f64, f64), pixels: f64) -> Self {
        Self { domain, pixels }
    }

    /// Horizontal axis from a resolved widget configuration (`xrange` and `width`).
    pub fn horizontal(params: &Map<String, Value>) -> Option<Self> {
        Self::from_params(params, "xrange", "width")
    }

    /// Vertical axis from a resolved widget configuration (`yrange` and `height`).
    pub fn vertical(params: &Map<String, Value>) -> Option<Self> {
        Self::from_params(params, "yrange", "height")
    }

    fn from_params(params: &Map<String, Value>, range_key: &str, extent_key: &str) -> Option<Self> {
        let range = params.get(range_key)?.as_array()?;
        let [min, max] = range.as_slice() else {
            return None;
        };
        let pixels = params.get(extent_key)?.as_f64()?;
        Some(Self::new((min.as_f64()?, max.as_f64()?), pixels))
    }

    pub fn span(&self) -> f64 {
        self.domain.1 - self.domain.0
    }

    pub fn pixel_to_coord(&self, value: f64) -> f64 {
        self.domain.0 + (value / self.pixels) * self.span()
    }

    pub fn coord_to_pixel(&self, value: f64) -> f64 {
        self.pixels * (value - self.domain.0) / self.span()
    }
}
