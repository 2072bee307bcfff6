use crate::error::{ThumbnailError, ThumbnailResult};

/// Span, relative to the value magnitude, used to widen a constant series.
const MIN_SPAN_RELATIVE: f64 = 1e-9;

/// Tuning controls for fitting a scale around data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFit {
    /// Fraction of the data span added on each side.
    pub padding_ratio: f64,
    /// Smallest span used when all values are equal.
    pub min_span_absolute: f64,
}

impl Default for ScaleFit {
    fn default() -> Self {
        Self {
            padding_ratio: 0.0,
            min_span_absolute: 1.0,
        }
    }
}

/// Linear mapping from a data domain onto a pixel interval.
///
/// The pixel interval may run backwards (`start > end`), which is how the
/// vertical axis is flipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ThumbnailResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ThumbnailError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits a scale around every finite value yielded by `values`.
    ///
    /// Returns `None` when there is no finite value at all.
    pub fn fit(
        values: impl IntoIterator<Item = f64>,
        fit: ScaleFit,
    ) -> ThumbnailResult<Option<Self>> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }
        if !min.is_finite() || !max.is_finite() {
            return Ok(None);
        }

        let mut span = max - min;
        if span <= 0.0 {
            // A fixed span vanishes below the spacing of large magnitudes.
            let span_floor = fit.min_span_absolute.max(min.abs() * MIN_SPAN_RELATIVE);
            let half = span_floor / 2.0;
            min -= half;
            max += half;
            span = span_floor;
        }
        let pad = span * fit.padding_ratio;
        Self::new(min - pad, max + pad).map(Some)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, pixel_start: f64, pixel_end: f64) -> ThumbnailResult<f64> {
        if !value.is_finite() {
            return Err(ThumbnailError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(pixel_start + normalized * (pixel_end - pixel_start))
    }
}
