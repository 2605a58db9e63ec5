#![forbid(unsafe_code)]

//! Sparkline sample normalization and glyph rendering.
//!
//! Metrics carry an ordered sample sequence; rendering needs those
//! samples mapped onto a bounded height. The mapping is
//! `(v - min) / (max - min) * target_height`, with the two numeric edge
//! cases made explicit: an empty series is rejected, and a constant
//! series (no range to divide by) maps every sample to the midline.

use std::fmt;

/// Block characters for sparkline rendering (9 levels: empty + 8 bars).
const SPARK_CHARS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Errors from sparkline sample handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The sample series has no elements.
    EmptySeries,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeries => write!(f, "sparkline sample series is empty"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Map samples onto `0..=target_height`.
///
/// Heights are `(v - min) / (max - min) * target_height`. A constant
/// series has no range to divide by; every sample then maps to the
/// midline `target_height / 2` so the sparkline renders flat instead of
/// dividing by zero. The same fallback covers series whose range is not
/// finite (NaN or infinite samples).
pub fn normalize(samples: &[f64], target_height: f64) -> Result<Vec<f64>, SampleError> {
    if samples.is_empty() {
        return Err(SampleError::EmptySeries);
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= 0.0 || !range.is_finite() {
        return Ok(vec![target_height / 2.0; samples.len()]);
    }

    Ok(samples
        .iter()
        .map(|value| (value - min) / range * target_height)
        .collect())
}

/// Render samples as a one-line bar string.
///
/// Samples are normalized onto the 8-level block ramp; a constant
/// series renders as a flat row of half-height bars.
pub fn render_bars(samples: &[f64]) -> Result<String, SampleError> {
    let heights = normalize(samples, 8.0)?;
    Ok(heights
        .iter()
        .map(|height| {
            let idx = if height.is_finite() {
                height.round().clamp(0.0, 8.0) as usize
            } else {
                0
            };
            SPARK_CHARS[idx]
        })
        .collect())
}
