//! Parsing of delimited value strings into numeric series.

/// Delimiter used when none is configured and none can be detected.
pub const DEFAULT_DELIMITER: char = ',';

/// Splits `raw` on `delimiter` and parses every chunk as `f64`.
///
/// Chunks that are not numbers become `f64::NAN` and flow into later scale
/// math unchanged. Callers that need strict input must validate beforehand.
#[must_use]
pub fn parse_series(raw: &str, delimiter: char) -> Vec<f64> {
    raw.split(delimiter).map(parse_chunk).collect()
}

fn parse_chunk(chunk: &str) -> f64 {
    chunk.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Returns the first character that is neither an ASCII digit nor `.`.
///
/// Note that `-` is treated as a delimiter here, so signed input needs an
/// explicit delimiter.
#[must_use]
pub fn detect_delimiter(raw: &str) -> Option<char> {
    raw.chars().find(|ch| !ch.is_ascii_digit() && *ch != '.')
}

/// Resolves the delimiter for `raw`: the configured one, else the detected
/// one, else [`DEFAULT_DELIMITER`].
#[must_use]
pub fn resolve_delimiter(raw: &str, configured: Option<char>) -> char {
    configured
        .or_else(|| detect_delimiter(raw))
        .unwrap_or(DEFAULT_DELIMITER)
}

/// Minimum and maximum of `values`, propagating `NaN` when any entry is `NaN`.
///
/// An empty slice yields `(INFINITY, NEG_INFINITY)`.
#[must_use]
pub fn series_extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &value| {
            if value.is_nan() || min.is_nan() {
                (f64::NAN, f64::NAN)
            } else {
                (min.min(value), max.max(value))
            }
        })
}
