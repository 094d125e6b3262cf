use regex::Regex;

use crate::error::Result;

/// Parses human-readable size text ("1.4 GB", "700MB") into gigabytes.
///
/// Binary multiples throughout: 1 GB = 1024 MB = 1024 * 1024 KB.
pub struct SizeNormalizer {
    re_size: Regex,
}

impl SizeNormalizer {
    /// Constructs a normalizer with its pattern pre-compiled.
    ///
    /// # Errors
    ///
    /// Returns `SeedrankError::RegexError` if the pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_size: Regex::new(r"([0-9.]+)\s*([A-Za-z]+)")?,
        })
    }

    /// Returns the size in GB, or `0.0` when the text holds no
    /// number-unit pair, the number does not parse, or the unit is not
    /// one of KB/MB/GB/TB.
    ///
    /// A result of `0.0` means "unknown", never "empty".
    #[must_use]
    pub fn to_gb(&self, raw: &str) -> f64 {
        let Some(caps) = self.re_size.captures(raw.trim()) else {
            return 0.0;
        };
        let Ok(value) = caps[1].parse::<f64>() else {
            return 0.0;
        };

        match caps[2].to_uppercase().as_str() {
            "KB" => value / (1024.0 * 1024.0),
            "MB" => value / 1024.0,
            "GB" => value,
            "TB" => value * 1024.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> SizeNormalizer {
        SizeNormalizer::new().unwrap()
    }

    #[test]
    fn parses_each_unit() {
        let n = normalizer();
        assert!((n.to_gb("1.4 GB") - 1.4).abs() < 1e-12);
        assert!((n.to_gb("512 MB") - 0.5).abs() < 1e-12);
        assert!((n.to_gb("1048576 KB") - 1.0).abs() < 1e-12);
        assert!((n.to_gb("2 TB") - 2048.0).abs() < 1e-12);
    }

    #[test]
    fn unit_is_case_insensitive_and_spacing_optional() {
        let n = normalizer();
        assert!((n.to_gb("700mb") - 700.0 / 1024.0).abs() < 1e-12);
        assert!((n.to_gb("  3.5 gB  ") - 3.5).abs() < 1e-12);
        assert!((n.to_gb("10.2GB") - 10.2).abs() < 1e-12);
    }

    #[test]
    fn unknown_inputs_yield_zero() {
        let n = normalizer();
        assert_eq!(n.to_gb(""), 0.0);
        assert_eq!(n.to_gb("GB"), 0.0);
        assert_eq!(n.to_gb("large"), 0.0);
        assert_eq!(n.to_gb("1.2.3 GB"), 0.0);
        assert_eq!(n.to_gb(". GB"), 0.0);
    }

    #[test]
    fn unrecognized_unit_yields_zero() {
        let n = normalizer();
        assert_eq!(n.to_gb("4.7 GiB"), 0.0);
        assert_eq!(n.to_gb("100 bytes"), 0.0);
        assert_eq!(n.to_gb("1 PB"), 0.0);
    }
}
