use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound of the size sub-score.
pub const MAX_SIZE: f64 = 20.0;
/// Upper bound of the availability sub-score.
pub const MAX_AVAILABILITY: f64 = 30.0;
/// Upper bound of the resolution sub-score.
pub const MAX_RESOLUTION: f64 = 20.0;
/// Upper bound of the source sub-score.
pub const MAX_SOURCE: f64 = 15.0;
/// Upper bound of the codecs sub-score (5 video + 1.5 audio + 0.5 bit depth).
pub const MAX_CODECS: f64 = 7.0;
/// Upper bound of the uploader sub-score.
pub const MAX_UPLOADER: f64 = 3.0;
/// Scale the total is displayed against ("X / 100").
///
/// This is a display scale only: the sub-score bounds add up to 95, so no
/// listing reaches it.
pub const MAX_TOTAL: f64 = 100.0;

/// Composite score for one listing.
///
/// Built once per scoring pass and never mutated; `total` is always the
/// plain sum of the six sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub size: f64,
    pub availability: f64,
    pub resolution: f64,
    pub source: f64,
    pub codecs: f64,
    pub uploader: f64,
    pub total: f64,
}

impl Score {
    /// Assembles a score from its already-bounded parts.
    #[must_use]
    pub fn new(
        size: f64,
        availability: f64,
        resolution: f64,
        source: f64,
        codecs: f64,
        uploader: f64,
    ) -> Self {
        Self {
            size,
            availability,
            resolution,
            source,
            codecs,
            uploader,
            total: size + availability + resolution + source + codecs + uploader,
        }
    }

    /// `(label, value, max)` for each sub-score, in display order.
    #[must_use]
    pub fn breakdown(&self) -> [(&'static str, f64, f64); 6] {
        [
            ("size", self.size, MAX_SIZE),
            ("availability", self.availability, MAX_AVAILABILITY),
            ("resolution", self.resolution, MAX_RESOLUTION),
            ("source", self.source, MAX_SOURCE),
            ("codecs", self.codecs, MAX_CODECS),
            ("uploader", self.uploader, MAX_UPLOADER),
        ]
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} / {}", self.total, MAX_TOTAL)
    }
}
