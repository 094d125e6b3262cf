use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::listing::Listing;
use super::score::Score;

/// The scorer's working view of one listing: what was derived from it
/// and what it scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub attributes: Attributes,

    /// Normalized size in GB; `0.0` means the size text was not understood.
    pub size_gb: f64,

    pub score: Score,
}

/// A listing in its final ranked position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedListing {
    /// 1-based position after sorting.
    pub rank: usize,
    pub listing: Listing,
    pub attributes: Attributes,
    pub size_gb: f64,
    pub score: Score,
}

impl RankedListing {
    #[must_use]
    pub fn new(rank: usize, listing: Listing, evaluation: Evaluation) -> Self {
        Self {
            rank,
            listing,
            attributes: evaluation.attributes,
            size_gb: evaluation.size_gb,
            score: evaluation.score,
        }
    }
}

impl std::fmt::Display for RankedListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} [{}] {:.2} GB, {}",
            self.rank, self.listing.name, self.attributes, self.size_gb, self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Resolution;

    #[test]
    fn ranked_listing_display() {
        let evaluation = Evaluation {
            attributes: Attributes {
                resolution: Resolution::FHD1080,
                ..Attributes::default()
            },
            size_gb: 2.5,
            score: Score::new(10.0, 20.0, 20.0, 10.0, 3.0, 0.0),
        };
        let ranked = RankedListing::new(1, Listing::new("Movie.1080p"), evaluation);
        let shown = ranked.to_string();
        assert!(shown.starts_with("#1 Movie.1080p [1080P"));
        assert!(shown.contains("2.50 GB"));
        assert!(shown.ends_with("63.00 / 100"));
    }

    #[test]
    fn ranked_listing_serializes() {
        let evaluation = Evaluation {
            attributes: Attributes::default(),
            size_gb: 0.0,
            score: Score::new(0.0, 0.0, 8.0, 10.0, 2.5, 0.0),
        };
        let ranked = RankedListing::new(3, Listing::new("x"), evaluation);
        let json = serde_json::to_string(&ranked).unwrap();
        assert!(json.contains("\"rank\":3"));
        let back: RankedListing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ranked);
    }
}
