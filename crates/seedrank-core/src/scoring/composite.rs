//! # Composite Scorer
//!
//! Classifies a listing once, runs every sub-score model over the result
//! and sums them.

use tracing::trace;

use crate::classify::{SizeNormalizer, classify_listing};
use crate::error::Result;
use crate::types::{Evaluation, Listing, Score};

use super::availability::score_availability;
use super::lookup::{score_codecs, score_resolution, score_source, score_uploader};
use super::size::score_size;

/// Scores listings. Holds only immutable compiled state, so one instance
/// can be shared across threads and reused for any number of batches.
pub struct Scorer {
    sizes: SizeNormalizer,
}

impl Scorer {
    /// Creates a new scorer.
    ///
    /// # Errors
    ///
    /// Returns `SeedrankError::RegexError` if the size pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            sizes: SizeNormalizer::new()?,
        })
    }

    /// Composite score for one listing.
    #[must_use]
    pub fn score(&self, listing: &Listing) -> Score {
        self.evaluate(listing).score
    }

    /// Scores a listing and keeps the derived attributes and size that
    /// produced the score.
    #[must_use]
    pub fn evaluate(&self, listing: &Listing) -> Evaluation {
        let attributes = classify_listing(listing);
        let size_gb = self.sizes.to_gb(&listing.size);

        let score = Score::new(
            score_size(
                size_gb,
                attributes.resolution,
                attributes.source,
                listing.content_category(),
            ),
            score_availability(listing.seeders, listing.leechers),
            score_resolution(attributes.resolution),
            score_source(attributes.source),
            score_codecs(&attributes),
            score_uploader(attributes.trusted),
        );

        trace!(
            name = %listing.name,
            size = score.size,
            availability = score.availability,
            resolution = score.resolution,
            source = score.source,
            codecs = score.codecs,
            uploader = score.uploader,
            total = score.total,
            "scored listing"
        );

        Evaluation {
            attributes,
            size_gb,
            score,
        }
    }

    /// Normalized size of a raw size string, in GB.
    #[must_use]
    pub fn size_gb(&self, raw: &str) -> f64 {
        self.sizes.to_gb(raw)
    }
}

/// Convenience function to score one listing with a fresh scorer.
///
/// Builds a new [`Scorer`] on every call, recompiling its size pattern.
/// When scoring more than one listing, create a [`Scorer`] once and reuse
/// it; its `score` cannot fail.
///
/// # Errors
///
/// Returns `SeedrankError::RegexError` if the scorer cannot be built.
pub fn score(listing: &Listing) -> Result<Score> {
    Ok(Scorer::new()?.score(listing))
}
