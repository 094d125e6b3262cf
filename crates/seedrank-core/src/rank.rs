//! # Ranking Pipeline
//!
//! Scores a batch of listings and orders them best-first.

use tracing::debug;

use crate::error::Result;
use crate::scoring::Scorer;
use crate::types::{Listing, RankedListing};

/// Configuration for the ranking pipeline.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Keep only the best `limit` listings after sorting.
    pub limit: Option<usize>,
    /// Whether listings with zero seeders stay in the output.
    pub include_dead: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            limit: None,
            include_dead: true,
        }
    }
}

impl RankConfig {
    /// Create a new ranking configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncate the ranking to the top `limit` entries.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Keep or drop listings nobody is seeding.
    pub fn with_dead(mut self, include_dead: bool) -> Self {
        self.include_dead = include_dead;
        self
    }
}

/// Scores and sorts batches of listings.
pub struct Ranker {
    config: RankConfig,
    scorer: Scorer,
}

impl Ranker {
    /// Create a new ranker with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `SeedrankError::RegexError` if the scorer cannot be built.
    pub fn new(config: RankConfig) -> Result<Self> {
        Ok(Self {
            config,
            scorer: Scorer::new()?,
        })
    }

    /// Create a new ranker with default configuration.
    pub fn default() -> Result<Self> {
        Self::new(RankConfig::default())
    }

    /// Scores every listing and returns them sorted by descending total.
    ///
    /// The sort is stable: listings with equal totals keep their input order.
    pub fn rank(&self, listings: Vec<Listing>) -> Vec<RankedListing> {
        let batch_size = listings.len();

        let mut scored: Vec<_> = listings
            .into_iter()
            .filter(|listing| self.config.include_dead || !listing.is_dead())
            .map(|listing| {
                let evaluation = self.scorer.evaluate(&listing);
                (listing, evaluation)
            })
            .collect();

        scored.sort_by(|(_, a), (_, b)| b.score.total.total_cmp(&a.score.total));

        if let Some(limit) = self.config.limit {
            scored.truncate(limit);
        }

        let ranked: Vec<RankedListing> = scored
            .into_iter()
            .enumerate()
            .map(|(i, (listing, evaluation))| RankedListing::new(i + 1, listing, evaluation))
            .collect();

        debug!(
            batch = batch_size,
            ranked = ranked.len(),
            best = ?ranked.first().map(|r| r.score.total),
            "ranked listings"
        );

        ranked
    }

    /// The scorer this ranker uses.
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Get the ranking configuration.
    pub fn config(&self) -> &RankConfig {
        &self.config
    }
}

/// Convenience function to rank a batch with default settings.
///
/// Builds a new [`Ranker`] on every call. Callers ranking repeatedly should
/// keep one [`Ranker`] around; its `rank` cannot fail.
///
/// # Errors
///
/// Returns `SeedrankError::RegexError` if the scorer cannot be built.
pub fn rank(listings: Vec<Listing>) -> Result<Vec<RankedListing>> {
    Ok(Ranker::default()?.rank(listings))
}
