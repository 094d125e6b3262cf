//! # Seedrank Core
//!
//! Classification and scoring engine for scraped torrent listings. Turns
//! noisy release names and descriptions into technical attributes, then
//! combines those with size and swarm counters into a single comparable
//! score out of 100 with every sub-score kept for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use seedrank_core::{Listing, Ranker, Resolution, Source};
//!
//! let ranker = Ranker::default().unwrap();
//! let listing = Listing::new("Movie.Name.2019.1080p.BLURAY.x264-GROUP")
//!     .with_description("TrueHD Atmos 10bit")
//!     .with_category("Movies")
//!     .with_size("10.2 GB")
//!     .with_peers(120, 10);
//!
//! let ranked = ranker.rank(vec![listing]);
//! assert_eq!(ranked[0].attributes.resolution, Resolution::FHD1080);
//! assert_eq!(ranked[0].attributes.source, Source::BluRay);
//! assert_eq!(ranked[0].score.to_string(), "90.30 / 100");
//! ```
pub mod classify;
pub mod error;
pub mod rank;
pub mod scoring;
pub mod site;
pub mod types;

// Re-export primary API
pub use classify::{SizeNormalizer, classify, classify_listing, is_trusted_uploader};
pub use error::{Result, SeedrankError};
pub use rank::{RankConfig, Ranker, rank};
pub use scoring::{Scorer, score};
pub use site::Site;
pub use types::{
    Attributes, AudioCodec, BitDepth, Category, Container, Evaluation, Listing, RankedListing,
    Resolution, Score, Source, VideoCodec,
};
