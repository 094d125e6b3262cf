pub mod attributes;
pub mod listing;
pub mod result;
pub mod score;

pub use attributes::{Attributes, AudioCodec, BitDepth, Container, Resolution, Source, VideoCodec};
pub use listing::{Category, Listing};
pub use result::{Evaluation, RankedListing};
pub use score::Score;
