pub mod availability;
pub mod composite;
pub mod lookup;
pub mod size;

pub use availability::score_availability;
pub use composite::{Scorer, score};
pub use lookup::{score_codecs, score_resolution, score_source, score_uploader};
pub use size::score_size;
