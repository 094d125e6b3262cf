//! Size sub-score: how close a release's size is to what its quality tier
//! and source usually weigh.

use crate::types::score::MAX_SIZE;
use crate::types::{Category, Resolution, Source};

/// Score handed out when the size is known but the resolution is not.
pub const UNKNOWN_RESOLUTION_SCORE: f64 = 10.0;

/// Expected sizes (GB) for one resolution, keyed by source.
///
/// A `None` cell has no dedicated expectation and uses `other`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweetSpotRow {
    /// GB radius around the sweet spot scored on the gentle linear slope.
    pub tolerance: f64,
    pub imax: Option<f64>,
    pub bluray: f64,
    pub web: f64,
    pub cam: Option<f64>,
    pub other: f64,
}

impl SweetSpotRow {
    #[must_use]
    pub fn sweet_spot(&self, source: Source) -> f64 {
        match source {
            Source::Imax => self.imax.unwrap_or(self.other),
            Source::BluRay => self.bluray,
            Source::Web => self.web,
            Source::Cam => self.cam.unwrap_or(self.other),
            Source::Unknown => self.other,
        }
    }
}

/// Sweet-spot rows for the four known resolutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweetSpotTable {
    pub sd480: SweetSpotRow,
    pub hd720: SweetSpotRow,
    pub fhd1080: SweetSpotRow,
    pub uhd2160: SweetSpotRow,
}

impl SweetSpotTable {
    #[must_use]
    pub fn row(&self, resolution: Resolution) -> Option<&SweetSpotRow> {
        match resolution {
            Resolution::SD480 => Some(&self.sd480),
            Resolution::HD720 => Some(&self.hd720),
            Resolution::FHD1080 => Some(&self.fhd1080),
            Resolution::UHD2160 => Some(&self.uhd2160),
            Resolution::Unknown => None,
        }
    }
}

/// Single-film encodes.
pub const MOVIE_SWEET_SPOTS: SweetSpotTable = SweetSpotTable {
    sd480: SweetSpotRow {
        tolerance: 0.5,
        imax: None,
        bluray: 2.0,
        web: 1.0,
        cam: Some(0.7),
        other: 1.0,
    },
    hd720: SweetSpotRow {
        tolerance: 1.0,
        imax: Some(8.0),
        bluray: 6.0,
        web: 3.5,
        cam: Some(2.0),
        other: 4.5,
    },
    fhd1080: SweetSpotRow {
        tolerance: 2.0,
        imax: Some(12.0),
        bluray: 10.0,
        web: 7.0,
        cam: Some(3.0),
        other: 4.0,
    },
    uhd2160: SweetSpotRow {
        tolerance: 6.0,
        imax: Some(60.0),
        bluray: 50.0,
        web: 25.0,
        cam: None,
        other: 35.0,
    },
};

/// TV releases, which are often multi-episode packs.
pub const TV_SWEET_SPOTS: SweetSpotTable = SweetSpotTable {
    sd480: SweetSpotRow {
        tolerance: 2.0,
        imax: None,
        bluray: 5.0,
        web: 3.5,
        cam: Some(2.0),
        other: 2.5,
    },
    hd720: SweetSpotRow {
        tolerance: 3.5,
        imax: Some(12.0),
        bluray: 10.0,
        web: 8.0,
        cam: Some(3.5),
        other: 4.0,
    },
    fhd1080: SweetSpotRow {
        tolerance: 5.0,
        imax: Some(55.0),
        bluray: 30.0,
        web: 20.0,
        cam: Some(7.5),
        other: 10.0,
    },
    uhd2160: SweetSpotRow {
        tolerance: 10.0,
        imax: Some(100.0),
        bluray: 60.0,
        web: 30.0,
        cam: None,
        other: 30.0,
    },
};

/// Ideal size (GB) per resolution when the category is unknown.
#[must_use]
pub fn generic_ideal_size(resolution: Resolution) -> Option<f64> {
    match resolution {
        Resolution::SD480 => Some(1.0),
        Resolution::HD720 => Some(3.5),
        Resolution::FHD1080 => Some(10.0),
        Resolution::UHD2160 => Some(35.0),
        Resolution::Unknown => None,
    }
}

/// Scores a normalized size in `[0, 20]`.
///
/// `size_gb <= 0` means the size is unknown and scores 0.
#[must_use]
pub fn score_size(size_gb: f64, resolution: Resolution, source: Source, category: Category) -> f64 {
    if size_gb <= 0.0 {
        return 0.0;
    }

    let table = match category {
        Category::Movies => &MOVIE_SWEET_SPOTS,
        Category::Tv => &TV_SWEET_SPOTS,
        Category::Other => return score_generic_size(size_gb, resolution),
    };

    match table.row(resolution) {
        Some(row) => size_curve(size_gb, row.sweet_spot(source), row.tolerance, MAX_SIZE),
        None => score_generic_size(size_gb, resolution),
    }
}

/// Category-agnostic model: tolerance is half the ideal size.
#[must_use]
pub fn score_generic_size(size_gb: f64, resolution: Resolution) -> f64 {
    if size_gb <= 0.0 {
        return 0.0;
    }
    match generic_ideal_size(resolution) {
        Some(ideal) => size_curve(size_gb, ideal, ideal * 0.5, MAX_SIZE),
        None => UNKNOWN_RESOLUTION_SCORE,
    }
}

/// Sweet-spot-and-tolerance curve.
///
/// Inside the tolerance band the score slides linearly from 100% to 90%
/// of `max_score`. Past it, the remaining 90% decays exponentially with
/// the excess measured in multiples of the sweet spot, so large expected
/// sizes forgive more absolute gigabytes.
#[must_use]
pub fn size_curve(size_gb: f64, sweet_spot: f64, tolerance: f64, max_score: f64) -> f64 {
    if size_gb <= 0.0 || sweet_spot <= 0.0 {
        return 0.0;
    }

    let distance = (size_gb - sweet_spot).abs();
    if distance <= tolerance {
        let score = max_score * (1.0 - 0.1 * distance / tolerance);
        return score.min(max_score);
    }

    let excess = distance - tolerance;
    max_score * 0.9 * (-excess / sweet_spot).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn exact_sweet_spot_scores_full_marks() {
        let score = score_size(10.0, Resolution::FHD1080, Source::BluRay, Category::Movies);
        assert!((score - 20.0).abs() < EPS, "score={score}");
    }

    #[test]
    fn past_tolerance_decays_exponentially() {
        // tolerance 2.0, excess 1.0, sweet spot 10.0
        let score = score_size(13.0, Resolution::FHD1080, Source::BluRay, Category::Movies);
        let expected = 20.0 * 0.9 * (-0.1_f64).exp();
        assert!((score - expected).abs() < EPS);
        assert!((score - 16.29).abs() < 0.01, "score={score}");
    }

    #[test]
    fn tolerance_edge_is_ninety_percent() {
        let score = score_size(12.0, Resolution::FHD1080, Source::BluRay, Category::Movies);
        assert!((score - 18.0).abs() < EPS);
        let score = score_size(8.0, Resolution::FHD1080, Source::BluRay, Category::Movies);
        assert!((score - 18.0).abs() < EPS);
    }

    #[test]
    fn unknown_size_scores_zero() {
        for category in [Category::Movies, Category::Tv, Category::Other] {
            assert_eq!(score_size(0.0, Resolution::FHD1080, Source::Web, category), 0.0);
            assert_eq!(score_size(-1.0, Resolution::Unknown, Source::Web, category), 0.0);
        }
    }

    #[test]
    fn movie_table_values() {
        let t = &MOVIE_SWEET_SPOTS;
        assert_eq!(t.sd480.sweet_spot(Source::BluRay), 2.0);
        assert_eq!(t.sd480.sweet_spot(Source::Imax), 1.0);
        assert_eq!(t.sd480.sweet_spot(Source::Cam), 0.7);
        assert_eq!(t.hd720.sweet_spot(Source::Imax), 8.0);
        assert_eq!(t.hd720.sweet_spot(Source::Unknown), 4.5);
        assert_eq!(t.fhd1080.sweet_spot(Source::Web), 7.0);
        assert_eq!(t.fhd1080.sweet_spot(Source::Unknown), 4.0);
        assert_eq!(t.uhd2160.sweet_spot(Source::Imax), 60.0);
        assert_eq!(t.uhd2160.sweet_spot(Source::Cam), 35.0);
    }

    #[test]
    fn tv_table_values() {
        let t = &TV_SWEET_SPOTS;
        assert_eq!(t.sd480.sweet_spot(Source::Web), 3.5);
        assert_eq!(t.sd480.sweet_spot(Source::Unknown), 2.5);
        assert_eq!(t.hd720.sweet_spot(Source::Cam), 3.5);
        assert_eq!(t.fhd1080.sweet_spot(Source::Imax), 55.0);
        assert_eq!(t.fhd1080.sweet_spot(Source::Cam), 7.5);
        assert_eq!(t.uhd2160.sweet_spot(Source::Imax), 100.0);
        assert_eq!(t.uhd2160.sweet_spot(Source::Cam), 30.0);
        assert_eq!(t.uhd2160.tolerance, 10.0);
    }

    #[test]
    fn tv_tolerates_larger_packs() {
        // 25 GB of 1080p WEB: well past the movie band, inside the TV band
        let movie = score_size(25.0, Resolution::FHD1080, Source::Web, Category::Movies);
        let tv = score_size(25.0, Resolution::FHD1080, Source::Web, Category::Tv);
        assert!(tv > movie, "tv={tv}, movie={movie}");
        assert!((tv - 20.0 * (1.0 - 0.1 * 5.0 / 5.0)).abs() < EPS);
    }

    #[test]
    fn generic_model_uses_half_ideal_tolerance() {
        // 1080p ideal 10.0, tolerance 5.0
        let score = score_size(12.5, Resolution::FHD1080, Source::Web, Category::Other);
        assert!((score - 20.0 * (1.0 - 0.1 * 2.5 / 5.0)).abs() < EPS);

        let score = score_size(35.0, Resolution::UHD2160, Source::BluRay, Category::Other);
        assert!((score - 20.0).abs() < EPS);
    }

    #[test]
    fn unknown_resolution_is_flat_ten() {
        for category in [Category::Movies, Category::Tv, Category::Other] {
            let score = score_size(4.2, Resolution::Unknown, Source::Web, category);
            assert_eq!(score, UNKNOWN_RESOLUTION_SCORE);
        }
    }

    #[test]
    fn scores_stay_within_bounds() {
        for size in [0.1, 0.7, 1.0, 3.3, 9.9, 25.0, 80.0, 400.0] {
            for resolution in [
                Resolution::SD480,
                Resolution::HD720,
                Resolution::FHD1080,
                Resolution::UHD2160,
                Resolution::Unknown,
            ] {
                for source in [
                    Source::Imax,
                    Source::BluRay,
                    Source::Web,
                    Source::Cam,
                    Source::Unknown,
                ] {
                    for category in [Category::Movies, Category::Tv, Category::Other] {
                        let score = score_size(size, resolution, source, category);
                        assert!((0.0..=MAX_SIZE).contains(&score), "score={score}");
                    }
                }
            }
        }
    }

    #[test]
    fn larger_sweet_spots_decay_slower() {
        // same 5 GB excess past tolerance
        let small = size_curve(16.0, 10.0, 1.0, 20.0);
        let large = size_curve(56.0, 50.0, 1.0, 20.0);
        assert!(large > small);
    }
}
