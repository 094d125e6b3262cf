//! Availability sub-score from swarm counters.

use crate::types::score::MAX_AVAILABILITY;

/// Scores seeders/leechers in `[.., 30]`.
///
/// A tiered base curve on seeders is scaled by a seed/leech ratio
/// multiplier and then capped at 30. Zero seeders returns 0 outright, and
/// 100 or more seeders return 30 outright whatever the leecher count.
///
/// The lowest tier interpolates from a base of 5 rather than 0, so 1-4
/// seeders produce a base below 1.0, negative for 1-3 seeders. This is
/// kept as-is.
#[must_use]
pub fn score_availability(seeders: u32, leechers: u32) -> f64 {
    if seeders == 0 {
        return 0.0;
    }
    // flat ceiling: a low ratio never pulls a well-seeded swarm below max
    if seeders >= 100 {
        return MAX_AVAILABILITY;
    }

    let base = base_curve(seeders);
    let ratio = f64::from(seeders) / f64::from(leechers.max(1));

    (base * ratio_multiplier(ratio)).min(MAX_AVAILABILITY)
}

/// Piecewise seeders curve before the ratio adjustment.
#[must_use]
pub fn base_curve(seeders: u32) -> f64 {
    let s = f64::from(seeders);
    match seeders {
        0 => 0.0,
        100.. => 30.0,
        50..=99 => 25.0 + (s - 50.0) / 50.0 * 5.0,
        20..=49 => 20.0 + (s - 20.0) / 20.0 * 5.0,
        10..=19 => 12.0 + (s - 10.0) / 10.0 * 8.0,
        5..=9 => 4.0 + (s - 5.0) / 5.0 * 8.0,
        1..=4 => 1.0 + (s - 5.0) / 5.0 * 3.0,
    }
}

/// Multiplier for `seeders / max(leechers, 1)`.
#[must_use]
pub fn ratio_multiplier(ratio: f64) -> f64 {
    if ratio >= 3.0 {
        1.15
    } else if ratio >= 2.0 {
        1.10
    } else if ratio >= 1.0 {
        1.05
    } else if ratio >= 0.5 {
        1.00
    } else if ratio >= 0.2 {
        0.95
    } else {
        0.90
    }
}
