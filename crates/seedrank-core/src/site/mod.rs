//! # Site Registry
//!
//! Maps a site identifier to the layout knowledge needed to turn that
//! site's scraped table cells into [`Listing`]s. Fetching and DOM
//! traversal happen elsewhere; this layer only sees cell text.
//!
//! Supporting a new index means adding a variant here. The scoring
//! engine never changes.

pub mod rarbg;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedrankError};
use crate::types::Listing;

/// A torrent index whose listing layout is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Rarbg,
}

impl Site {
    /// Every registered site.
    #[must_use]
    pub fn all() -> &'static [Site] {
        &[Site::Rarbg]
    }

    /// Looks a site up by name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `SeedrankError::UnsupportedSite` if no site has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|site| site.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SeedrankError::UnsupportedSite {
                name: name.to_string(),
            })
    }

    /// Canonical lowercase identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rarbg => "rarbg",
        }
    }

    /// Builds a listing from one search-result row's cell texts.
    ///
    /// # Errors
    ///
    /// Returns `SeedrankError::MalformedRow` if the row is too short for
    /// the site's layout.
    pub fn listing_from_cells(self, cells: &[&str]) -> Result<Listing> {
        let mut listing = match self {
            Self::Rarbg => rarbg::listing_from_cells(cells)?,
        };
        listing.site = self.name().to_string();
        Ok(listing)
    }

    /// Copies one detail-page `header: value` pair onto the listing.
    /// Headers the site does not use are ignored.
    pub fn apply_detail(self, listing: &mut Listing, header: &str, value: &str) {
        match self {
            Self::Rarbg => rarbg::apply_detail(listing, header, value),
        }
    }
}

impl FromStr for Site {
    type Err = SeedrankError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a scraped counter cell, treating anything non-numeric as zero.
pub(crate) fn parse_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}
