use std::fmt;

use serde::{Deserialize, Serialize};

/// One scraped torrent entry, exactly as the fetch layer produced it.
///
/// Absent strings are empty and absent counters are zero; nothing here
/// is normalized. Scoring reads the first seven fields; the rest are
/// carried through for front ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// Release name as shown in the index.
    pub name: String,

    /// Free-text description / metainfo from the detail page.
    pub description: String,

    /// Raw size text, e.g. `"1.4 GB"`.
    pub size: String,

    pub seeders: u32,
    pub leechers: u32,

    /// Uploader or release group name.
    pub uploader: String,

    /// Content category label, e.g. `"Movies"` or `"TV"`.
    pub category: String,

    pub href: String,
    pub magnet_link: String,
    pub upload_date: String,
    pub language: String,
    pub downloads: u32,

    /// Site the listing was scraped from.
    pub site: String,
}

impl Listing {
    /// Creates a listing with only a name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    #[must_use]
    pub fn with_peers(mut self, seeders: u32, leechers: u32) -> Self {
        self.seeders = seeders;
        self.leechers = leechers;
        self
    }

    #[must_use]
    pub fn with_uploader(mut self, uploader: impl Into<String>) -> Self {
        self.uploader = uploader.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// The parsed content category.
    #[must_use]
    pub fn content_category(&self) -> Category {
        Category::from_label(&self.category)
    }

    /// Returns `true` if nobody is seeding.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.seeders == 0
    }
}

/// Content category driving size expectations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Movies,
    Tv,
    #[default]
    Other,
}

impl Category {
    /// Parses a free-text category label.
    ///
    /// Containment, case-insensitive, "movies" before "tv".
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("movies") {
            Self::Movies
        } else if lower.contains("tv") {
            Self::Tv
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movies => write!(f, "Movies"),
            Self::Tv => write!(f, "TV"),
            Self::Other => write!(f, "Other"),
        }
    }
}
