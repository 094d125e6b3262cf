use thiserror::Error;

/// Errors that can occur while building Seedrank components.
///
/// Classification and scoring themselves never fail; these cover
/// construction and the site-row boundary only.
#[derive(Debug, Error)]
pub enum SeedrankError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// No site implementation is registered under this name.
    #[error("unsupported site: {name:?}")]
    UnsupportedSite {
        /// The site name that was requested.
        name: String,
    },

    /// A scraped table row did not have enough cells for the site layout.
    #[error("malformed {site} row: expected at least {expected} cells, found {found}")]
    MalformedRow {
        /// Site whose layout was applied.
        site: String,
        /// Minimum cell count the layout needs.
        expected: usize,
        /// Cell count actually present.
        found: usize,
    },
}

/// Result type alias for Seedrank operations.
pub type Result<T> = std::result::Result<T, SeedrankError>;
