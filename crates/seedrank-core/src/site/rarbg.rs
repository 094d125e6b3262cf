//! RARBG search-table layout.
//!
//! Cells: 0 icon, 1 name, 2 category, 3 upload date, 4 size, 5 seeders,
//! 6 leechers, 7 uploader.

use crate::error::{Result, SeedrankError};
use crate::types::Listing;

use super::parse_count;

/// Minimum number of cells in a search-result row.
pub const ROW_CELLS: usize = 8;

pub(crate) fn listing_from_cells(cells: &[&str]) -> Result<Listing> {
    if cells.len() < ROW_CELLS {
        return Err(SeedrankError::MalformedRow {
            site: "rarbg".into(),
            expected: ROW_CELLS,
            found: cells.len(),
        });
    }

    // "Movies/x264/1080" -> "Movies"
    let category = cells[2]
        .trim()
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string();

    Ok(Listing {
        name: cells[1].trim().to_string(),
        category,
        upload_date: cells[3].trim().to_string(),
        size: cells[4].trim().to_string(),
        seeders: parse_count(cells[5]),
        leechers: parse_count(cells[6]),
        uploader: cells[7].trim().to_string(),
        ..Listing::default()
    })
}

pub(crate) fn apply_detail(listing: &mut Listing, header: &str, value: &str) {
    let value = value.trim();
    match header.trim() {
        "Description:" => listing.description = value.to_string(),
        "Language:" => listing.language = value.to_string(),
        "Downloads:" => listing.downloads = parse_count(value),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_row() {
        let cells = [
            "",
            "  Movie.Name.2019.1080p.BLURAY.x264-GROUP ",
            "Movies/x264/1080",
            "2019-07-01 10:00:00",
            "10.2 GB",
            "120",
            "10",
            "GROUP",
        ];
        let listing = listing_from_cells(&cells).unwrap();
        assert_eq!(listing.name, "Movie.Name.2019.1080p.BLURAY.x264-GROUP");
        assert_eq!(listing.category, "Movies");
        assert_eq!(listing.upload_date, "2019-07-01 10:00:00");
        assert_eq!(listing.size, "10.2 GB");
        assert_eq!(listing.seeders, 120);
        assert_eq!(listing.leechers, 10);
        assert_eq!(listing.uploader, "GROUP");
        assert!(listing.description.is_empty());
    }

    #[test]
    fn blank_cells_default() {
        let cells = ["", "Name", "", "", "", "", "", ""];
        let listing = listing_from_cells(&cells).unwrap();
        assert_eq!(listing.category, "");
        assert_eq!(listing.seeders, 0);
        assert_eq!(listing.leechers, 0);
    }

    #[test]
    fn short_row_is_malformed() {
        let err = listing_from_cells(&["", "Name", "Movies"]).unwrap_err();
        assert!(matches!(
            err,
            SeedrankError::MalformedRow {
                expected: 8,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn detail_headers() {
        let mut listing = Listing::new("x");
        apply_detail(&mut listing, "Description:", " HEVC 10bit Atmos ");
        apply_detail(&mut listing, "Language:", "English");
        apply_detail(&mut listing, "Downloads:", "1532");
        apply_detail(&mut listing, "Rating:", "9/10");

        assert_eq!(listing.description, "HEVC 10bit Atmos");
        assert_eq!(listing.language, "English");
        assert_eq!(listing.downloads, 1532);
    }
}
