/// Release groups and uploaders known to publish clean, correctly
/// labelled releases.
pub const TRUSTED_UPLOADERS: &[&str] = &[
    "RARBG",
    "YTS",
    "ETRG",
    "Prof",
    "PMEDIA",
    "Wrath",
    "FGT",
    "SPARKS",
    "UTR",
    "PSA",
    "DON",
    "GalaxyRG",
    "GalaxyTV",
    "QxR",
    "Tigole",
    "CtrlHD",
    "NTb",
    "TBS",
    "RMTeam",
    "Judas",
    "SUSPENSE",
    "EBP",
    "icecracked",
    "DataDiva",
    "Accid",
    "1DNCreW",
    "bone111",
    "NikaNika",
    "Maxoverpower",
    "IONICBOII",
    "Petehollow",
    "Telly",
    "mkvCinemas",
    "TAoE",
    "prudence25",
];

/// Returns `true` if the uploader name contains any trusted entry,
/// ignoring case. Containment, not equality: `"TeamXYZ-PMEDIA"` matches
/// `"PMEDIA"`.
#[must_use]
pub fn is_trusted_uploader(uploader: &str) -> bool {
    if uploader.is_empty() {
        return false;
    }
    let uploader = uploader.to_lowercase();
    TRUSTED_UPLOADERS
        .iter()
        .any(|trusted| uploader.contains(&trusted.to_lowercase()))
}
