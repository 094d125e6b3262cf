//! # Attribute Classifier
//!
//! Turns a listing's name and description into [`Attributes`].
//!
//! Matching is plain case-insensitive substring containment against the
//! whole text, checked in a fixed precedence order where the first hit
//! wins. There is no tokenization, so a title that happens to contain
//! "av1" or "cam" inside a longer word will be picked up.

pub mod size;
pub mod uploader;

use crate::types::{
    Attributes, AudioCodec, BitDepth, Container, Listing, Resolution, Source, VideoCodec,
};

pub use size::SizeNormalizer;
pub use uploader::{TRUSTED_UPLOADERS, is_trusted_uploader};

/// Classifies a release from its name and description.
///
/// Total: any input, including empty strings, yields fully populated
/// attributes. `trusted` is left `false` since no uploader is known here;
/// see [`Attributes::with_uploader`] and [`classify_listing`].
#[must_use]
pub fn classify(name: &str, description: &str) -> Attributes {
    let name = name.to_lowercase();
    let description = description.to_lowercase();

    let video_codec = match video_codec(&description) {
        VideoCodec::Unknown => video_codec(&name),
        found => found,
    };

    Attributes {
        resolution: resolution(&name),
        source: source(&name),
        video_codec,
        audio_codec: audio_codec(&description),
        container: container(&name, &description),
        bit_depth: bit_depth(&description),
        trusted: false,
    }
}

/// Classifies a listing, including the trusted-uploader flag.
#[must_use]
pub fn classify_listing(listing: &Listing) -> Attributes {
    classify(&listing.name, &listing.description).with_uploader(&listing.uploader)
}

impl Attributes {
    /// Sets `trusted` from the uploader name.
    #[must_use]
    pub fn with_uploader(mut self, uploader: &str) -> Self {
        self.trusted = is_trusted_uploader(uploader);
        self
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

// All helpers below expect lowercased input.

fn resolution(name: &str) -> Resolution {
    if contains_any(name, &["2160p", "4k", "uhd"]) {
        Resolution::UHD2160
    } else if contains_any(name, &["1080p", "fhd"]) {
        Resolution::FHD1080
    } else if name.contains("720p") {
        Resolution::HD720
    } else if contains_any(name, &["480p", "sd"]) {
        Resolution::SD480
    } else {
        Resolution::Unknown
    }
}

fn source(name: &str) -> Source {
    if name.contains("imax") {
        Source::Imax
    } else if contains_any(name, &["bluray", "blu-ray", "bdremux", "bdrip"]) {
        Source::BluRay
    } else if contains_any(name, &["webrip", "web-dl", "web", "amzn", "nf", "hmax"]) {
        Source::Web
    } else if contains_any(name, &["cam", "camrip"]) {
        Source::Cam
    } else {
        Source::Unknown
    }
}

/// HEVC spellings are checked before x264 and AV1, so text naming several
/// codecs resolves to the first group in this order.
fn video_codec(text: &str) -> VideoCodec {
    if contains_any(text, &["hevc", "x265", "h265", "avc"]) {
        VideoCodec::HEVC
    } else if contains_any(text, &["x264", "h264", "h.264"]) {
        VideoCodec::H264
    } else if text.contains("av1") {
        VideoCodec::AV1
    } else {
        VideoCodec::Unknown
    }
}

fn audio_codec(text: &str) -> AudioCodec {
    if text.contains("atmos") {
        AudioCodec::Atmos
    } else if contains_any(text, &["dts-hd", "truehd"]) {
        AudioCodec::Lossless
    } else if text.contains("dts") {
        AudioCodec::DTS
    } else if text.contains("aac") {
        AudioCodec::AAC
    } else if text.contains("opus") {
        AudioCodec::Opus
    } else if text.contains("mp3") {
        AudioCodec::MP3
    } else if contains_any(text, &["eac3", "ddp"]) {
        AudioCodec::EAC3
    } else if contains_any(text, &["ac3", "dd5.1"]) {
        AudioCodec::AC3
    } else {
        AudioCodec::Unknown
    }
}

fn container(name: &str, description: &str) -> Container {
    if description.contains("matroska") || name.contains("mkv") {
        Container::Matroska
    } else if name.contains(".mp4") {
        Container::MP4
    } else {
        Container::Unknown
    }
}

fn bit_depth(description: &str) -> BitDepth {
    if contains_any(description, &["10bit", "10-bit", "hdr", "dolby vision"]) {
        BitDepth::Ten
    } else {
        BitDepth::Eight
    }
}
