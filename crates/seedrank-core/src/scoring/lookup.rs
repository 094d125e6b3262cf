//! Table-driven sub-scores: resolution, source, codecs and uploader.

use crate::types::score::MAX_UPLOADER;
use crate::types::{Attributes, AudioCodec, BitDepth, Resolution, Source, VideoCodec};

/// Resolution sub-score (max 20).
///
/// 1080p outranks 2160p here on purpose: it is the tier most people want.
/// 4K content usually makes that up through its size sub-score.
#[must_use]
pub fn score_resolution(resolution: Resolution) -> f64 {
    match resolution {
        Resolution::UHD2160 => 15.0,
        Resolution::FHD1080 => 20.0,
        Resolution::HD720 => 10.0,
        Resolution::SD480 => 5.0,
        Resolution::Unknown => 8.0,
    }
}

/// Source sub-score (max 15). Unknown is scored like WEB.
#[must_use]
pub fn score_source(source: Source) -> f64 {
    match source {
        Source::Imax => 12.0,
        Source::BluRay => 15.0,
        Source::Web => 10.0,
        Source::Cam => 5.0,
        Source::Unknown => 10.0,
    }
}

/// Video part of the codecs sub-score (max 5).
#[must_use]
pub fn score_video_codec(codec: VideoCodec) -> f64 {
    match codec {
        VideoCodec::AV1 => 5.0,
        VideoCodec::HEVC => 4.5,
        VideoCodec::H264 => 3.5,
        VideoCodec::Unknown => 2.0,
    }
}

/// Audio part of the codecs sub-score (max 1.5).
#[must_use]
pub fn score_audio_codec(codec: AudioCodec) -> f64 {
    match codec {
        AudioCodec::Atmos => 1.5,
        AudioCodec::Lossless => 1.4,
        AudioCodec::DTS => 1.2,
        AudioCodec::EAC3 => 1.1,
        AudioCodec::AC3 => 1.0,
        AudioCodec::AAC => 0.9,
        AudioCodec::Opus => 0.8,
        AudioCodec::MP3 => 0.6,
        AudioCodec::Unknown => 0.5,
    }
}

/// Bit-depth part of the codecs sub-score (max 0.5).
#[must_use]
pub fn score_bit_depth(bit_depth: BitDepth) -> f64 {
    match bit_depth {
        BitDepth::Ten => 0.5,
        BitDepth::Eight => 0.2,
    }
}

/// Codecs sub-score (max 7): video + audio + bit depth.
#[must_use]
pub fn score_codecs(attributes: &Attributes) -> f64 {
    score_video_codec(attributes.video_codec)
        + score_audio_codec(attributes.audio_codec)
        + score_bit_depth(attributes.bit_depth)
}

/// Uploader sub-score: all or nothing.
#[must_use]
pub fn score_uploader(trusted: bool) -> f64 {
    if trusted { MAX_UPLOADER } else { 0.0 }
}
