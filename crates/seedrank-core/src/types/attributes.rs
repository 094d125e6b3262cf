use std::fmt;

use serde::{Deserialize, Serialize};

/// Video resolution tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// 2160p — Ultra HD / 4K
    #[serde(rename = "2160P")]
    UHD2160,
    /// 1080p — Full HD
    #[serde(rename = "1080P")]
    FHD1080,
    /// 720p — High Definition
    #[serde(rename = "720P")]
    HD720,
    /// 480p — Standard Definition
    #[serde(rename = "480P")]
    SD480,
    #[default]
    Unknown,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UHD2160 => write!(f, "2160P"),
            Self::FHD1080 => write!(f, "1080P"),
            Self::HD720 => write!(f, "720P"),
            Self::SD480 => write!(f, "480P"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Release source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "IMAX")]
    Imax,
    #[serde(rename = "BLURAY")]
    BluRay,
    #[serde(rename = "WEB")]
    Web,
    #[serde(rename = "CAM")]
    Cam,
    #[default]
    Unknown,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imax => write!(f, "IMAX"),
            Self::BluRay => write!(f, "BLURAY"),
            Self::Web => write!(f, "WEB"),
            Self::Cam => write!(f, "CAM"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Video codec family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoCodec {
    AV1,
    /// HEVC / H.265 / x265. Bare "avc" also lands here.
    #[serde(rename = "HEVC/x265")]
    HEVC,
    #[serde(rename = "x264")]
    H264,
    #[default]
    Unknown,
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AV1 => write!(f, "AV1"),
            Self::HEVC => write!(f, "HEVC/x265"),
            Self::H264 => write!(f, "x264"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Audio codec family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCodec {
    #[serde(rename = "Dolby Atmos")]
    Atmos,
    /// Lossless tracks: DTS-HD MA and Dolby TrueHD.
    #[serde(rename = "DTS-HD/TrueHD")]
    Lossless,
    DTS,
    EAC3,
    AC3,
    AAC,
    #[serde(rename = "OPUS")]
    Opus,
    MP3,
    #[default]
    Unknown,
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atmos => write!(f, "Dolby Atmos"),
            Self::Lossless => write!(f, "DTS-HD/TrueHD"),
            Self::DTS => write!(f, "DTS"),
            Self::EAC3 => write!(f, "EAC3"),
            Self::AC3 => write!(f, "AC3"),
            Self::AAC => write!(f, "AAC"),
            Self::Opus => write!(f, "OPUS"),
            Self::MP3 => write!(f, "MP3"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// File container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    #[serde(rename = "Matroska/MKV")]
    Matroska,
    MP4,
    #[default]
    Unknown,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matroska => write!(f, "Matroska/MKV"),
            Self::MP4 => write!(f, "MP4"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Colour bit depth. There is no unknown state: anything not
/// recognisably 10-bit is treated as 8-bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitDepth {
    #[serde(rename = "10-bit")]
    Ten,
    #[default]
    #[serde(rename = "8-bit")]
    Eight,
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ten => write!(f, "10-bit"),
            Self::Eight => write!(f, "8-bit"),
        }
    }
}

/// Technical attributes derived from a listing's free-text fields.
///
/// Every field always holds a value; the `Default` is the fully
/// "unknown" classification (Unknown everywhere, 8-bit, untrusted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub resolution: Resolution,
    pub source: Source,
    pub video_codec: VideoCodec,
    pub audio_codec: AudioCodec,
    pub container: Container,
    pub bit_depth: BitDepth,
    /// Whether the uploader matched the trusted release-group list.
    pub trusted: bool,
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.resolution,
            self.source,
            self.video_codec,
            self.audio_codec,
            self.container,
            self.bit_depth
        )?;
        if self.trusted {
            write!(f, " (trusted)")?;
        }
        Ok(())
    }
}
