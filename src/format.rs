//! Image format tags.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::signature::{Signature, SIGNATURES};

/// Image file format recognized by this crate.
///
/// The string form of each variant is its lowercase short name (`"jpg"`, `"png"`, ...),
/// usable directly as a file extension or log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageFormat {
    Jpg,
    Png,
    Bmp,
    Gif,
    /// Declared but not detectable: no signature is registered.
    Avif,
    /// Declared but not detectable: no signature is registered.
    Webp,
}

impl ImageFormat {
    /// Every tag, in declaration order.
    pub const ALL: [ImageFormat; 6] = [
        ImageFormat::Jpg,
        ImageFormat::Png,
        ImageFormat::Bmp,
        ImageFormat::Gif,
        ImageFormat::Avif,
        ImageFormat::Webp,
    ];

    /// Lowercase short name (e.g. "jpg", "webp").
    pub const fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Gif => "gif",
            ImageFormat::Avif => "avif",
            ImageFormat::Webp => "webp",
        }
    }

    /// Preferred file extension; same as [`as_str`](Self::as_str).
    #[inline]
    pub const fn extension(self) -> &'static str {
        self.as_str()
    }

    /// IANA media type.
    pub const fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Avif => "image/avif",
            ImageFormat::Webp => "image/webp",
        }
    }

    /// Map a file extension (without the dot, any case) to a format.
    /// `jpeg` and `jpe` are accepted for JPEG.
    pub fn from_extension(ext: &str) -> Option<ImageFormat> {
        let ext = ext.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "jpe" => Some(ImageFormat::Jpg),
            "png" => Some(ImageFormat::Png),
            "bmp" => Some(ImageFormat::Bmp),
            "gif" => Some(ImageFormat::Gif),
            "avif" => Some(ImageFormat::Avif),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    /// Signature table entry for this format; `None` for AVIF and WEBP.
    pub fn signature(self) -> Option<&'static Signature> {
        SIGNATURES.iter().find(|s| s.format == self)
    }

    /// Whether content detection can ever return this format.
    #[inline]
    pub fn is_detectable(self) -> bool {
        self.signature().is_some()
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not one of the format tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized image format tag: {0:?}")]
pub struct ParseFormatError(pub String);

impl FromStr for ImageFormat {
    type Err = ParseFormatError;

    /// Parses the exact short name; use [`ImageFormat::from_extension`] for aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names() {
        let names: Vec<&str> = ImageFormat::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["jpg", "png", "bmp", "gif", "avif", "webp"]);
    }

    #[test]
    fn display_matches_as_str() {
        for f in ImageFormat::ALL {
            assert_eq!(f.to_string(), f.as_str());
            assert_eq!(f.extension(), f.as_str());
        }
    }

    #[test]
    fn parse_round_trips_short_names() {
        for f in ImageFormat::ALL {
            assert_eq!(f.as_str().parse::<ImageFormat>(), Ok(f));
        }
        assert!("jpeg".parse::<ImageFormat>().is_err());
        assert!("PNG".parse::<ImageFormat>().is_err());
        assert!("".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn extension_aliases() {
        assert_eq!(ImageFormat::from_extension("JPEG"), Some(ImageFormat::Jpg));
        assert_eq!(ImageFormat::from_extension("jpe"), Some(ImageFormat::Jpg));
        assert_eq!(ImageFormat::from_extension("Png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("tiff"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
    }

    #[test]
    fn avif_and_webp_have_no_signature() {
        assert!(!ImageFormat::Avif.is_detectable());
        assert!(!ImageFormat::Webp.is_detectable());
        assert!(ImageFormat::Jpg.is_detectable());
        assert!(ImageFormat::Gif.is_detectable());
    }
}
