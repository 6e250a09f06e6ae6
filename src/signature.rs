//! Magic-byte signature table.
//!
//! Entries are checked in table order and the first full match wins. Every signature
//! is anchored at offset 0 and no longer than [`PREFIX_LEN`].

use crate::format::ImageFormat;

/// Number of bytes read from the start of a source before matching.
pub const PREFIX_LEN: usize = 4;

/// JPEG SOI marker.
pub const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8];
/// BMP "BM".
pub const BMP_MAGIC: &[u8] = &[0x42, 0x4D];
/// First four bytes of the PNG signature ("\x89PNG").
pub const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
/// "GIF8", shared by GIF87a and GIF89a.
pub const GIF_MAGIC: &[u8] = &[0x47, 0x49, 0x46, 0x38];

/// Expected leading bytes for one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub format: ImageFormat,
    pub magic: &'static [u8],
}

impl Signature {
    /// Exact byte comparison of the leading `magic.len()` bytes of `prefix`.
    #[inline]
    pub fn matches(&self, prefix: &[u8; PREFIX_LEN]) -> bool {
        prefix.starts_with(self.magic)
    }
}

/// Signatures in priority order. AVIF and WEBP have no entry.
pub static SIGNATURES: [Signature; 4] = [
    Signature {
        format: ImageFormat::Jpg,
        magic: JPEG_MAGIC,
    },
    Signature {
        format: ImageFormat::Bmp,
        magic: BMP_MAGIC,
    },
    Signature {
        format: ImageFormat::Png,
        magic: PNG_MAGIC,
    },
    Signature {
        format: ImageFormat::Gif,
        magic: GIF_MAGIC,
    },
];

/// First format whose signature matches `prefix`.
#[inline]
pub fn match_prefix(prefix: &[u8; PREFIX_LEN]) -> Option<ImageFormat> {
    SIGNATURES
        .iter()
        .find(|sig| sig.matches(prefix))
        .map(|sig| sig.format)
}
