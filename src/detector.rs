//! Format detection over a positional source.

use std::io;
use std::path::Path;

use log::{debug, trace};
use sync_file::{RandomAccessFile, ReadAt};

use crate::error::DetectError;
use crate::format::ImageFormat;
use crate::signature::{match_prefix, PREFIX_LEN};

/// Detect the image format of `source` from its first [`PREFIX_LEN`] bytes.
///
/// Reads at offset 0 through [`ReadAt`], never through a seek cursor. Wrap files in
/// [`RandomAccessFile`] or [`SyncFile`](sync_file::SyncFile); the latter keeps its own
/// `Read`/`Seek` position, which detection leaves alone. The source is only borrowed.
///
/// # Errors
///
/// - [`DetectError::Read`] if the read fails.
/// - [`DetectError::InsufficientData`] if fewer than 4 bytes exist, even when those bytes
///   would start a known signature.
/// - [`DetectError::UnknownFormat`] if 4 bytes were read and no signature matches.
pub fn detect<R: ReadAt + ?Sized>(source: &R) -> Result<ImageFormat, DetectError> {
    let prefix = read_prefix(source)?;
    trace!("prefix bytes: {:02X?}", prefix);
    match match_prefix(&prefix) {
        Some(format) => {
            debug!("detected {} from prefix {:02X?}", format, prefix);
            Ok(format)
        }
        None => {
            debug!("no signature matches prefix {:02X?}", prefix);
            Err(DetectError::UnknownFormat)
        }
    }
}

/// Like [`detect`], but treats every failure other than an unknown format as fatal.
///
/// Returns `None` when the prefix was read but matched nothing.
///
/// # Panics
///
/// Panics on [`DetectError::Read`] and [`DetectError::InsufficientData`]. Only use this where
/// an unreadable source is an unrecoverable fault for the program.
pub fn detect_or_panic<R: ReadAt + ?Sized>(source: &R) -> Option<ImageFormat> {
    match detect(source) {
        Ok(format) => Some(format),
        Err(DetectError::UnknownFormat) => None,
        Err(err) => panic!("{}", err),
    }
}

/// Open `path` read-only and run [`detect`] on it. An open failure is a [`DetectError::Read`].
pub fn detect_path(path: impl AsRef<Path>) -> Result<ImageFormat, DetectError> {
    let file = RandomAccessFile::open(path.as_ref())?;
    detect(&file)
}

/// Fill the prefix buffer from offset 0, continuing after short reads until the source
/// reports no more data.
fn read_prefix<R: ReadAt + ?Sized>(source: &R) -> Result<[u8; PREFIX_LEN], DetectError> {
    let mut buf = [0u8; PREFIX_LEN];
    let mut filled = 0;
    while filled < PREFIX_LEN {
        match source.read_at(&mut buf[filled..], filled as u64) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(DetectError::Read(e)),
        }
    }
    if filled < PREFIX_LEN {
        return Err(DetectError::InsufficientData { read: filled });
    }
    Ok(buf)
}
