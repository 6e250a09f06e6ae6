//! # imgff
//!
//! Identify the format of an image file from its content instead of its extension.
//!
//! Detection reads the first 4 bytes of a source with a positional read ([`ReadAt`] from
//! `sync_file`, re-exported here) and compares them, in a fixed order, against a small
//! table of magic numbers. The first full match wins.
//!
//! ## Supported formats
//!
//! | Tag    | Signature                 |
//! |--------|---------------------------|
//! | `jpg`  | `FF D8`                   |
//! | `bmp`  | `42 4D` ("BM")            |
//! | `png`  | `89 50 4E 47` ("\x89PNG") |
//! | `gif`  | `47 49 46 38` ("GIF8")    |
//! | `avif` | none yet, never detected  |
//! | `webp` | none yet, never detected  |
//!
//! ## Example
//!
//! ```no_run
//! use imgff::{detect, DetectError, ImageFormat};
//!
//! let file = imgff::RandomAccessFile::open("photo.jpg").unwrap();
//! match detect(&file) {
//!     Ok(ImageFormat::Jpg) => println!("jpeg decoder"),
//!     Ok(other) => println!("{} decoder", other),
//!     Err(DetectError::UnknownFormat) => println!("not an image we know"),
//!     Err(e) => eprintln!("cannot read: {}", e),
//! }
//! ```
//!
//! In-memory buffers work the same way:
//!
//! ```
//! assert_eq!(imgff::detect(&b"GIF89a"[..]).unwrap(), imgff::ImageFormat::Gif);
//! assert!(imgff::detect(&[0xFFu8, 0xD8][..]).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize` for [`ImageFormat`] and the report types.
//! - `parallel`: [`inspect_paths`] runs on rayon's global pool.
//! - `cli`: the `imgff` binary (scan files or directories, text or JSON output).

mod error;
mod format;
mod report;
pub mod batch;
pub mod detector;
pub mod signature;

pub use batch::{inspect_paths, BatchItem};
pub use detector::{detect, detect_or_panic, detect_path};
pub use error::DetectError;
pub use format::{ImageFormat, ParseFormatError};
pub use report::{inspect_path, ExtensionCheck, Inspection, Outcome};
pub use signature::{Signature, PREFIX_LEN, SIGNATURES};
pub use sync_file::{RandomAccessFile, ReadAt, SyncFile};
