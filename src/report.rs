//! Per-file inspection reports: detected format plus a cross-check against the file extension.

use std::path::Path;

use log::warn;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::detector::detect_path;
use crate::error::DetectError;
use crate::format::ImageFormat;

/// How detection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// A signature matched.
    Detected,
    /// The prefix was read but no signature matched.
    Unknown,
    /// The file could not be read or was shorter than the prefix.
    Unreadable,
}

/// Agreement between the file extension and the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExtensionCheck {
    /// Extension names the detected format.
    Match,
    /// Extension names an image format the content does not confirm.
    Mismatch,
    /// Extension is not one of the known image extensions.
    Unrecognized,
    /// No extension; format comes from content alone.
    Missing,
}

/// Result of inspecting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Inspection {
    /// Detected format, if any.
    pub format: Option<ImageFormat>,
    pub outcome: Outcome,
    /// Extension as found on the path (without the dot).
    pub extension: Option<String>,
    pub extension_check: ExtensionCheck,
    /// Error message when the outcome is not `Detected`.
    pub error: Option<String>,
}

impl Inspection {
    /// Build a report from a [`detect`](crate::detect) result and the file's extension.
    pub fn from_result(result: Result<ImageFormat, DetectError>, extension: Option<&str>) -> Self {
        let (format, outcome, error) = match result {
            Ok(f) => (Some(f), Outcome::Detected, None),
            Err(e) => {
                let outcome = if e.is_unknown_format() {
                    Outcome::Unknown
                } else {
                    Outcome::Unreadable
                };
                (None, outcome, Some(e.to_string()))
            }
        };
        let extension_check = match extension {
            None => ExtensionCheck::Missing,
            Some(ext) => match ImageFormat::from_extension(ext) {
                None => ExtensionCheck::Unrecognized,
                Some(claimed) if Some(claimed) == format => ExtensionCheck::Match,
                Some(_) => ExtensionCheck::Mismatch,
            },
        };
        Self {
            format,
            outcome,
            extension: extension.map(str::to_string),
            extension_check,
            error,
        }
    }

    /// Content unidentified, unreadable, or contradicting its extension.
    #[inline]
    pub fn is_suspicious(&self) -> bool {
        self.outcome != Outcome::Detected || self.extension_check == ExtensionCheck::Mismatch
    }

    /// Short label for display: the format tag, "unknown" or "unreadable".
    pub fn label(&self) -> &'static str {
        match (self.format, self.outcome) {
            (Some(f), _) => f.as_str(),
            (None, Outcome::Unreadable) => "unreadable",
            (None, _) => "unknown",
        }
    }
}

/// Detect the format of the file at `path` and cross-check it with the path's extension.
pub fn inspect_path(path: impl AsRef<Path>) -> Inspection {
    let path = path.as_ref();
    let extension = path.extension().and_then(|e| e.to_str());
    let inspection = Inspection::from_result(detect_path(path), extension);
    match inspection.outcome {
        Outcome::Unreadable => warn!(
            "{}: {}",
            path.display(),
            inspection.error.as_deref().unwrap_or("unreadable")
        ),
        _ if inspection.extension_check == ExtensionCheck::Mismatch => warn!(
            "{}: extension {:?} but content is {}",
            path.display(),
            inspection.extension.as_deref().unwrap_or(""),
            inspection.label()
        ),
        _ => {}
    }
    inspection
}
