//! Profile image handling: file to data-URI conversion and validation.
//!
//! Conversion is synchronous and one file at a time; a new selection simply
//! overwrites the previous result. Oversized files and non-image types are
//! surfaced as field-level errors, leaving the image value empty.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Maximum accepted image file size (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Image MIME subtypes accepted for profile images.
pub const ALLOWED_SUBTYPES: [&str; 4] = ["png", "jpeg", "jpg", "svg+xml"];

/// Error converting a file into a profile image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image is too large: {size} bytes (limit {MAX_IMAGE_BYTES})")]
    TooLarge { size: u64 },

    #[error("unsupported image type: {found} (expected png, jpeg, jpg, or svg)")]
    UnsupportedType { found: String },

    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
}

impl ImageError {
    /// The inline message shown against the image field.
    pub fn field_message(&self) -> String {
        match self {
            ImageError::TooLarge { .. } => "Image must be 5MB or smaller".to_string(),
            ImageError::UnsupportedType { .. } => {
                "Image must be a png, jpeg, or svg file".to_string()
            }
            ImageError::Io(e) => format!("Could not read image file: {e}"),
        }
    }
}

/// Map a file extension to the accepted MIME subtype.
fn subtype_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("png"),
        "jpeg" => Some("jpeg"),
        "jpg" => Some("jpg"),
        "svg" => Some("svg+xml"),
        _ => None,
    }
}

/// Read a file and encode it as a `data:image/...;base64,` URI.
///
/// Checks the size cap before reading the contents, so an oversized file is
/// rejected without loading it into memory.
pub fn read_to_data_uri(path: &Path) -> Result<String, ImageError> {
    let subtype = subtype_for_extension(path).ok_or_else(|| ImageError::UnsupportedType {
        found: path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "(no extension)".to_string()),
    })?;

    let size = std::fs::metadata(path)?.len();
    if size > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge { size });
    }

    let bytes = std::fs::read(path)?;
    tracing::debug!("encoded {} byte image as {}", bytes.len(), subtype);

    Ok(format!(
        "data:image/{subtype};base64,{}",
        STANDARD.encode(bytes)
    ))
}

/// Whether a string is an accepted image data-URI.
///
/// Accepted values start with `data:image/` and carry one of the allowed
/// subtypes before the `;base64,` marker.
pub fn is_valid_data_uri(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };
    let Some(semi) = rest.find(';') else {
        return false;
    };
    ALLOWED_SUBTYPES.contains(&&rest[..semi])
}

/// The MIME subtype of a valid data-URI, if recognizable.
pub fn data_uri_subtype(value: &str) -> Option<&str> {
    let rest = value.strip_prefix("data:image/")?;
    let semi = rest.find(';')?;
    let subtype = &rest[..semi];
    ALLOWED_SUBTYPES.contains(&subtype).then_some(subtype)
}
