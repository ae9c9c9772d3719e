//! Image ingestion: format sniffing, size limits and base64 encoding.
//!
//! Uploads are validated here before anything is sent over the network.
//! The media type is sniffed from magic bytes rather than trusted from
//! the multipart Content-Type, which browsers get wrong often enough.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::constants::WARN_IMAGE_BYTES;
use crate::error::{AppError, Result};

/// Image formats the vision API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl MediaType {
    /// MIME string as sent to the AI API
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Gif => "image/gif",
            MediaType::Webp => "image/webp",
        }
    }

    /// Sniff the media type from the leading magic bytes
    pub fn sniff(bytes: &[u8]) -> Option<MediaType> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(MediaType::Jpeg)
        } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(MediaType::Png)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(MediaType::Gif)
        } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            Some(MediaType::Webp)
        } else {
            None
        }
    }
}

/// A validated upload, ready for transmission to the AI API
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub media_type: MediaType,
    /// Base64 of the original bytes, unmodified
    pub data: String,
    /// Original size in bytes, kept for logging
    pub byte_len: usize,
}

/// Validate and encode an uploaded image
///
/// Rejects anything that is not a JPEG/PNG/GIF/WebP and anything over
/// `max_bytes`, before any network call is made.
pub fn encode_image(bytes: &[u8], max_bytes: usize) -> Result<EncodedImage> {
    if bytes.len() > max_bytes {
        tracing::warn!(
            "Rejecting oversize upload: {} bytes (max: {})",
            bytes.len(),
            max_bytes
        );
        return Err(AppError::ImageTooLarge);
    }

    let media_type = MediaType::sniff(bytes).ok_or(AppError::UnsupportedImage)?;

    if bytes.len() > WARN_IMAGE_BYTES {
        tracing::info!("Large upload: {} bytes ({})", bytes.len(), media_type.as_str());
    }

    Ok(EncodedImage {
        media_type,
        data: BASE64.encode(bytes),
        byte_len: bytes.len(),
    })
}
