//! Base64 PCM input decoding.
//!
//! The speech service returns audio as base64 text holding raw
//! little-endian 16-bit samples. Decoding is forgiving about whitespace
//! and padding, strict about everything else.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine};
use tracing::debug;

use crate::audio::format::BYTES_PER_SAMPLE;
use crate::error::{Result, SprachError};

/// Standard alphabet, padding optional, non-zero trailing bits tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Rejects padding the browser decoder would refuse.
///
/// `=` may only appear as one or two trailing symbols of input whose
/// length is a multiple of 4; unpadded input is fine.
fn check_padding(compact: &str) -> Result<()> {
    let body = compact.trim_end_matches('=');
    let pad = compact.len() - body.len();

    if body.contains('=') || (pad > 0 && (pad > 2 || compact.len() % 4 != 0)) {
        return Err(SprachError::invalid_base64(DecodeError::InvalidPadding));
    }
    Ok(())
}

/// Decodes base64 text into raw bytes.
///
/// ASCII whitespace anywhere in the input is ignored, so line-wrapped
/// payloads decode the same as single-line ones.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    check_padding(&compact)?;

    let bytes = LENIENT
        .decode(compact.as_bytes())
        .map_err(SprachError::invalid_base64)?;

    debug!(chars = compact.len(), bytes = bytes.len(), "decoded base64 payload");
    Ok(bytes)
}

/// Splits a little-endian byte payload into 16-bit samples.
pub fn samples_from_le_bytes(bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % BYTES_PER_SAMPLE as usize != 0 {
        return Err(SprachError::invalid_pcm_length(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(BYTES_PER_SAMPLE as usize)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Decodes base64 text straight into 16-bit samples.
pub fn decode_pcm_base64(text: &str) -> Result<Vec<i16>> {
    let bytes = decode_base64(text)?;
    samples_from_le_bytes(&bytes)
}
