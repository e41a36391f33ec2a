//! Fixed audio format parameters and the validated sample rate type.
//!
//! Every clip is mono 16-bit linear PCM. Only the sample rate varies, and
//! it is checked once here so the encoder never emits a meaningless header.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SprachError};

/// Number of audio channels (mono).
pub const NUM_CHANNELS: u16 = 1;

/// Bytes per sample for 16-bit PCM.
pub const BYTES_PER_SAMPLE: u16 = 2;

/// Bits per sample written to the fmt chunk.
pub const BITS_PER_SAMPLE: u16 = BYTES_PER_SAMPLE * 8;

/// Bytes per frame (`channels * bytes_per_sample`).
pub const BLOCK_ALIGN: u16 = NUM_CHANNELS * BYTES_PER_SAMPLE;

/// Size of the canonical RIFF/fmt/data header.
pub const WAV_HEADER_LEN: usize = 44;

/// Sample rate the speech service delivers (16kHz).
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// Largest rate whose byte rate still fits in the 32-bit header field.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / BLOCK_ALIGN as u32;

/// A sample rate in Hz, guaranteed to produce a valid WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SampleRate(u32);

impl SampleRate {
    /// Creates a sample rate, rejecting zero and rates whose byte rate overflows.
    pub fn new(hz: u32) -> Result<Self> {
        if hz == 0 {
            return Err(SprachError::invalid_sample_rate(hz, "must be positive"));
        }
        if hz > MAX_SAMPLE_RATE {
            return Err(SprachError::invalid_sample_rate(
                hz,
                &format!("must be at most {}", MAX_SAMPLE_RATE),
            ));
        }
        Ok(Self(hz))
    }

    /// Parses a sample rate from text.
    ///
    /// Accepts surrounding whitespace. Negative, fractional and
    /// non-numeric values are rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SprachError::invalid_sample_rate(s, "value is empty"));
        }
        if trimmed.starts_with('-') {
            return Err(SprachError::invalid_sample_rate(trimmed, "must be positive"));
        }
        if trimmed.contains(['.', 'e', 'E']) && trimmed.parse::<f64>().is_ok() {
            return Err(SprachError::invalid_sample_rate(trimmed, "must be an integer"));
        }
        let hz = trimmed
            .parse::<u32>()
            .map_err(|e| SprachError::invalid_sample_rate(trimmed, &e.to_string()))?;
        Self::new(hz)
    }

    /// Returns the rate in Hz.
    pub fn hz(self) -> u32 {
        self.0
    }

    /// Bytes of audio per second (`rate * block_align`).
    pub fn byte_rate(self) -> u32 {
        // Cannot overflow: bounded by MAX_SAMPLE_RATE.
        self.0 * BLOCK_ALIGN as u32
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self(DEFAULT_SAMPLE_RATE)
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = SprachError;

    fn try_from(hz: u32) -> Result<Self> {
        Self::new(hz)
    }
}

impl From<SampleRate> for u32 {
    fn from(rate: SampleRate) -> Self {
        rate.0
    }
}

impl FromStr for SampleRate {
    type Err = SprachError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn derived_constants() {
        assert_eq!(BLOCK_ALIGN, 2);
        assert_eq!(BITS_PER_SAMPLE, 16);
        assert_eq!(WAV_HEADER_LEN, 44);
    }

    #[test]
    fn new_accepts_common_rates() {
        for hz in [8000, 16000, 22050, 44100, 48000] {
            assert_eq!(SampleRate::new(hz).unwrap().hz(), hz);
        }
    }

    #[test]
    fn new_rejects_zero() {
        let err = SampleRate::new(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSampleRate);
    }

    #[test]
    fn new_rejects_byte_rate_overflow() {
        assert!(SampleRate::new(MAX_SAMPLE_RATE).is_ok());
        let err = SampleRate::new(MAX_SAMPLE_RATE + 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSampleRate);
    }

    #[test]
    fn byte_rate_is_twice_rate() {
        assert_eq!(SampleRate::new(44100).unwrap().byte_rate(), 88200);
        assert_eq!(SampleRate::default().byte_rate(), 32000);
    }

    #[test]
    fn parse_valid() {
        assert_eq!(SampleRate::parse("16000").unwrap().hz(), 16000);
        assert_eq!(SampleRate::parse(" 44100\n").unwrap().hz(), 44100);
        assert_eq!("48000".parse::<SampleRate>().unwrap().hz(), 48000);
    }

    #[test]
    fn parse_rejects_invalid() {
        for input in ["", "   ", "0", "-1", "-16000", "16000.5", "1e4", "abc", "99999999999"] {
            let err = SampleRate::parse(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidSampleRate, "input {:?}", input);
        }
    }

    #[test]
    fn default_is_speech_rate() {
        assert_eq!(SampleRate::default().hz(), DEFAULT_SAMPLE_RATE);
    }

    #[test]
    fn serde_validates() {
        let rate: SampleRate = serde_json::from_str("22050").unwrap();
        assert_eq!(rate.hz(), 22050);
        assert_eq!(serde_json::to_string(&rate).unwrap(), "22050");
        assert!(serde_json::from_str::<SampleRate>("0").is_err());
    }
}
