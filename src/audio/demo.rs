//! Built-in vocabulary clip.
//!
//! The course app's "play random word" button plays this canned speech
//! service response. It lets the whole pipeline run without any upstream.

use crate::audio::format::SampleRate;
use crate::audio::wav::WavBlob;
use crate::error::Result;

/// Canned audio content, base64 without trailing padding.
pub const DEMO_CLIP_BASE64: &str =
    "UklGRoAAAABXQVZFZm10IBAAAAABAAEARKwAAIhYAQACABAAZGF0YRIAAAD//wABAAAAAQAAAABAAAAAAAAAAEAAQAA";

/// Sample rate the demo clip is played back at.
pub const DEMO_CLIP_SAMPLE_RATE: u32 = 16000;

/// Decodes the demo clip and wraps it in a WAV container.
pub fn demo_clip() -> Result<WavBlob> {
    WavBlob::from_base64_pcm(DEMO_CLIP_BASE64, SampleRate::new(DEMO_CLIP_SAMPLE_RATE)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::pcm::decode_base64;

    #[test]
    fn demo_payload_is_whole_samples() {
        let bytes = decode_base64(DEMO_CLIP_BASE64).unwrap();
        assert_eq!(bytes.len(), 68);
    }

    #[test]
    fn demo_clip_encodes() {
        let blob = demo_clip().unwrap();
        assert_eq!(blob.byte_len(), 112);
        assert_eq!(blob.sample_count(), 34);
        assert_eq!(blob.sample_rate().hz(), 16000);
        assert_eq!(&blob.bytes()[0..4], b"RIFF");
        // The canned payload is copied verbatim after the new header.
        assert_eq!(&blob.bytes()[44..48], b"RIFF");
    }
}
