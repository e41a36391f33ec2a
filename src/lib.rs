//! sprachkurs-audio: the audio pipeline of the Sprachkurs German course app.
//!
//! The speech service answers with base64 text holding raw little-endian
//! 16-bit mono PCM. This crate decodes that text and wraps the samples in
//! a byte-exact 44-byte-header WAV container tagged `audio/wav`.
//!
//! # Modules
//!
//! - [`audio`]: base64 PCM decoding, WAV encoding and read-back
//! - [`types`]: clip metadata (Clip, content ids)
//! - [`config`]: runtime configuration (AudioConfig)
//! - [`error`]: error types and codes (SprachError, ErrorCode)
//!
//! # Example
//!
//! ```rust
//! use sprachkurs_audio::{SampleRate, WavBlob};
//!
//! let blob = WavBlob::from_base64_pcm("AQD/fw==", SampleRate::new(16000)?)?;
//! assert_eq!(blob.mime_type(), "audio/wav");
//! assert_eq!(blob.byte_len(), 48);
//! # Ok::<(), sprachkurs_audio::SprachError>(())
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use audio::{encode_wav, SampleRate, WavBlob, WavInfo};
pub use config::AudioConfig;
pub use error::{ErrorCode, Result, SprachError};
pub use types::{compute_clip_id, Clip};
