//! Core types for sprachkurs-audio.
//!
//! - [`Clip`]: metadata for an encoded WAV file

mod clip;

pub use clip::{compute_clip_id, Clip};
