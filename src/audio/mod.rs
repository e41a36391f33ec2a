//! Audio pipeline module.
//!
//! Decodes base64 PCM from the speech service and wraps it in WAV
//! containers for playback or storage.

pub mod demo;
pub mod format;
pub mod pcm;
pub mod wav;

// Re-export commonly used items
pub use demo::{demo_clip, DEMO_CLIP_BASE64, DEMO_CLIP_SAMPLE_RATE};
pub use format::{SampleRate, DEFAULT_SAMPLE_RATE, NUM_CHANNELS, WAV_HEADER_LEN};
pub use pcm::{decode_base64, decode_pcm_base64, samples_from_le_bytes};
pub use wav::{
    encode_pcm_bytes, encode_wav, read_wav_info, read_wav_info_from_path, samples_to_duration,
    write_wav, write_wav_to, WavBlob, WavInfo, WAV_MIME_TYPE,
};
