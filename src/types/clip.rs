//! Clip type describing one encoded WAV file.
//!
//! Clips are content-addressed: the clip_id is derived from the WAV bytes,
//! so the same PCM at the same rate always lands in the same file.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::time::SystemTime;

use crate::audio::WavBlob;

/// Metadata for an encoded WAV clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// First 16 hex characters of the SHA256 of the WAV bytes.
    pub clip_id: String,

    /// Where the WAV file was written.
    pub path: PathBuf,

    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Number of 16-bit samples in the payload.
    pub sample_count: usize,

    /// Length of the audio in seconds.
    pub duration_sec: f32,

    /// Total file size including the 44-byte header.
    pub byte_len: usize,

    /// MIME type for playback.
    pub mime_type: String,

    /// When the clip was written (Unix seconds).
    #[serde(with = "system_time_serde")]
    pub created_at: SystemTime,
}

impl Clip {
    /// Builds clip metadata for a blob stored at `path`.
    pub fn from_blob(blob: &WavBlob, path: PathBuf) -> Self {
        Self {
            clip_id: compute_clip_id(blob.bytes()),
            path,
            sample_rate: blob.sample_rate().hz(),
            sample_count: blob.sample_count(),
            duration_sec: blob.duration_sec(),
            byte_len: blob.byte_len(),
            mime_type: blob.mime_type().to_string(),
            created_at: SystemTime::now(),
        }
    }

    /// File name used when no explicit output path is given.
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.clip_id)
    }

    /// Validates that the clip meets all constraints.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.clip_id.len() != 16 {
            return Some(format!(
                "Clip ID must be 16 characters, got {}",
                self.clip_id.len()
            ));
        }

        if !self.clip_id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Some("Clip ID must contain only hex characters".to_string());
        }

        if !self.path.exists() {
            return Some(format!("Clip file does not exist: {:?}", self.path));
        }

        None
    }
}

/// Computes the content id for WAV bytes.
///
/// Takes the first 8 bytes of the SHA256 digest, hex encoded.
pub fn compute_clip_id(wav_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(wav_bytes);
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

mod system_time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration = time.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::from_secs(secs))
    }
}
