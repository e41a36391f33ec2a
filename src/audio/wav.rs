//! WAV container encoding for 16-bit mono PCM.
//!
//! The header is written field by field so the output is byte-exact: a
//! 44-byte RIFF/fmt/data header followed by the samples in little-endian
//! order. Reading back goes through the hound crate.

use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use hound::WavReader;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::audio::format::{
    SampleRate, BITS_PER_SAMPLE, BLOCK_ALIGN, BYTES_PER_SAMPLE, NUM_CHANNELS, WAV_HEADER_LEN,
};
use crate::audio::pcm::decode_pcm_base64;
use crate::error::{Result, SprachError};

/// MIME type attached to every encoded clip.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// Size of the fmt sub-chunk body for plain PCM.
const FMT_CHUNK_SIZE: u32 = 16;

/// AudioFormat tag for linear PCM.
const FORMAT_PCM: u16 = 1;

/// RIFF ChunkSize counts everything after its own field: "WAVE" plus both
/// sub-chunk headers plus the fmt body.
const RIFF_OVERHEAD: u32 = 36;

/// Returns the data chunk size for a payload, or an error if the RIFF
/// size field would overflow.
fn checked_data_len(payload_len: usize) -> Result<u32> {
    u32::try_from(payload_len)
        .ok()
        .filter(|len| len.checked_add(RIFF_OVERHEAD).is_some())
        .ok_or_else(|| SprachError::payload_too_large(payload_len))
}

/// Writes the 44-byte header for a payload of `data_len` bytes.
fn write_header<W: Write>(
    w: &mut W,
    data_len: u32,
    sample_rate: SampleRate,
) -> std::io::Result<()> {
    // RIFF chunk descriptor
    w.write_all(b"RIFF")?;
    w.write_u32::<LittleEndian>(RIFF_OVERHEAD + data_len)?;
    w.write_all(b"WAVE")?;

    // fmt sub-chunk
    w.write_all(b"fmt ")?;
    w.write_u32::<LittleEndian>(FMT_CHUNK_SIZE)?;
    w.write_u16::<LittleEndian>(FORMAT_PCM)?;
    w.write_u16::<LittleEndian>(NUM_CHANNELS)?;
    w.write_u32::<LittleEndian>(sample_rate.hz())?;
    w.write_u32::<LittleEndian>(sample_rate.byte_rate())?;
    w.write_u16::<LittleEndian>(BLOCK_ALIGN)?;
    w.write_u16::<LittleEndian>(BITS_PER_SAMPLE)?;

    // data sub-chunk
    w.write_all(b"data")?;
    w.write_u32::<LittleEndian>(data_len)
}

/// Encodes samples as a complete WAV container into any writer.
pub fn write_wav_to<W: Write>(
    writer: &mut W,
    samples: &[i16],
    sample_rate: SampleRate,
) -> Result<()> {
    let data_len = checked_data_len(samples.len() * BYTES_PER_SAMPLE as usize)?;

    let emit = |w: &mut W| -> std::io::Result<()> {
        write_header(w, data_len, sample_rate)?;
        for &sample in samples {
            w.write_i16::<LittleEndian>(sample)?;
        }
        w.flush()
    };

    emit(writer).map_err(|e| SprachError::wav_write_failed("Failed to write WAV data", e))
}

/// Encodes samples as an in-memory WAV file.
///
/// Output length is always `44 + 2 * samples.len()`; an empty slice yields
/// a header-only file.
///
/// # Example
///
/// ```
/// use sprachkurs_audio::audio::{encode_wav, SampleRate};
///
/// let wav = encode_wav(&[0, 1, -1], SampleRate::new(16000)?)?;
/// assert_eq!(wav.len(), 50);
/// assert_eq!(&wav[0..4], b"RIFF");
/// # Ok::<(), sprachkurs_audio::SprachError>(())
/// ```
pub fn encode_wav(samples: &[i16], sample_rate: SampleRate) -> Result<Vec<u8>> {
    let payload_len = samples.len() * BYTES_PER_SAMPLE as usize;
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + payload_len);
    write_wav_to(&mut buffer, samples, sample_rate)?;

    debug!(
        samples = samples.len(),
        sample_rate = sample_rate.hz(),
        bytes = buffer.len(),
        "encoded WAV"
    );
    Ok(buffer)
}

/// Wraps an already little-endian PCM byte payload in a WAV header.
///
/// The payload is copied verbatim and must hold whole 16-bit samples.
pub fn encode_pcm_bytes(pcm: &[u8], sample_rate: SampleRate) -> Result<Vec<u8>> {
    if pcm.len() % BYTES_PER_SAMPLE as usize != 0 {
        return Err(SprachError::invalid_pcm_length(pcm.len()));
    }
    let data_len = checked_data_len(pcm.len())?;

    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    write_header(&mut buffer, data_len, sample_rate)
        .map_err(|e| SprachError::wav_write_failed("Failed to write WAV header", e))?;
    buffer.extend_from_slice(pcm);
    Ok(buffer)
}

/// Writes samples to a WAV file, creating parent directories as needed.
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: SampleRate) -> Result<()> {
    create_parent_dir(path)?;

    let file = File::create(path).map_err(|e| {
        SprachError::wav_write_failed(format!("Failed to create {}", path.display()), e)
    })?;
    let mut writer = BufWriter::new(file);
    write_wav_to(&mut writer, samples, sample_rate)?;

    info!(path = %path.display(), samples = samples.len(), "wrote WAV file");
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                SprachError::wav_write_failed(format!("Failed to create {}", parent.display()), e)
            })
        }
        _ => Ok(()),
    }
}

/// An encoded WAV clip tagged with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavBlob {
    bytes: Vec<u8>,
    sample_rate: SampleRate,
}

impl WavBlob {
    /// Encodes samples into a new blob.
    pub fn from_samples(samples: &[i16], sample_rate: SampleRate) -> Result<Self> {
        Ok(Self {
            bytes: encode_wav(samples, sample_rate)?,
            sample_rate,
        })
    }

    /// Decodes base64 PCM text and encodes it into a new blob.
    pub fn from_base64_pcm(text: &str, sample_rate: SampleRate) -> Result<Self> {
        let samples = decode_pcm_base64(text)?;
        Self::from_samples(&samples, sample_rate)
    }

    /// Returns the full WAV file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the blob, returning the WAV file contents.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the total size in bytes, header included.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the payload holds at least one sample.
    pub fn has_samples(&self) -> bool {
        self.sample_count() > 0
    }

    /// Returns the MIME type for playback.
    pub fn mime_type(&self) -> &'static str {
        WAV_MIME_TYPE
    }

    /// Returns the sample rate written to the header.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Returns the number of samples in the payload.
    pub fn sample_count(&self) -> usize {
        (self.bytes.len() - WAV_HEADER_LEN) / BYTES_PER_SAMPLE as usize
    }

    /// Returns the clip length in seconds.
    pub fn duration_sec(&self) -> f32 {
        samples_to_duration(self.sample_count(), self.sample_rate.hz())
    }

    /// Writes the blob to disk, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        create_parent_dir(path)?;
        fs::write(path, &self.bytes).map_err(|e| {
            SprachError::wav_write_failed(format!("Failed to write {}", path.display()), e)
        })?;

        info!(path = %path.display(), bytes = self.bytes.len(), "wrote WAV file");
        Ok(())
    }
}

/// Header facts read back from a WAV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavInfo {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Bit depth of each sample.
    pub bits_per_sample: u16,
    /// Samples per channel.
    pub sample_count: u32,
    /// Length in seconds.
    pub duration_sec: f32,
}

/// Parses WAV bytes with a standard reader and returns the header facts.
pub fn read_wav_info(bytes: &[u8]) -> Result<WavInfo> {
    let reader = WavReader::new(Cursor::new(bytes))
        .map_err(|e| SprachError::wav_read_failed("Failed to parse WAV data", e))?;
    Ok(wav_info_from_reader(&reader))
}

/// Opens a WAV file on disk and returns its header facts.
pub fn read_wav_info_from_path(path: &Path) -> Result<WavInfo> {
    let reader = WavReader::open(path).map_err(|e| {
        SprachError::wav_read_failed(format!("Failed to open {}", path.display()), e)
    })?;
    Ok(wav_info_from_reader(&reader))
}

fn wav_info_from_reader<R: std::io::Read>(reader: &WavReader<R>) -> WavInfo {
    let spec = reader.spec();
    let sample_count = reader.duration();
    WavInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        sample_count,
        duration_sec: samples_to_duration(sample_count as usize, spec.sample_rate),
    }
}

/// Calculates the duration of audio in seconds from sample count.
///
/// A zero rate (only possible in foreign headers) yields 0.0.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    if sample_rate == 0 {
        return 0.0;
    }
    sample_count as f32 / sample_rate as f32
}
