//! End-to-end tests for the base64 PCM -> WAV pipeline.

use std::io::Cursor;

use anyhow::Result;
use sprachkurs_audio::audio::{demo_clip, read_wav_info_from_path, DEMO_CLIP_BASE64};
use sprachkurs_audio::{encode_wav, Clip, ErrorCode, SampleRate, WavBlob};

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Sine tone as the speech service would deliver it.
fn tone_base64(sample_rate: u32, samples: usize) -> String {
    use base64::Engine;

    let bytes: Vec<u8> = (0..samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            ((t * 440.0 * std::f32::consts::TAU).sin() * 12000.0) as i16
        })
        .flat_map(i16::to_le_bytes)
        .collect();
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[test]
fn base64_tone_to_wav_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let rate = SampleRate::new(16000)?;

    let blob = WavBlob::from_base64_pcm(&tone_base64(16000, 1600), rate)?;
    assert_eq!(blob.byte_len(), 44 + 2 * 1600);
    assert_eq!(u32_at(blob.bytes(), 4), 36 + 3200);
    assert_eq!(u32_at(blob.bytes(), 28), 32000);

    let path = dir.path().join("clips").join("tone.wav");
    blob.write_to(&path)?;

    let info = read_wav_info_from_path(&path)?;
    assert_eq!(info.sample_rate, 16000);
    assert_eq!(info.channels, 1);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.sample_count, 1600);
    assert!((info.duration_sec - 0.1).abs() < 1e-6);

    let clip = Clip::from_blob(&blob, path);
    assert!(clip.validate().is_none());
    Ok(())
}

#[test]
fn samples_survive_hound_round_trip() -> Result<()> {
    let samples: Vec<i16> = vec![0, 1, -1, 256, -256, i16::MAX, i16::MIN];
    let wav = encode_wav(&samples, SampleRate::new(44100)?)?;

    let mut reader = hound::WavReader::new(Cursor::new(wav))?;
    assert_eq!(reader.spec().sample_rate, 44100);
    let decoded = reader.samples::<i16>().collect::<std::result::Result<Vec<_>, _>>()?;
    assert_eq!(decoded, samples);
    Ok(())
}

#[test]
fn same_input_same_clip_id() -> Result<()> {
    let rate = SampleRate::new(16000)?;
    let a = WavBlob::from_base64_pcm(DEMO_CLIP_BASE64, rate)?;
    let b = demo_clip()?;

    assert_eq!(a.bytes(), b.bytes());
    assert_eq!(
        sprachkurs_audio::compute_clip_id(a.bytes()),
        sprachkurs_audio::compute_clip_id(b.bytes())
    );
    Ok(())
}

#[test]
fn errors_carry_codes() {
    let rate = SampleRate::new(16000).unwrap();

    let err = WavBlob::from_base64_pcm("%%%%", rate).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidBase64);

    // "AQID" is three bytes: not a whole number of samples.
    let err = WavBlob::from_base64_pcm("AQID", rate).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidPcmLength);

    let err = SampleRate::parse("-16000").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidSampleRate);
}
