//! sprachkurs-audio: turns speech-service PCM into playable WAV files.
//!
//! Two modes:
//! - Encode: base64 PCM (inline, file, stdin, or the demo clip) -> WAV file
//! - Inspect: print the header facts of an existing WAV file

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sprachkurs_audio::audio::{read_wav_info_from_path, WavBlob, DEMO_CLIP_BASE64};
use sprachkurs_audio::cli::{Cli, InputSource};
use sprachkurs_audio::config::AudioConfig;
use sprachkurs_audio::error::{Result, SprachError};
use sprachkurs_audio::types::Clip;

fn main() {
    let cli = Cli::parse_args();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging already initialized");
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.is_inspect_mode() {
        run_inspect(cli)
    } else if cli.is_encode_mode() {
        run_encode(cli)
    } else {
        print_usage();
        Ok(())
    }
}

/// Decodes the selected input and writes it as a WAV file.
fn run_encode(cli: &Cli) -> Result<()> {
    let config = AudioConfig::from_env();
    if let Some(problem) = config.validate() {
        eprintln!("Warning: {}", problem);
    }
    debug!(?config, "effective configuration");

    let source = cli.input_source()?;
    let sample_rate = cli.effective_sample_rate(&config, &source)?;
    let blob = match source {
        InputSource::Demo => WavBlob::from_base64_pcm(DEMO_CLIP_BASE64, sample_rate)?,
        InputSource::Inline(ref text) => WavBlob::from_base64_pcm(text, sample_rate)?,
        InputSource::File(ref path) => {
            let text = read_input_text(path)?;
            WavBlob::from_base64_pcm(&text, sample_rate)?
        }
    };

    let mut clip = Clip::from_blob(&blob, PathBuf::new());
    clip.path = cli.output_path(&config, &clip);
    blob.write_to(&clip.path)?;

    if cli.json {
        print_json(&clip)?;
    } else {
        eprintln!("Clip {}", clip.clip_id);
        eprintln!("  Sample rate: {} Hz", clip.sample_rate);
        eprintln!("  Samples: {}", clip.sample_count);
        eprintln!("  Duration: {:.3}s", clip.duration_sec);
        eprintln!("  Size: {} bytes ({})", clip.byte_len, clip.mime_type);
        eprintln!("Saved to: {}", clip.path.display());
    }

    Ok(())
}

/// Prints the header facts of an existing WAV file.
fn run_inspect(cli: &Cli) -> Result<()> {
    let Some(ref path) = cli.inspect else {
        return Err(SprachError::invalid_input("No WAV file to inspect"));
    };
    let info = read_wav_info_from_path(path)?;

    if cli.json {
        print_json(&info)?;
    } else {
        println!("File: {}", path.display());
        println!("  Sample rate: {} Hz", info.sample_rate);
        println!("  Channels: {}", info.channels);
        println!("  Bits per sample: {}", info.bits_per_sample);
        println!("  Samples: {}", info.sample_count);
        println!("  Duration: {:.3}s", info.duration_sec);
    }

    Ok(())
}

/// Reads base64 text from a file, or from stdin for `-`.
fn read_input_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| SprachError::wav_read_failed("Failed to read stdin", e))?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            SprachError::wav_read_failed(format!("Failed to read {}", path.display()), e)
        })
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(SprachError::serialization_failed)?;
    println!("{}", text);
    Ok(())
}

/// Prints usage information.
fn print_usage() {
    eprintln!("sprachkurs-audio: wrap base64 16-bit PCM into WAV files");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  Encode inline PCM:");
    eprintln!("    sprachkurs-audio --base64 AQD/fw== --sample-rate 16000 --output word.wav");
    eprintln!();
    eprintln!("  Encode from a file or stdin:");
    eprintln!("    sprachkurs-audio --input response.b64");
    eprintln!("    cat response.b64 | sprachkurs-audio --input - --json");
    eprintln!();
    eprintln!("  Built-in vocabulary clip:");
    eprintln!("    sprachkurs-audio --demo");
    eprintln!();
    eprintln!("  Inspect an existing file:");
    eprintln!("    sprachkurs-audio --inspect word.wav");
    eprintln!();
    eprintln!("Run 'sprachkurs-audio --help' for full options.");
}
