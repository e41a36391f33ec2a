//! CLI argument parser.
//!
//! Converts base64 PCM into WAV files and inspects existing WAV headers.

use std::path::PathBuf;

use clap::Parser;

use crate::audio::{SampleRate, DEMO_CLIP_SAMPLE_RATE};
use crate::config::AudioConfig;
use crate::error::{Result, SprachError};
use crate::types::Clip;

/// Where the base64 PCM comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line.
    Inline(String),
    /// A file of base64 text, or stdin for `-`.
    File(PathBuf),
    /// The built-in vocabulary clip.
    Demo,
}

/// sprachkurs-audio: wrap speech-service PCM into playable WAV files
#[derive(Parser, Debug)]
#[command(name = "sprachkurs-audio")]
#[command(about = "Convert base64 16-bit PCM into WAV files")]
#[command(version)]
pub struct Cli {
    /// Base64-encoded little-endian 16-bit mono PCM
    #[arg(short, long, value_name = "TEXT")]
    pub base64: Option<String>,

    /// File containing base64 PCM ("-" reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Encode the built-in vocabulary clip
    #[arg(long)]
    pub demo: bool,

    /// Sample rate of the PCM in Hz (defaults to SPRACH_SAMPLE_RATE or 16000)
    #[arg(short, long, value_parser = SampleRate::parse)]
    pub sample_rate: Option<SampleRate>,

    /// Output WAV file path (defaults to <output dir>/<clip id>.wav)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the header of an existing WAV file instead of encoding
    #[arg(long, value_name = "WAV")]
    pub inspect: Option<PathBuf>,

    /// Print results as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns true if an existing file should be inspected.
    pub fn is_inspect_mode(&self) -> bool {
        self.inspect.is_some()
    }

    /// Returns true if any input source was given.
    pub fn is_encode_mode(&self) -> bool {
        self.base64.is_some() || self.input.is_some() || self.demo
    }

    /// Resolves the single input source.
    pub fn input_source(&self) -> Result<InputSource> {
        let mut sources = Vec::new();
        if let Some(ref text) = self.base64 {
            sources.push(InputSource::Inline(text.clone()));
        }
        if let Some(ref path) = self.input {
            sources.push(InputSource::File(path.clone()));
        }
        if self.demo {
            sources.push(InputSource::Demo);
        }

        match sources.len() {
            0 => Err(SprachError::invalid_input("No input given")),
            1 => Ok(sources.remove(0)),
            n => Err(SprachError::invalid_input(format!(
                "{} input sources given, expected one",
                n
            ))),
        }
    }

    /// Returns the sample rate to encode `source` at.
    ///
    /// `--sample-rate` always wins. Otherwise the demo clip keeps its own
    /// rate and every other source uses the configured default.
    pub fn effective_sample_rate(
        &self,
        config: &AudioConfig,
        source: &InputSource,
    ) -> Result<SampleRate> {
        match (self.sample_rate, source) {
            (Some(rate), _) => Ok(rate),
            (None, InputSource::Demo) => SampleRate::new(DEMO_CLIP_SAMPLE_RATE),
            (None, _) => Ok(config.sample_rate),
        }
    }

    /// Returns where `clip` should be written.
    ///
    /// Defaults to `<output dir>/<clip id>.wav` if `--output` is not given.
    pub fn output_path(&self, config: &AudioConfig, clip: &Clip) -> PathBuf {
        if let Some(ref path) = self.output {
            path.clone()
        } else {
            config.effective_output_dir().join(clip.file_name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["sprachkurs-audio"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn inline_source() {
        let cli = parse(&["--base64", "AQA="]);
        assert!(cli.is_encode_mode());
        assert_eq!(cli.input_source().unwrap(), InputSource::Inline("AQA=".to_string()));
    }

    #[test]
    fn file_and_demo_sources() {
        let cli = parse(&["-i", "-"]);
        assert_eq!(cli.input_source().unwrap(), InputSource::File(PathBuf::from("-")));

        let cli = parse(&["--demo"]);
        assert_eq!(cli.input_source().unwrap(), InputSource::Demo);
    }

    #[test]
    fn missing_or_conflicting_sources() {
        let cli = parse(&[]);
        assert!(!cli.is_encode_mode());
        assert_eq!(cli.input_source().unwrap_err().code, ErrorCode::InvalidInput);

        let cli = parse(&["--demo", "--base64", "AQA="]);
        assert_eq!(cli.input_source().unwrap_err().code, ErrorCode::InvalidInput);
    }

    #[test]
    fn sample_rate_flag_is_validated() {
        let cli = parse(&["--demo", "--sample-rate", "44100"]);
        assert_eq!(cli.sample_rate.map(SampleRate::hz), Some(44100));

        for bad in ["0", "16000.5", "abc"] {
            let argv = ["sprachkurs-audio", "--demo", "--sample-rate", bad];
            assert!(Cli::try_parse_from(argv).is_err(), "accepted {}", bad);
        }
    }

    fn config_at(hz: u32, dir: &str) -> AudioConfig {
        AudioConfig {
            sample_rate: SampleRate::new(hz).unwrap(),
            output_dir: Some(PathBuf::from(dir)),
        }
    }

    #[test]
    fn demo_keeps_own_rate_over_config() {
        let config = config_at(44100, "clips");
        let cli = parse(&["--demo"]);
        let rate = cli.effective_sample_rate(&config, &InputSource::Demo).unwrap();
        assert_eq!(rate.hz(), DEMO_CLIP_SAMPLE_RATE);
    }

    #[test]
    fn other_sources_use_config_rate() {
        let config = config_at(44100, "clips");
        let cli = parse(&["--base64", "AQA="]);
        let source = cli.input_source().unwrap();
        assert_eq!(cli.effective_sample_rate(&config, &source).unwrap().hz(), 44100);
    }

    #[test]
    fn sample_rate_flag_overrides_config() {
        let config = config_at(44100, "clips");

        let cli = parse(&["--demo", "--sample-rate", "8000"]);
        let rate = cli.effective_sample_rate(&config, &InputSource::Demo).unwrap();
        assert_eq!(rate.hz(), 8000);

        let cli = parse(&["-i", "in.b64", "-s", "22050"]);
        let source = cli.input_source().unwrap();
        assert_eq!(cli.effective_sample_rate(&config, &source).unwrap().hz(), 22050);
    }

    #[test]
    fn output_path_defaults_to_clip_id() {
        use crate::audio::WavBlob;

        let config = config_at(16000, "/tmp/sprach-clips");
        let blob = WavBlob::from_samples(&[1, 2, 3], config.sample_rate).unwrap();
        let clip = Clip::from_blob(&blob, PathBuf::new());

        let cli = parse(&["--demo"]);
        assert_eq!(
            cli.output_path(&config, &clip),
            PathBuf::from("/tmp/sprach-clips").join(format!("{}.wav", clip.clip_id))
        );

        let cli = parse(&["--demo", "-o", "word.wav"]);
        assert_eq!(cli.output_path(&config, &clip), PathBuf::from("word.wav"));
    }

    #[test]
    fn inspect_mode() {
        let cli = parse(&["--inspect", "clip.wav", "--json"]);
        assert!(cli.is_inspect_mode());
        assert!(cli.json);
        assert!(!cli.is_encode_mode());
    }
}
