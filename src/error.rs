//! Error types for sprachkurs-audio.
//!
//! Every failure in the decode/encode pipeline and the CLI maps to one
//! [`ErrorCode`], so callers can branch on the code and users get a
//! recovery hint alongside the message.

use std::fmt;

/// Error codes for pipeline and CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input text is not valid base64.
    /// Trigger: characters outside the standard alphabet, bad length.
    InvalidBase64,

    /// Sample rate is unusable for a 16-bit mono WAV header.
    /// Trigger: zero, negative, fractional, non-numeric, or so large
    /// that the byte rate overflows 32 bits.
    InvalidSampleRate,

    /// Decoded PCM payload cannot be split into 16-bit samples.
    /// Trigger: odd number of bytes.
    InvalidPcmLength,

    /// Payload does not fit in the 32-bit RIFF size fields.
    PayloadTooLarge,

    /// Writing a WAV file or buffer failed.
    WavWriteFailed,

    /// Reading an input file or parsing an existing WAV failed.
    WavReadFailed,

    /// CLI was given no input source or more than one.
    InvalidInput,

    /// A result record could not be rendered as JSON.
    SerializationFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidBase64 => "INVALID_BASE64",
            ErrorCode::InvalidSampleRate => "INVALID_SAMPLE_RATE",
            ErrorCode::InvalidPcmLength => "INVALID_PCM_LENGTH",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::WavReadFailed => "WAV_READ_FAILED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::SerializationFailed => "SERIALIZATION_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidBase64 => "Input is not valid base64",
            ErrorCode::InvalidSampleRate => "Sample rate must be a positive integer",
            ErrorCode::InvalidPcmLength => "PCM payload must hold whole 16-bit samples",
            ErrorCode::PayloadTooLarge => "PCM payload exceeds the 4 GiB WAV limit",
            ErrorCode::WavWriteFailed => "Failed to write WAV output",
            ErrorCode::WavReadFailed => "Failed to read input or WAV file",
            ErrorCode::InvalidInput => "Exactly one input source is required",
            ErrorCode::SerializationFailed => "Failed to render output as JSON",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidBase64 => {
                "Pass the audio content exactly as returned by the speech service \
                 (standard alphabet, padding optional)"
            }
            ErrorCode::InvalidSampleRate => {
                "Specify a whole number of Hz, e.g. --sample-rate 16000 or 44100"
            }
            ErrorCode::InvalidPcmLength => {
                "Make sure the payload is raw 16-bit PCM and was not truncated in transit"
            }
            ErrorCode::PayloadTooLarge => "Split the recording into shorter clips",
            ErrorCode::WavWriteFailed => {
                "Check that the output directory is writable and the disk is not full"
            }
            ErrorCode::WavReadFailed => {
                "Check that the file exists, is readable, and is a PCM WAV file"
            }
            ErrorCode::InvalidInput => "Use exactly one of --base64, --input or --demo",
            ErrorCode::SerializationFailed => "Run again without --json to get plain text output",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for the audio pipeline.
#[derive(Debug)]
pub struct SprachError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SprachError {
    /// Creates a new SprachError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new SprachError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_BASE64 error from the decoder's failure.
    pub fn invalid_base64(source: base64::DecodeError) -> Self {
        Self::with_source(
            ErrorCode::InvalidBase64,
            format!("Malformed base64 input: {}", source),
            source,
        )
    }

    /// Creates an INVALID_SAMPLE_RATE error.
    pub fn invalid_sample_rate(value: impl fmt::Display, reason: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSampleRate,
            format!("Invalid sample rate '{}': {}", value, reason),
        )
    }

    /// Creates an INVALID_PCM_LENGTH error.
    pub fn invalid_pcm_length(len: usize) -> Self {
        Self::new(
            ErrorCode::InvalidPcmLength,
            format!("PCM payload has {} bytes, which is not a multiple of 2", len),
        )
    }

    /// Creates a PAYLOAD_TOO_LARGE error.
    pub fn payload_too_large(len: usize) -> Self {
        Self::new(
            ErrorCode::PayloadTooLarge,
            format!("PCM payload of {} bytes does not fit in a RIFF header", len),
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(ErrorCode::WavWriteFailed, context, source)
    }

    /// Creates a WAV_READ_FAILED error.
    pub fn wav_read_failed(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(ErrorCode::WavReadFailed, context, source)
    }

    /// Creates a SERIALIZATION_FAILED error.
    pub fn serialization_failed(source: serde_json::Error) -> Self {
        Self::with_source(
            ErrorCode::SerializationFailed,
            format!("Failed to serialize JSON: {}", source),
            source,
        )
    }

    /// Creates an INVALID_INPUT error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, reason)
    }
}

impl fmt::Display for SprachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for SprachError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using SprachError.
pub type Result<T> = std::result::Result<T, SprachError>;
