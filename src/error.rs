use std::path::PathBuf;

use piet_palette::MapError;
use thiserror::Error;

/// Exit code for a color count mismatch.
pub const EXIT_COLOR_COUNT: u8 = 1;
/// Exit code for a hue sorting failure.
pub const EXIT_HUE_SORTING: u8 = 2;
/// Exit code for every other failure (I/O, codec, configuration).
pub const EXIT_OTHER: u8 = 3;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("Failed to serialize report")]
    Report(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Map(MapError::ColorCountMismatch { .. }) => EXIT_COLOR_COUNT,
            AppError::Map(MapError::HueSorting { .. }) => EXIT_HUE_SORTING,
            _ => EXIT_OTHER,
        }
    }

    /// This error followed by every underlying cause, `: `-separated.
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Indexed output requires canonical colors only")]
    NonCanonicalPixels,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
