use crate::error::AppError;
use crate::imaging::{read_image, write_png};
use crate::models::RemapConfig;
use piet_palette::{PaletteEntry, Reporter, PIET_PALETTE};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of a successful remap run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemapOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub indexed: bool,
}

/// Reads an image, runs the palette pipeline and writes the result.
pub struct RemapService {
    config: RemapConfig,
}

impl RemapService {
    /// Create a service for a validated configuration.
    pub fn new(config: RemapConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RemapConfig {
        &self.config
    }

    /// Output path for `input` when none is given explicitly
    pub fn output_path(&self, input: &Path, output: Option<&Path>) -> PathBuf {
        output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.default_output_path(input))
    }

    /// Remap `input` and write it to `output` (or the default path).
    ///
    /// Nothing is written unless every pipeline stage succeeds.
    pub fn run(
        &self,
        input: &Path,
        output: Option<&Path>,
        reporter: &mut dyn Reporter,
    ) -> Result<RemapOutcome, AppError> {
        let output = self.output_path(input, output);
        let image = read_image(input)?;
        tracing::info!(
            input = %input.display(),
            width = image.width,
            height = image.height,
            diff_threshold = self.config.diff_threshold,
            level_threshold = self.config.level_threshold,
            "Remapping image"
        );

        let remapped = self
            .config
            .mapper()
            .map(&image.pixels, image.width, image.height, reporter)
            .inspect_err(|e| tracing::debug!(error = %e, "Pipeline failed, no output written"))?;

        write_png(&output, &remapped, self.config.indexed_output)?;
        tracing::info!(output = %output.display(), "Saved remapped image");

        Ok(RemapOutcome {
            input: input.to_path_buf(),
            output,
            width: remapped.width(),
            height: remapped.height(),
            indexed: self.config.indexed_output,
        })
    }
}

/// One row of the `palette` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteRow {
    pub index: usize,
    pub hue: String,
    pub lightness: Option<String>,
    pub color: String,
}

impl PaletteRow {
    fn new(index: usize, entry: &PaletteEntry) -> Self {
        Self {
            index,
            hue: entry.hue.name().to_string(),
            lightness: entry.lightness.map(|l| l.name().to_string()),
            color: entry.color.to_string(),
        }
    }
}

/// The canonical palette in index order
pub fn palette_rows() -> Vec<PaletteRow> {
    PIET_PALETTE
        .entries()
        .enumerate()
        .map(|(index, entry)| PaletteRow::new(index, &entry))
        .collect()
}
