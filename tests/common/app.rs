//! Scratch directory and binary runner for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use piet_cleaner::imaging::write_png;
use piet_palette::RemappedImage;
use tempfile::TempDir;

use super::fixtures::Image;

/// Captured result of a `piet-cleaner` invocation
pub struct CliOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({e}): {}", self.stdout);
        })
    }
}

/// A temporary directory holding input images and config files.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as an RGB PNG and return its path
    pub fn write_image(&self, name: &str, image: &Image) -> PathBuf {
        let path = self.path(name);
        let remapped = RemappedImage::new(image.pixels.clone(), image.width, image.height);
        write_png(&path, &remapped, false).expect("Failed to write fixture image");
        path
    }

    /// Write `fixture` in another raster format, e.g. BMP
    pub fn write_image_as(
        &self,
        name: &str,
        fixture: &Image,
        format: image::ImageFormat,
    ) -> PathBuf {
        let path = self.path(name);
        let bytes: Vec<u8> = fixture.pixels.iter().flat_map(|p| p.to_bytes()).collect();
        let rgb = image::RgbImage::from_raw(fixture.width as u32, fixture.height as u32, bytes)
            .expect("Fixture size mismatch");
        rgb.save_with_format(&path, format)
            .expect("Failed to write fixture image");
        path
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Run the binary with `args`, from inside the workspace
    pub fn run(&self, args: &[&str]) -> CliOutput {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &Path)]) -> CliOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_piet-cleaner"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("PIET_CLEANER_CONFIG")
            .env_remove("RUST_LOG");
        for (key, value) in env {
            command.env(key, value);
        }
        let output = command.output().expect("Failed to run piet-cleaner");
        CliOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
