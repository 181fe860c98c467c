//! Report configuration
//!
//! Programmatic only: the binary runs with [`ReportConfig::default`], which
//! writes into the working directory at 800x600 pixels.

use std::path::{Path, PathBuf};

/// Default canvas width in pixels (8 in at 100 dpi).
pub const DEFAULT_WIDTH: u32 = 800;

/// Default canvas height in pixels (6 in at 100 dpi).
pub const DEFAULT_HEIGHT: u32 = 600;

/// Where and how large the report charts are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    output_dir: PathBuf,
    width: u32,
    height: u32,
    summary_path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            summary_path: None,
        }
    }
}

impl ReportConfig {
    /// Create a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Directory the PNG files are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Canvas size as `(width, height)` pixels.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Path of the JSON run summary, if enabled.
    #[must_use]
    pub fn summary_path(&self) -> Option<&Path> {
        self.summary_path.as_deref()
    }
}

/// Builder for `ReportConfig`.
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    /// Set the output directory.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Set the canvas size in pixels.
    #[must_use]
    pub const fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Write a JSON run summary to `path` after the charts.
    #[must_use]
    pub fn summary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.summary_path = Some(path.into());
        self
    }

    /// Build the `ReportConfig`.
    #[must_use]
    pub fn build(self) -> ReportConfig {
        self.config
    }
}
