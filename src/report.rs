//! Report generator: the three fixed comparison charts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use farmfog_report::report::ReportGenerator;
//!
//! let written = ReportGenerator::default().generate()?;
//! assert_eq!(written.len(), 3);
//! # Ok::<(), farmfog_report::Error>(())
//! ```

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::chart::{self, ChartSpec};
use crate::config::ReportConfig;
use crate::dataset::{Dataset, Unit};
use crate::error::Result;

/// Output file of the execution time chart.
pub const EXECUTION_TIME_FILE: &str = "execution_time_comparison.png";

/// Output file of the energy chart.
pub const ENERGY_FILE: &str = "total_energy_consumption.png";

/// Output file of the network usage chart.
pub const NETWORK_FILE: &str = "network_usage_comparison.png";

/// The report's charts, in render order.
#[must_use]
pub fn fixed_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::builder(
            Dataset::execution_time(),
            "Execution Time Comparison",
            EXECUTION_TIME_FILE,
        )
        .y_desc("Time (ms)")
        .label_offset(10.0)
        .build(),
        ChartSpec::builder(Dataset::energy(), "Total Energy Consumption", ENERGY_FILE)
            .y_desc("Energy (MegaJoules)")
            .label_offset(0.02)
            .build(),
        ChartSpec::builder(
            Dataset::network_usage(),
            "Total Network Usage (LoRaWAN-WAN)",
            NETWORK_FILE,
        )
        .y_desc("Data Transferred (KB)")
        .label_offset(0.1)
        .build(),
    ]
}

/// Per-chart entry of a [`ReportSummary`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSummary {
    /// Chart title
    pub title: String,
    /// Output file name
    pub file: String,
    /// Display unit
    pub unit: Unit,
    /// Bar labels, in order
    pub labels: Vec<String>,
    /// Displayed values, in order
    pub values: Vec<f64>,
    /// Upper limit of the y axis
    pub y_max: f64,
}

/// JSON-serializable record of one report run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportSummary {
    /// When the summary was built
    pub generated_at: DateTime<Utc>,
    /// One entry per chart
    pub charts: Vec<ChartSummary>,
}

/// Renders the fixed charts with a [`ReportConfig`].
#[derive(Debug)]
pub struct ReportGenerator {
    config: ReportConfig,
    charts: Vec<ChartSpec>,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl ReportGenerator {
    /// Create a generator over the fixed charts.
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            charts: fixed_charts(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Charts rendered by [`generate`](Self::generate).
    #[must_use]
    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    /// Paths `generate` writes to; identical on every run.
    #[must_use]
    pub fn output_paths(&self) -> Vec<PathBuf> {
        self.charts
            .iter()
            .map(|c| self.config.output_dir().join(c.file_name()))
            .collect()
    }

    /// Summarize the charts without rendering them.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let charts = self
            .charts
            .iter()
            .map(|c| ChartSummary {
                title: c.title().to_string(),
                file: c.file_name().to_string(),
                unit: c.dataset().unit(),
                labels: c
                    .dataset()
                    .entries()
                    .iter()
                    .map(|e| e.label().to_string())
                    .collect(),
                values: c.dataset().display_values(),
                y_max: c.dataset().y_upper_bound(),
            })
            .collect();

        ReportSummary {
            generated_at: Utc::now(),
            charts,
        }
    }

    /// Render every chart in order, printing `Saved '<file>'` after each.
    ///
    /// Existing files are overwritten. When a summary path is configured the
    /// summary is written after the last chart.
    ///
    /// # Errors
    ///
    /// Stops at the first chart that fails to render or write.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.charts.len());
        for spec in &self.charts {
            let path = chart::render(spec, &self.config)?;
            println!("Saved '{}'", spec.file_name());
            written.push(path);
        }

        if let Some(summary_path) = self.config.summary_path() {
            let json = serde_json::to_string_pretty(&self.summary())?;
            std::fs::write(summary_path, json)?;
            info!(path = %summary_path.display(), "summary written");
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generator_writes_to_working_dir() {
        let generator = ReportGenerator::default();
        assert_eq!(generator.charts().len(), 3);
        assert_eq!(generator.config(), &ReportConfig::default());
        assert_eq!(generator.output_paths()[1], PathBuf::from(".").join(ENERGY_FILE));
    }

    #[test]
    fn test_fixed_chart_files() {
        let files: Vec<String> = fixed_charts()
            .iter()
            .map(|c| c.file_name().to_string())
            .collect();
        assert_eq!(files, vec![EXECUTION_TIME_FILE, ENERGY_FILE, NETWORK_FILE]);
    }

    #[test]
    fn test_summary_values() {
        let summary = ReportGenerator::new(ReportConfig::default()).summary();
        assert_eq!(summary.charts.len(), 3);
        assert_eq!(summary.charts[0].labels, vec!["Fog-Based Model", "Cloud-Only Model"]);
        assert!((summary.charts[0].y_max - 614.4).abs() < 1e-9);
        assert_eq!(summary.charts[1].unit, Unit::Megajoules);
        assert!((summary.charts[2].values[1] - 6646.0 / 1024.0).abs() < 1e-12);
    }

    #[test]
    fn test_output_paths_in_output_dir() {
        let config = ReportConfig::builder().output_dir("out").build();
        let paths = ReportGenerator::new(config).output_paths();
        assert_eq!(paths[0], PathBuf::from("out").join(EXECUTION_TIME_FILE));
        assert_eq!(paths[2], PathBuf::from("out").join(NETWORK_FILE));
    }
}
