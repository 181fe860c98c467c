//! # farmfog-report: FarmFog Simulation Comparison Charts
//!
//! **Version**: 0.1.0
//!
//! Renders three bar charts comparing the Fog-Based and Cloud-Only FarmFog
//! simulation runs (execution time, energy consumption, network usage) and
//! saves each as a PNG file.
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Poka-Yoke safety**: Datasets reject empty or non-finite input before drawing
//! - **Genchi Genbutsu**: Layout is computed without a backend, so every number on
//!   a chart can be checked in a test
//! - **Jidoka**: The first failed write stops the run
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use farmfog_report::{ReportConfig, ReportGenerator};
//!
//! let config = ReportConfig::builder().output_dir("charts").build();
//! for path in ReportGenerator::new(config).generate()? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod report;

pub use config::ReportConfig;
pub use error::{Error, Result};
pub use report::ReportGenerator;
