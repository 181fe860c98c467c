//! Metric datasets compared by the report
//!
//! Each dataset holds one raw measurement per simulated architecture and a
//! display [`Unit`] that converts the raw value (milliseconds, joules, bytes)
//! into the value drawn on the chart.
//!
//! ## Example
//!
//! ```rust
//! use farmfog_report::dataset::Dataset;
//!
//! let dataset = Dataset::execution_time();
//! assert_eq!(dataset.annotations(), vec!["127 ms", "512 ms"]);
//! assert!((dataset.y_upper_bound() - 614.4).abs() < 1e-9);
//! ```

use serde::Serialize;

use crate::error::{Error, Result};

/// Headroom factor applied above the tallest bar.
pub const HEADROOM: f64 = 1.2;

/// Label of the fog-based architecture.
pub const FOG_LABEL: &str = "Fog-Based Model";

/// Label of the cloud-only architecture.
pub const CLOUD_LABEL: &str = "Cloud-Only Model";

/// Raw execution times in milliseconds (fog, cloud).
pub const EXECUTION_TIME_MS: [f64; 2] = [127.0, 512.0];

/// Raw energy consumption in joules (fog, cloud).
pub const ENERGY_J: [f64; 2] = [1_188_872.0, 1_046_801.0];

/// Raw network usage in bytes (fog, cloud).
pub const NETWORK_BYTES: [f64; 2] = [6096.0, 6646.0];

/// Display unit of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// Milliseconds, drawn as-is
    Milliseconds,
    /// Joules converted to megajoules
    Megajoules,
    /// Bytes converted to kilobytes (1024)
    Kilobytes,
}

impl Unit {
    /// Divisor from the raw measurement to the displayed value.
    #[must_use]
    pub const fn divisor(self) -> f64 {
        match self {
            Self::Milliseconds => 1.0,
            Self::Megajoules => 1_000_000.0,
            Self::Kilobytes => 1024.0,
        }
    }

    /// Suffix appended to bar annotations.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Megajoules => "MJ",
            Self::Kilobytes => "KB",
        }
    }

    /// Decimal places used in bar annotations.
    #[must_use]
    pub const fn precision(self) -> usize {
        match self {
            Self::Milliseconds => 0,
            Self::Megajoules | Self::Kilobytes => 2,
        }
    }

    /// Convert a raw measurement into the displayed value.
    #[must_use]
    pub fn to_display(self, raw: f64) -> f64 {
        raw / self.divisor()
    }

    /// Format a displayed value with this unit's precision and suffix.
    #[must_use]
    pub fn format(self, display: f64) -> String {
        format!("{display:.prec$} {}", self.suffix(), prec = self.precision())
    }
}

/// One labelled raw measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    label: String,
    raw: f64,
}

impl Entry {
    /// Create a new entry.
    #[must_use]
    pub fn new(label: impl Into<String>, raw: f64) -> Self {
        Self {
            label: label.into(),
            raw,
        }
    }

    /// Architecture label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw measurement, before unit conversion.
    #[must_use]
    pub const fn raw(&self) -> f64 {
        self.raw
    }
}

/// A metric measured once per architecture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    name: String,
    unit: Unit,
    entries: Vec<Entry>,
}

impl Dataset {
    /// Create a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `entries` is empty, any raw value
    /// is negative or not finite, or every value is zero (the y axis would
    /// have no height).
    pub fn new(name: impl Into<String>, unit: Unit, entries: Vec<Entry>) -> Result<Self> {
        let name = name.into();
        if entries.is_empty() {
            return Err(Error::InvalidInput(format!(
                "dataset '{name}' has no entries"
            )));
        }
        if let Some(bad) = entries
            .iter()
            .find(|e| !e.raw.is_finite() || e.raw < 0.0)
        {
            return Err(Error::InvalidInput(format!(
                "dataset '{name}': value {} for '{}' must be finite and non-negative",
                bad.raw, bad.label
            )));
        }
        if entries.iter().all(|e| e.raw == 0.0) {
            return Err(Error::InvalidInput(format!(
                "dataset '{name}' is all zero; y axis would have no range"
            )));
        }
        Ok(Self {
            name,
            unit,
            entries,
        })
    }

    fn literal(name: &str, unit: Unit, raw: [f64; 2]) -> Self {
        Self {
            name: name.to_string(),
            unit,
            entries: vec![Entry::new(FOG_LABEL, raw[0]), Entry::new(CLOUD_LABEL, raw[1])],
        }
    }

    /// Execution time per architecture, in milliseconds.
    #[must_use]
    pub fn execution_time() -> Self {
        Self::literal("execution_time", Unit::Milliseconds, EXECUTION_TIME_MS)
    }

    /// Total energy consumption per architecture, joules shown as MJ.
    #[must_use]
    pub fn energy() -> Self {
        Self::literal("energy", Unit::Megajoules, ENERGY_J)
    }

    /// Network usage per architecture, bytes shown as KB.
    #[must_use]
    pub fn network_usage() -> Self {
        Self::literal("network_usage", Unit::Kilobytes, NETWORK_BYTES)
    }

    /// Dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display unit.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Entries in bar order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Values as drawn on the chart, after unit conversion.
    #[must_use]
    pub fn display_values(&self) -> Vec<f64> {
        self.entries
            .iter()
            .map(|e| self.unit.to_display(e.raw))
            .collect()
    }

    /// Largest displayed value.
    #[must_use]
    pub fn max_display(&self) -> f64 {
        self.display_values().into_iter().fold(0.0_f64, f64::max)
    }

    /// Upper limit of the y axis: 20% above the tallest bar.
    #[must_use]
    pub fn y_upper_bound(&self) -> f64 {
        self.max_display() * HEADROOM
    }

    /// Annotation text for each bar, e.g. `"1.19 MJ"`.
    #[must_use]
    pub fn annotations(&self) -> Vec<String> {
        self.display_values()
            .into_iter()
            .map(|v| self.unit.format(v))
            .collect()
    }
}
