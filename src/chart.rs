//! Bar chart definition, layout and PNG rendering
//!
//! Rendering is split in two steps:
//!
//! 1. [`ChartSpec::layout`] computes a backend-free [`BarLayout`]: bar spans,
//!    heights, colours, annotation text and anchors, and the y range.
//! 2. [`render`] draws that layout on a plotters `BitMapBackend` and writes
//!    the PNG file.
//!
//! ```text
//!   y_max = 1.2 * max ┤
//!                     │             512 ms
//!                     │           ┌───────┐
//!                     │  127 ms   │       │
//!                     │ ┌───────┐ │       │
//!                   0 ┼─┴───────┴─┴───────┴─
//!                       Fog-Based  Cloud-Only
//! ```

use std::ops::Range;
use std::path::PathBuf;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::dataset::Dataset;
use crate::error::{Error, Result};

const TITLE_FONT_SIZE: u32 = 32;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const DATA_LABEL_FONT_SIZE: u32 = 18;

/// Fraction of a category slot covered by a bar.
pub const BAR_WIDTH: f64 = 0.5;

/// Bar colours, assigned in bar order.
pub const PALETTE: [RGBColor; 2] = [
    RGBColor(0x4A, 0x90, 0xE2), // Blue (Fog-Based)
    RGBColor(0xF5, 0xA6, 0x23), // Orange (Cloud-Only)
];

/// One bar of a laid-out chart, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Category label under the bar
    pub label: String,
    /// Left edge on the x axis
    pub left: f64,
    /// Right edge on the x axis
    pub right: f64,
    /// Bar height (displayed value)
    pub height: f64,
    /// Fill colour
    pub color: RGBColor,
    /// Text drawn above the bar
    pub annotation: String,
    /// Bottom-centre anchor of the annotation
    pub annotation_anchor: (f64, f64),
}

/// Backend-independent geometry of a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    bars: Vec<Bar>,
    x_range: Range<f64>,
    y_max: f64,
}

impl BarLayout {
    /// Bars in category order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Horizontal extent: half a slot of padding around the categories.
    #[must_use]
    pub fn x_range(&self) -> Range<f64> {
        self.x_range.clone()
    }

    /// Upper limit of the y axis (lower limit is always 0).
    #[must_use]
    pub const fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Category label at an x tick, or an empty string between categories.
    #[must_use]
    pub fn category_label(&self, x: f64) -> String {
        let idx = x.round();
        if idx < 0.0 || (x - idx).abs() > 0.3 {
            return String::new();
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = idx as usize;
        self.bars
            .get(idx)
            .map(|b| b.label.clone())
            .unwrap_or_default()
    }
}

/// A titled bar chart over one dataset, saved to a fixed file name.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    title: String,
    y_desc: String,
    file_name: String,
    label_offset: f64,
    dataset: Dataset,
}

impl ChartSpec {
    /// Create a builder with the required fields.
    #[must_use]
    pub fn builder(
        dataset: Dataset,
        title: impl Into<String>,
        file_name: impl Into<String>,
    ) -> ChartSpecBuilder {
        ChartSpecBuilder::new(dataset, title, file_name)
    }

    /// Chart title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Y axis description.
    #[must_use]
    pub fn y_desc(&self) -> &str {
        &self.y_desc
    }

    /// Output file name, relative to the output directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Gap between bar top and annotation, in data units.
    #[must_use]
    pub const fn label_offset(&self) -> f64 {
        self.label_offset
    }

    /// The plotted dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Compute bar geometry and annotations.
    #[must_use]
    pub fn layout(&self) -> BarLayout {
        let values = self.dataset.display_values();
        let annotations = self.dataset.annotations();

        let bars: Vec<Bar> = self
            .dataset
            .entries()
            .iter()
            .zip(values)
            .zip(annotations)
            .enumerate()
            .map(|(idx, ((entry, height), annotation))| {
                #[allow(clippy::cast_precision_loss)]
                let center = idx as f64;
                Bar {
                    label: entry.label().to_string(),
                    left: center - BAR_WIDTH / 2.0,
                    right: center + BAR_WIDTH / 2.0,
                    height,
                    color: PALETTE[idx % PALETTE.len()],
                    annotation,
                    annotation_anchor: (center, height + self.label_offset),
                }
            })
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let x_range = -0.5..(bars.len() as f64 - 0.5);

        BarLayout {
            bars,
            x_range,
            y_max: self.dataset.y_upper_bound(),
        }
    }
}

/// Builder for `ChartSpec`.
#[derive(Debug)]
pub struct ChartSpecBuilder {
    title: String,
    y_desc: String,
    file_name: String,
    label_offset: f64,
    dataset: Dataset,
}

impl ChartSpecBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(dataset: Dataset, title: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            y_desc: String::new(),
            file_name: file_name.into(),
            label_offset: 0.0,
            dataset,
        }
    }

    /// Set the y axis description.
    #[must_use]
    pub fn y_desc(mut self, y_desc: impl Into<String>) -> Self {
        self.y_desc = y_desc.into();
        self
    }

    /// Set the annotation gap above each bar, in data units.
    #[must_use]
    pub const fn label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    /// Build the `ChartSpec`.
    #[must_use]
    pub fn build(self) -> ChartSpec {
        ChartSpec {
            title: self.title,
            y_desc: self.y_desc,
            file_name: self.file_name,
            label_offset: self.label_offset,
            dataset: self.dataset,
        }
    }
}

/// Render `spec` as a PNG into the configured output directory.
///
/// An existing file with the same name is overwritten.
///
/// # Errors
///
/// Returns [`Error::Io`] if the output directory cannot be created and
/// [`Error::Render`] for any drawing or encoding failure.
pub fn render(spec: &ChartSpec, config: &ReportConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(config.output_dir())?;
    let path = config.output_dir().join(spec.file_name());
    let file = spec.file_name();
    let layout = spec.layout();
    debug!(
        file,
        y_max = layout.y_max(),
        bars = layout.bars().len(),
        "laid out chart"
    );

    {
        let root = BitMapBackend::new(&path, config.size()).into_drawing_area();
        root.fill(&WHITE).map_err(|e| Error::render(file, e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                spec.title(),
                ("sans-serif", TITLE_FONT_SIZE, FontStyle::Bold),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(layout.x_range(), 0f64..layout.y_max())
            .map_err(|e| Error::render(file, e))?;

        // Dense ticks so whole positions are hit; only those get a category label.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(layout.bars().len() * 4 + 1)
            .x_label_formatter(&|x| layout.category_label(*x))
            .y_desc(spec.y_desc())
            .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
            .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
            .draw()
            .map_err(|e| Error::render(file, e))?;

        for bar in layout.bars() {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(bar.left, 0.0), (bar.right, bar.height)],
                    bar.color.filled(),
                )))
                .map_err(|e| Error::render(file, e))?;

            chart
                .draw_series(std::iter::once(Text::new(
                    bar.annotation.clone(),
                    bar.annotation_anchor,
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))
                .map_err(|e| Error::render(file, e))?;
        }

        root.present().map_err(|e| Error::render(file, e))?;
    }
    info!(path = %path.display(), "chart written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execution_spec() -> ChartSpec {
        ChartSpec::builder(
            Dataset::execution_time(),
            "Execution Time Comparison",
            "execution_time_comparison.png",
        )
        .y_desc("Time (ms)")
        .label_offset(10.0)
        .build()
    }

    #[test]
    fn test_layout_bar_geometry() {
        let layout = execution_spec().layout();
        let bars = layout.bars();
        assert_eq!(bars.len(), 2);
        assert!((bars[0].left + 0.25).abs() < f64::EPSILON);
        assert!((bars[0].right - 0.25).abs() < f64::EPSILON);
        assert!((bars[1].left - 0.75).abs() < f64::EPSILON);
        assert!((bars[1].right - 1.25).abs() < f64::EPSILON);
        assert!((bars[1].height - 512.0).abs() < f64::EPSILON);
        assert_eq!(layout.x_range(), -0.5..1.5);
    }

    #[test]
    fn test_layout_colors_distinct() {
        let layout = execution_spec().layout();
        assert_eq!(layout.bars()[0].color, PALETTE[0]);
        assert_eq!(layout.bars()[1].color, PALETTE[1]);
        assert_ne!(layout.bars()[0].color, layout.bars()[1].color);
    }

    #[test]
    fn test_layout_annotations_above_bars() {
        let layout = execution_spec().layout();
        let bar = &layout.bars()[0];
        assert_eq!(bar.annotation, "127 ms");
        assert!((bar.annotation_anchor.0 - 0.0).abs() < f64::EPSILON);
        assert!((bar.annotation_anchor.1 - 137.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_layout_y_max_headroom() {
        let layout = execution_spec().layout();
        assert!((layout.y_max() - 614.4).abs() < 1e-9);
    }

    #[test]
    fn test_category_label_only_on_whole_ticks() {
        let layout = execution_spec().layout();
        assert_eq!(layout.category_label(0.0), "Fog-Based Model");
        assert_eq!(layout.category_label(0.999_999_9), "Cloud-Only Model");
        assert_eq!(layout.category_label(0.5), "");
        assert_eq!(layout.category_label(-0.5), "");
        assert_eq!(layout.category_label(2.0), "");
    }

    #[test]
    fn test_builder_defaults() {
        let spec = ChartSpec::builder(Dataset::energy(), "t", "f.png").build();
        assert_eq!(spec.y_desc(), "");
        assert!(spec.label_offset().abs() < f64::EPSILON);
        assert_eq!(spec.dataset().name(), "energy");
    }
}
