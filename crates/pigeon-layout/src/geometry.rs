//! Column and band arithmetic shared by every pedigree style.
//!
//! Generation `g` splits the usable height into `2^g` equal cells and centres one box in each,
//! so a parent's midline is always the mean of its two children's midlines. Box heights are a
//! per-band ratio of one base height, picked so the tightest band still fits its cells.

use crate::config::{CustomGeometry, LayoutConfiguration, SubjectMode};
use crate::model::{BandSummary, BoxRect, Side};
use crate::{Error, Result};
use pigeon_core::pedigree::position_in_generation;

/// Share of a cell the box may occupy in the tightest band.
const CELL_FILL: f64 = 0.9;

#[derive(Debug, Clone)]
pub(crate) struct Geometry {
    depth: usize,
    mirrored: bool,
    subject_column: bool,
    columns: usize,
    column_width: f64,
    gap: f64,
    box_width: f64,
    usable_width: f64,
    usable_height: f64,
    start_y: f64,
    heights: Vec<f64>,
}

impl Geometry {
    pub(crate) fn new(
        depth: usize,
        config: &LayoutConfiguration,
        usable_width: f64,
        usable_height: f64,
        start_y: f64,
    ) -> Result<Self> {
        check_area("usable_width", usable_width)?;
        check_area("usable_height", usable_height)?;
        if !start_y.is_finite() {
            return Err(Error::InvalidArea {
                message: format!("start_y must be finite, got {start_y}"),
            });
        }

        let CustomGeometry {
            height_ratios,
            column_gap_ratio,
            mirrored,
        } = config.style.geometry();

        let subject_column = config.subject != SubjectMode::Hidden;
        let columns = (if subject_column { depth } else { depth - 1 }).max(1);
        let column_width = usable_width / columns as f64;
        let gap = column_width * column_gap_ratio;

        let ratio = |generation: usize| height_ratios[generation.clamp(1, 4) - 1];
        let base = (0..depth)
            .map(|g| CELL_FILL * cell_height(usable_height, g) / ratio(g))
            .fold(f64::INFINITY, f64::min);
        let heights = (0..depth).map(|g| base * ratio(g)).collect();

        Ok(Self {
            depth,
            mirrored,
            subject_column,
            columns,
            column_width,
            gap,
            box_width: column_width - gap,
            usable_width,
            usable_height,
            start_y,
            heights,
        })
    }

    pub(crate) fn columns(&self) -> usize {
        self.columns
    }

    pub(crate) fn column_width(&self) -> f64 {
        self.column_width
    }

    pub(crate) fn box_width(&self) -> f64 {
        self.box_width
    }

    pub(crate) fn column_of(&self, generation: usize) -> Option<usize> {
        if self.subject_column {
            Some(generation)
        } else {
            generation.checked_sub(1)
        }
    }

    pub(crate) fn is_last_generation(&self, generation: usize) -> bool {
        generation + 1 >= self.depth
    }

    pub(crate) fn box_height(&self, generation: usize) -> f64 {
        self.heights[generation]
    }

    pub(crate) fn inner_side(&self) -> Side {
        if self.mirrored {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub(crate) fn mid_y(&self, index: usize, generation: usize) -> f64 {
        let cell = cell_height(self.usable_height, generation);
        self.start_y + (position_in_generation(index) as f64 + 0.5) * cell
    }

    /// Maps an x measured from the subject side onto the page.
    fn page_x(&self, x: f64) -> f64 {
        if self.mirrored {
            self.usable_width - x
        } else {
            x
        }
    }

    pub(crate) fn inner_x(&self, column: usize) -> f64 {
        self.page_x(column as f64 * self.column_width)
    }

    pub(crate) fn outer_x(&self, column: usize) -> f64 {
        self.page_x(column as f64 * self.column_width + self.box_width)
    }

    /// Middle of the gap between `column` and `column + 1`.
    pub(crate) fn gap_mid_x(&self, column: usize) -> f64 {
        self.page_x(column as f64 * self.column_width + self.box_width + self.gap / 2.0)
    }

    pub(crate) fn box_rect(&self, index: usize, generation: usize, column: usize) -> BoxRect {
        let height = self.box_height(generation);
        let x = self.inner_x(column).min(self.outer_x(column));
        BoxRect {
            x,
            y: self.mid_y(index, generation) - height / 2.0,
            width: self.box_width,
            height,
        }
    }

    /// Zero-sized placeholder for the subject when it gets no column.
    pub(crate) fn hidden_rect(&self) -> BoxRect {
        BoxRect {
            x: self.page_x(0.0),
            y: self.mid_y(0, 0),
            width: 0.0,
            height: 0.0,
        }
    }

    pub(crate) fn band_summaries(&self) -> Vec<BandSummary> {
        (0..self.depth)
            .map(|generation| {
                let cell = cell_height(self.usable_height, generation);
                let box_height = self.box_height(generation);
                BandSummary {
                    generation,
                    count: 1 << generation,
                    cell_height: cell,
                    box_height,
                    spacing: cell - box_height,
                }
            })
            .collect()
    }
}

fn cell_height(usable_height: f64, generation: usize) -> f64 {
    usable_height / (1u64 << generation) as f64
}

fn check_area(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArea {
            message: format!("{name} must be a positive finite number, got {value}"),
        })
    }
}
