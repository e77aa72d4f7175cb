use pigeon_core::PigeonId;
use pigeon_core::geom::{self, Point, Rect};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn to_rect(&self) -> Rect {
        geom::rect(self.x, self.y, self.width, self.height)
    }
}

/// A straight connector line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }

    pub fn start(&self) -> Point {
        geom::point(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        geom::point(self.x2, self.y2)
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationBand {
    Subject,
    First,
    Second,
    Third,
    FourthPlus,
}

impl GenerationBand {
    pub fn of(generation: usize) -> Self {
        match generation {
            0 => GenerationBand::Subject,
            1 => GenerationBand::First,
            2 => GenerationBand::Second,
            3 => GenerationBand::Third,
            _ => GenerationBand::FourthPlus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    #[default]
    Plain,
    Cock,
    Hen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotRender {
    Details,
    Image { path: Option<PathBuf> },
    Hidden,
}

/// Where a text line belongs inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Band,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    Extra(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxLine {
    pub role: LineRole,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    pub index: usize,
    pub generation: usize,
    pub band: GenerationBand,
    /// `None` for an unknown ancestor; the box is still laid out, just blank.
    pub pigeon: Option<PigeonId>,
    pub render: SlotRender,
    pub rect: BoxRect,
    /// Edge facing the subject; connectors towards the parent column leave from here.
    pub inner_side: Side,
    /// No visible column lies between this box and the subject.
    pub first_column: bool,
    /// Outermost generation: no connectors leave the outer edge.
    pub last_column: bool,
    pub lines_allowed: u32,
    pub line_height: f64,
    pub lines: Vec<BoxLine>,
    pub sex_sign: Option<char>,
    pub edge: EdgeStyle,
    /// From the inner edge to the middle of the gap towards the parent column.
    pub inner_stub: Option<Segment>,
    /// From the outer edge to the middle of the gap towards the child column.
    pub outer_stub: Option<Segment>,
    /// Vertical line joining the sire's and dam's stubs.
    pub trunk: Option<Segment>,
}

impl SlotLayout {
    pub fn connectors(&self) -> impl Iterator<Item = &Segment> {
        [&self.inner_stub, &self.outer_stub, &self.trunk]
            .into_iter()
            .flatten()
    }
}

/// Box and spacing totals of one generation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandSummary {
    pub generation: usize,
    pub count: usize,
    pub cell_height: f64,
    pub box_height: f64,
    /// Free space per box, split evenly above and below it.
    pub spacing: f64,
}

impl BandSummary {
    pub fn total_height(&self) -> f64 {
        self.count as f64 * (self.box_height + self.spacing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedigreeLayout {
    pub depth: usize,
    pub usable_width: f64,
    pub usable_height: f64,
    pub start_y: f64,
    pub columns: usize,
    pub column_width: f64,
    pub box_width: f64,
    pub bands: Vec<BandSummary>,
    pub slots: Vec<SlotLayout>,
    pub bounds: Option<Bounds>,
}

impl PedigreeLayout {
    pub fn slot(&self, index: usize) -> Option<&SlotLayout> {
        self.slots.get(index)
    }

    pub fn band_summaries(&self) -> &[BandSummary] {
        &self.bands
    }

    pub fn generation(&self, generation: usize) -> impl Iterator<Item = &SlotLayout> {
        self.slots.iter().filter(move |s| s.generation == generation)
    }
}
