//! Report options controlling pedigree box density and content.
//!
//! Field selectors are resolved to [`PigeonField`] when the configuration is loaded, so an
//! unknown attribute name fails here and never during layout.

use crate::{Error, Result};
use pigeon_core::PigeonField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound for the per-generation text line allowance.
pub const MAX_BOX_LINES: u32 = 12;

/// Default box heights for generation bands 1, 2, 3 and 4+, relative to band 1.
pub const DEFAULT_HEIGHT_RATIOS: [f64; 4] = [1.0, 1.0, 0.5, 1.0 / 3.0];
pub const DEFAULT_COLUMN_GAP_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationLines {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub fourth_plus: u32,
}

impl Default for GenerationLines {
    fn default() -> Self {
        Self {
            first: 6,
            second: 4,
            third: 2,
            fourth_plus: 1,
        }
    }
}

impl GenerationLines {
    pub fn uniform(lines: u32) -> Self {
        Self {
            first: lines,
            second: lines,
            third: lines,
            fourth_plus: lines,
        }
    }

    /// Configured line count for a generation. The subject shares the first band's allowance.
    pub fn for_generation(&self, generation: usize) -> u32 {
        match generation {
            0 | 1 => self.first,
            2 => self.second,
            3 => self.third,
            _ => self.fourth_plus,
        }
    }

    /// Lines a box actually reserves: the band line is always drawn.
    pub fn allowed(&self, generation: usize) -> u32 {
        self.for_generation(generation).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BoxField {
    #[default]
    Empty,
    Pigeon(PigeonField),
}

impl FromStr for BoxField {
    type Err = pigeon_core::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("empty") {
            return Ok(BoxField::Empty);
        }
        name.parse().map(BoxField::Pigeon)
    }
}

impl TryFrom<String> for BoxField {
    type Error = pigeon_core::Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BoxField> for String {
    fn from(value: BoxField) -> Self {
        value.to_string()
    }
}

impl fmt::Display for BoxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxField::Empty => f.write_str("empty"),
            BoxField::Pigeon(field) => f.write_str(field.name()),
        }
    }
}

/// What goes in each corner of a details box, besides the band in the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxContent {
    pub top_right: BoxField,
    pub middle_left: BoxField,
    pub middle_right: BoxField,
    pub bottom_left: BoxField,
}

impl Default for BoxContent {
    fn default() -> Self {
        Self {
            top_right: BoxField::Pigeon(PigeonField::Name),
            middle_left: BoxField::Pigeon(PigeonField::Colour),
            middle_right: BoxField::Pigeon(PigeonField::Sex),
            bottom_left: BoxField::Pigeon(PigeonField::Strain),
        }
    }
}

impl BoxContent {
    pub fn empty() -> Self {
        Self {
            top_right: BoxField::Empty,
            middle_left: BoxField::Empty,
            middle_right: BoxField::Empty,
            bottom_left: BoxField::Empty,
        }
    }
}

/// How slot 0, the pigeon the pedigree is printed for, is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectMode {
    Image,
    #[default]
    Details,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomGeometry {
    /// Box heights for generation bands 1, 2, 3 and 4+, relative to each other.
    pub height_ratios: [f64; 4],
    /// Share of each column left empty for connectors.
    pub column_gap_ratio: f64,
    pub mirrored: bool,
}

impl Default for CustomGeometry {
    fn default() -> Self {
        Self {
            height_ratios: DEFAULT_HEIGHT_RATIOS,
            column_gap_ratio: DEFAULT_COLUMN_GAP_RATIO,
            mirrored: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PedigreeStyle {
    /// Subject on the left, ancestors growing to the right.
    #[default]
    Original,
    /// Mirror image of [`PedigreeStyle::Original`].
    Swapped,
    Custom(CustomGeometry),
}

impl PedigreeStyle {
    pub fn geometry(&self) -> CustomGeometry {
        match self {
            PedigreeStyle::Original => CustomGeometry::default(),
            PedigreeStyle::Swapped => CustomGeometry {
                mirrored: true,
                ..CustomGeometry::default()
            },
            PedigreeStyle::Custom(geometry) => *geometry,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfiguration {
    /// `custom` is written as a single-key map in both JSON and YAML.
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub style: PedigreeStyle,
    pub lines: GenerationLines,
    pub content: BoxContent,
    pub subject: SubjectMode,
    /// Fill leftover lines with the pigeon's extra fields.
    pub show_comments: bool,
    pub show_sex_sign: bool,
    pub color_edges: bool,
}

impl Default for LayoutConfiguration {
    fn default() -> Self {
        Self {
            style: PedigreeStyle::Original,
            lines: GenerationLines::default(),
            content: BoxContent::default(),
            subject: SubjectMode::Details,
            show_comments: true,
            show_sex_sign: true,
            color_edges: true,
        }
    }
}

impl LayoutConfiguration {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let lines = [
            ("first", self.lines.first),
            ("second", self.lines.second),
            ("third", self.lines.third),
            ("fourth_plus", self.lines.fourth_plus),
        ];
        for (band, count) in lines {
            if count > MAX_BOX_LINES {
                return Err(Error::InvalidConfig {
                    message: format!(
                        "lines.{band} = {count} is out of range (0..={MAX_BOX_LINES})"
                    ),
                });
            }
        }

        let geometry = self.style.geometry();
        let mut previous = f64::INFINITY;
        for (i, ratio) in geometry.height_ratios.iter().copied().enumerate() {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(Error::InvalidConfig {
                    message: format!("height_ratios[{i}] must be a positive number, got {ratio}"),
                });
            }
            if ratio > previous {
                return Err(Error::InvalidConfig {
                    message: format!(
                        "height_ratios must not increase by generation: [{i}] = {ratio} > {previous}"
                    ),
                });
            }
            previous = ratio;
        }

        let gap = geometry.column_gap_ratio;
        if !(gap.is_finite() && gap > 0.0 && gap < 0.5) {
            return Err(Error::InvalidConfig {
                message: format!("column_gap_ratio must be in (0, 0.5), got {gap}"),
            });
        }
        Ok(())
    }
}
