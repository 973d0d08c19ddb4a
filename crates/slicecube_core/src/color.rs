use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Face, GridError, Result};

/// Sticker color.
///
/// Colors have no ordering semantics beyond identity; the derived `Ord` only
/// exists so that face vectors can be compared as multisets.
#[derive(
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Blue,
    White,
    Black,
    Yellow,
    Orange,
    Purple,
}
impl Color {
    /// Returns an sRGB triple for displaying the color.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Red => [0xd0, 0x10, 0x10],
            Color::Green => [0x10, 0xa0, 0x30],
            Color::Blue => [0x10, 0x40, 0xd0],
            Color::White => [0xf0, 0xf0, 0xf0],
            Color::Black => [0x10, 0x10, 0x10],
            Color::Yellow => [0xf0, 0xd0, 0x10],
            Color::Orange => [0xff, 0x80, 0x00],
            Color::Purple => [0x80, 0x20, 0xa0],
        }
    }
}

/// Colors assigned to the six global faces, plus the color reserved for
/// hidden (interior) faces.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "PaletteFields")]
pub struct Palette {
    faces: [Color; 6],
    hidden: Color,
}
/// Unchecked palette, validated by [`Palette::new()`] when deserializing.
#[derive(Deserialize)]
struct PaletteFields {
    faces: [Color; 6],
    hidden: Color,
}
impl TryFrom<PaletteFields> for Palette {
    type Error = GridError;

    fn try_from(fields: PaletteFields) -> Result<Self> {
        Self::new(fields.faces, fields.hidden)
    }
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            faces: [
                Color::Red,
                Color::Green,
                Color::Blue,
                Color::Yellow,
                Color::Orange,
                Color::White,
            ],
            hidden: Color::Black,
        }
    }
}
impl Palette {
    /// Constructs a palette. `faces` is indexed by [`Face::slot()`].
    ///
    /// Returns an error if a color is used twice.
    pub fn new(faces: [Color; 6], hidden: Color) -> Result<Self> {
        for (i, &color) in faces.iter().enumerate() {
            if color == hidden {
                return Err(GridError::InvalidPalette(format!(
                    "face color {color} is also the hidden color",
                )));
            }
            if faces[..i].contains(&color) {
                return Err(GridError::InvalidPalette(format!(
                    "face color {color} is used more than once",
                )));
            }
        }
        Ok(Self { faces, hidden })
    }

    /// Returns the color of a global face.
    pub fn face_color(&self, face: Face) -> Color {
        self.faces[face.slot()]
    }
    /// Returns the face colors, indexed by [`Face::slot()`].
    pub fn face_colors(&self) -> [Color; 6] {
        self.faces
    }
    /// Returns the color reserved for hidden faces.
    pub fn hidden(&self) -> Color {
        self.hidden
    }
}
