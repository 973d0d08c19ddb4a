//! Unfolded view of the six exterior faces.
//!
//! ```text
//!        +Y
//!   -X   +Z   +X   -Z
//!        -Y
//! ```

use std::fmt;

use owo_colors::OwoColorize;
use slicecube_core::prelude::*;
use slicecube_core::render::exterior_face_colors;

/// Faces of the net, by band. `None` is a blank space.
const LAYOUT: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::PosY), None, None],
    [
        Some(Face::NegX),
        Some(Face::PosZ),
        Some(Face::PosX),
        Some(Face::NegZ),
    ],
    [None, Some(Face::NegY), None, None],
];

/// Displays the exterior of a grid as a net of six faces.
pub(crate) struct Net<'a> {
    grid: &'a Grid,
    /// Whether to draw stickers using terminal colors instead of letters.
    colored: bool,
}
impl<'a> Net<'a> {
    pub fn new(grid: &'a Grid, colored: bool) -> Self {
        Self { grid, colored }
    }

    fn write_sticker(&self, f: &mut fmt::Formatter<'_>, color: Color) -> fmt::Result {
        if self.colored {
            let [r, g, b] = color.rgb();
            write!(f, "{}", "  ".on_truecolor(r, g, b))
        } else {
            write!(f, "{} ", color_letter(color))
        }
    }
}
impl fmt::Display for Net<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.grid.size().get() as usize;
        // Each sticker is two characters wide, and faces are separated by one
        // space.
        let face_width = 2 * n + 1;

        for band in LAYOUT {
            let faces = band.map(|face| Some((face?, exterior_face_colors(self.grid, face?))));

            write!(f, " ")?;
            for face in &faces {
                match face {
                    Some((face, _)) => write!(f, "{:<face_width$}", face.to_string())?,
                    None => write!(f, "{:face_width$}", "")?,
                }
            }
            writeln!(f)?;

            for row in 0..n {
                write!(f, " ")?;
                for face in &faces {
                    match face {
                        Some((_, colors)) => {
                            for &color in &colors[row] {
                                self.write_sticker(f, color)?;
                            }
                            write!(f, " ")?;
                        }
                        None => write!(f, "{:face_width$}", "")?,
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn color_letter(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Green => 'G',
        Color::Blue => 'B',
        Color::White => 'W',
        Color::Black => 'K',
        Color::Yellow => 'Y',
        Color::Orange => 'O',
        Color::Purple => 'P',
    }
}
