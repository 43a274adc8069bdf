//! Glyph sets.
//!
//! The theme is picked once at startup and handed to the view; nothing else
//! branches on which glyph set is active.

use std::fmt;

use crate::fb::{CellStyle, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub meteor: &'static str,
    pub player: &'static str,
    pub ray: &'static str,
    /// Label in front of the health value.
    pub heart: &'static str,
    /// Label in front of the rays value.
    pub rays_icon: &'static str,
    /// Label in front of the score value.
    pub score_icon: &'static str,
    pub separator: &'static str,
    /// Extra columns added to the centered status line position.
    pub status_offset: i16,
    pub meteor_style: CellStyle,
    pub player_style: CellStyle,
    pub ray_style: CellStyle,
    pub status_style: CellStyle,
}

const METEOR_STYLE: CellStyle = CellStyle::fg(Color::Red);
const PLAYER_STYLE: CellStyle = CellStyle::fg(Color::Yellow).bold();
const RAY_STYLE: CellStyle = CellStyle::fg(Color::Cyan);
const STATUS_STYLE: CellStyle = CellStyle::fg(Color::Magenta);

impl Theme {
    /// Plain ASCII glyphs, safe on any terminal.
    pub const fn ascii() -> Self {
        Self {
            meteor: "*",
            player: "^",
            ray: "|",
            heart: "health: ",
            rays_icon: "rays: ",
            score_icon: "score: ",
            separator: ">",
            status_offset: 0,
            meteor_style: METEOR_STYLE,
            player_style: PLAYER_STYLE,
            ray_style: RAY_STYLE,
            status_style: STATUS_STYLE,
        }
    }

    /// Nerd Font icons. Needs a patched font in the terminal.
    pub const fn nerd_font() -> Self {
        Self {
            meteor: "\u{ef23} ",
            player: "\u{f0463} ",
            ray: "\u{23fd} ",
            heart: "\u{f02d1} ",
            rays_icon: "\u{f140b} ",
            score_icon: "\u{f127e}  ",
            separator: "\u{eab6}",
            status_offset: 0,
            meteor_style: METEOR_STYLE,
            player_style: PLAYER_STYLE,
            ray_style: RAY_STYLE,
            status_style: STATUS_STYLE,
        }
    }

    pub const fn from_nerd_font(nerd_font: bool) -> Self {
        if nerd_font {
            Self::nerd_font()
        } else {
            Self::ascii()
        }
    }

    /// Write the status line, e.g. ` health: 100 > rays: 5 > score: 0 `.
    pub fn write_status(
        &self,
        out: &mut impl fmt::Write,
        health: i32,
        rays: u32,
        score: u32,
    ) -> fmt::Result {
        write!(
            out,
            " {}{} {} {}{} {} {}{} ",
            self.heart,
            health,
            self.separator,
            self.rays_icon,
            rays,
            self.separator,
            self.score_icon,
            score
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ascii()
    }
}
