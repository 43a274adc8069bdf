//! Command line options.

use clap::{Parser, ValueEnum};

use crate::term::{GameView, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Visibility {
    Visible,
    Invisible,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "meteor-mayhem", version)]
#[command(about = "Dodge and shoot falling meteors in your terminal", long_about = None)]
#[command(after_help = "Keys: arrows/wasd/hjkl move, e or space fires, q quits.")]
pub struct Args {
    /// Prefer Nerd Font icons (needs a UTF-8 terminal with a patched font)
    #[arg(short, long, help_heading = "User Interface Options")]
    pub nerdfont: bool,

    /// Show or hide the player statistics line
    #[arg(
        short,
        long,
        value_name = "VISIBILITY",
        value_enum,
        num_args = 0..=1,
        default_value_t = Visibility::Visible,
        default_missing_value = "visible",
        help_heading = "User Interface Options"
    )]
    pub statistics: Visibility,
}

/// Options resolved from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub show_statistics: bool,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            theme: Theme::from_nerd_font(self.nerdfont),
            show_statistics: self.statistics == Visibility::Visible,
        }
    }
}

impl Settings {
    pub fn view(&self) -> GameView {
        GameView::new(self.theme, self.show_statistics)
    }
}
