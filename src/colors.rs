//! Terminal colour selection

use std::fmt;
use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

/// How `--color`/`--no-color` resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `--no-color` beats `--color`
    pub fn from_flags(color: bool, no_color: bool) -> Self {
        match (color, no_color) {
            (_, true) => ColorMode::Never,
            (true, false) => ColorMode::Always,
            (false, false) => ColorMode::Auto,
        }
    }

    /// `Auto` honours `NO_COLOR`, then requires stdout to be a terminal
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
            }
        }
    }
}

/// Role of a piece of output text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
    Info,
    Dim,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Error => "\x1b[31m",
            Tone::Success => "\x1b[32m",
            Tone::Info => "\x1b[36m",
            Tone::Dim => "\x1b[2m",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, tone: Tone, text: impl fmt::Display) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", tone.code())
        } else {
            text.to_string()
        }
    }
}
