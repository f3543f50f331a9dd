//! Terminal decoration helpers, all gated on `DisplayOptions::enable_color`
//! so every formatter has exactly one plain-text shape to test against.

use owo_colors::OwoColorize;

use crate::presentation::DisplayOptions;

pub fn cyan(s: &str, opts: &DisplayOptions) -> String {
    if opts.enable_color {
        s.cyan().to_string()
    } else {
        s.to_string()
    }
}

pub fn yellow(s: &str, opts: &DisplayOptions) -> String {
    if opts.enable_color {
        s.yellow().to_string()
    } else {
        s.to_string()
    }
}

pub fn green(s: &str, opts: &DisplayOptions) -> String {
    if opts.enable_color {
        s.green().to_string()
    } else {
        s.to_string()
    }
}

pub fn blue(s: &str, opts: &DisplayOptions) -> String {
    if opts.enable_color {
        s.blue().to_string()
    } else {
        s.to_string()
    }
}

pub fn magenta(s: &str, opts: &DisplayOptions) -> String {
    if opts.enable_color {
        s.magenta().to_string()
    } else {
        s.to_string()
    }
}

pub fn gray(s: &str, opts: &DisplayOptions) -> String {
    if opts.enable_color {
        s.bright_black().to_string()
    } else {
        s.to_string()
    }
}

pub fn bold(s: &str, opts: &DisplayOptions) -> String {
    if opts.enable_color {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}
