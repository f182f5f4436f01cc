//! Terminal styles for the widgets CLI.
//!
//! Output code refers to styles by meaning (`muted`, `error`) rather than by
//! color, so the palette can change in one place. `console` drops the escape
//! codes on its own when stdout or stderr is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub struct Styles {
    pub id: Style,
    pub content: Style,
    pub muted: Style,
    pub faint: Style,
    pub success: Style,
    pub info: Style,
    pub warning: Style,
    pub error: Style,
}

pub static STYLES: Lazy<Styles> = Lazy::new(|| Styles {
    id: Style::new().color256(178),
    content: Style::new(),
    muted: Style::new().color256(245).italic(),
    faint: Style::new().color256(240),
    success: Style::new().green(),
    info: Style::new().cyan(),
    warning: Style::new().yellow().bold(),
    error: Style::new().red().bold(),
});
