//! # Rendering Module
//!
//! Turns `CmdResult` values into terminal text. Layout calculations (width,
//! truncation, padding) are Unicode-aware and stay here; colors come from
//! [`super::styles::STYLES`].
//!
//! Messages are split by level: errors go to stderr, everything else to
//! stdout, so `widgets export > file.json` never captures a failure notice.

use super::styles::STYLES;
use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use widgetapp::commands::{CmdMessage, CmdResult, MessageLevel};
use widgetapp::model::{format_timestamp, Widget};
use widgetapp::validation::ContentValidation;

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 16;
pub const SEPARATOR: &str = "---";

/// Rendered output, split by destination stream.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: String,
}

impl Rendered {
    pub fn has_stderr(&self) -> bool {
        !self.stderr.is_empty()
    }
}

/// One line per widget: id, content preview, relative update time.
pub fn render_widget_list(widgets: &[Widget]) -> String {
    if widgets.is_empty() {
        return "No widgets yet. Add one with `widgets add <text>`.\n".to_string();
    }

    let id_width = widgets.iter().map(|w| w.id.width()).max().unwrap_or(0);
    let mut out = String::new();

    for widget in widgets {
        let available = LINE_WIDTH.saturating_sub(id_width + TIME_WIDTH + 4);
        let preview = truncate_to_width(&widget.content, available);
        let padding = available.saturating_sub(preview.width());
        let time_ago = format!(
            "{:>width$}",
            format_time_ago(widget.updated_at),
            width = TIME_WIDTH
        );
        out.push_str(&format!(
            "{}{}  {}{}  {}\n",
            STYLES.id.apply_to(&widget.id),
            " ".repeat(id_width - widget.id.width()),
            STYLES.content.apply_to(&preview),
            " ".repeat(padding),
            STYLES.muted.apply_to(time_ago),
        ));
    }
    out
}

/// Full view of each widget, separated by `---`.
pub fn render_full_widgets(widgets: &[Widget]) -> String {
    let mut blocks = Vec::with_capacity(widgets.len());
    for widget in widgets {
        blocks.push(format!(
            "{}\n{}\n\n{}\n",
            STYLES.id.apply_to(&widget.id),
            STYLES.muted.apply_to(format!(
                "created {}  updated {}",
                format_timestamp(&widget.created_at),
                format_timestamp(&widget.updated_at)
            )),
            STYLES.content.apply_to(&widget.content),
        ));
    }
    blocks.join(&format!("{}\n", STYLES.faint.apply_to(SEPARATOR)))
}

pub fn render_validation(validation: &ContentValidation) -> String {
    let status = if validation.is_valid {
        STYLES.success.apply_to("ok")
    } else {
        STYLES.error.apply_to("too long")
    };
    format!("{} ({} characters)\n", status, validation.character_count)
}

fn render_message(message: &CmdMessage) -> String {
    let styled = match message.level {
        MessageLevel::Info => STYLES.info.apply_to(&message.content),
        MessageLevel::Success => STYLES.success.apply_to(&message.content),
        MessageLevel::Warning => STYLES.warning.apply_to(&message.content),
        MessageLevel::Error => STYLES.error.apply_to(&message.content),
    };
    format!("{}\n", styled)
}

/// Render messages, routing error-level ones to stderr.
pub fn render_messages(messages: &[CmdMessage]) -> Rendered {
    let mut rendered = Rendered::default();
    for message in messages {
        let line = render_message(message);
        if message.level == MessageLevel::Error {
            rendered.stderr.push_str(&line);
        } else {
            rendered.stdout.push_str(&line);
        }
    }
    rendered
}

/// Serialize a whole result for `--json`.
pub fn render_json(result: &CmdResult) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(result)?;
    text.push('\n');
    Ok(text)
}

/// Truncate `text` to at most `max_width` display columns, flattening line
/// breaks and marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.width() <= max_width {
        return flat;
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
