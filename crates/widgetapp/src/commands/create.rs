use crate::commands::helpers::{preview, report_validation};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{sanitize_content, Widget};
use crate::store::DataStore;
use crate::validation::validate_content;
use uuid::Uuid;

pub fn run<S: DataStore>(store: &mut S, content: String) -> Result<CmdResult> {
    let validation = validate_content(&content);
    let widget = Widget::new(Uuid::new_v4().to_string(), content);
    store.add_widget(widget.clone())?;

    let mut result = CmdResult::default();
    report_validation(&mut result, &validation);
    result.add_message(CmdMessage::success(format!(
        "Widget created ({}): {}",
        widget.id,
        preview(&sanitize_content(&widget.content))
    )));
    result.affected_widgets.push(widget.sanitized());
    result.validation = Some(validation);
    Ok(result)
}
