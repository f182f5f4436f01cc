use crate::commands::helpers::{preview, report_validation};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Widget;
use crate::store::DataStore;
use crate::validation::{validate_content, ContentValidation};

pub fn run<S: DataStore>(store: &mut S, id: &str, content: &str) -> Result<CmdResult> {
    let validation = validate_content(content);
    let updated = store.update_widget(id, content)?;
    Ok(finish(id, updated, Some(validation)))
}

/// Same as [`run`] for content read as raw bytes (stdin, files).
pub fn run_bytes<S: DataStore>(store: &mut S, id: &str, content: &[u8]) -> Result<CmdResult> {
    let validation = std::str::from_utf8(content).ok().map(validate_content);
    let updated = store.update_widget_bytes(id, content)?;
    Ok(finish(id, updated, validation))
}

fn finish(
    id: &str,
    updated: Option<Widget>,
    validation: Option<ContentValidation>,
) -> CmdResult {
    let mut result = CmdResult::default();
    match updated {
        Some(widget) => {
            if let Some(validation) = &validation {
                report_validation(&mut result, validation);
            }
            result.add_message(CmdMessage::success(format!(
                "Widget updated ({}): {}",
                widget.id,
                preview(&widget.content)
            )));
            result.affected_widgets.push(widget);
        }
        None => result.add_message(CmdMessage::error(format!("Widget not found: {}", id))),
    }
    result.validation = validation;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::InMemoryStore;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::in_memory();
        store.add_widget(Widget::new("w1", "Old")).unwrap();
        store
    }

    #[test]
    fn updates_widget_content() {
        let mut store = seeded();
        let result = run(&mut store, "w1", "New").unwrap();

        assert_eq!(result.affected_widgets[0].content, "New");
        assert_eq!(store.get_widgets().unwrap()[0].content, "New");
    }

    #[test]
    fn unknown_id_is_a_message_not_an_error() {
        let mut store = seeded();
        let result = run(&mut store, "missing", "New").unwrap();
        assert!(result.has_errors());
        assert!(result.affected_widgets.is_empty());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut store = seeded();
        let err = run_bytes(&mut store, "w1", &[0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidContent(_)));
        assert_eq!(store.get_widgets().unwrap()[0].content, "Old");
    }

    #[test]
    fn bytes_update_runs_validation() {
        let mut store = seeded();
        let result = run_bytes(&mut store, "w1", "Fresh".as_bytes()).unwrap();
        assert_eq!(result.validation.unwrap().character_count, 5);
    }
}
