use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.doctor()?;
    let mut result = CmdResult::default();

    if let Some(reason) = &report.unrecoverable {
        result.add_message(CmdMessage::error(format!(
            "Stored widgets are corrupt and no usable backup exists: {}",
            reason
        )));
    } else if !report.rewritten {
        result.add_message(CmdMessage::success(format!(
            "No inconsistencies found ({} widgets).",
            report.widgets
        )));
    } else {
        result.add_message(CmdMessage::warning("Inconsistencies found and fixed:"));
        if report.recovered_from_backup {
            result.add_message(CmdMessage::info(format!(
                "  - Restored {} widget(s) from the backup copy.",
                report.widgets
            )));
        }
        if report.dropped_invalid > 0 {
            result.add_message(CmdMessage::info(format!(
                "  - Removed {} malformed widget record(s).",
                report.dropped_invalid
            )));
        }
    }

    result.report = Some(report);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Widget;
    use crate::store::backend::StorageBackend;
    use crate::store::widget_store::{BACKUP_KEY, PRIMARY_KEY};
    use crate::store::InMemoryStore;
    use crate::test_utils::TestEnv;

    #[test]
    fn doctor_no_inconsistencies() {
        let mut store = InMemoryStore::in_memory();
        let result = run(&mut store).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("No inconsistencies"));
    }

    #[test]
    fn doctor_restores_from_backup() {
        let mut store = InMemoryStore::in_memory();
        store.save_widgets(&[Widget::new("a", "keep me")]).unwrap();
        store.backend().set_item(PRIMARY_KEY, "{broken").unwrap();

        let result = run(&mut store).unwrap();
        assert!(result.messages.iter().any(|m| m.content.contains("Restored 1")));
        assert_eq!(store.get_widgets().unwrap()[0].content, "keep me");
    }

    #[test]
    fn doctor_reports_unrecoverable_store() {
        let mut store = InMemoryStore::in_memory();
        store.backend().set_item(PRIMARY_KEY, "{broken").unwrap();

        let result = run(&mut store).unwrap();
        assert!(result.has_errors());
        assert!(result.report.unwrap().unrecoverable.is_some());
    }

    #[test]
    fn doctor_drops_malformed_records_on_disk() {
        let mut env = TestEnv::new();
        env.write_raw(
            PRIMARY_KEY,
            r#"[{"id":"ok","content":"fine","createdAt":"2024-01-01T00:00:00.000Z","updatedAt":"2024-01-01T00:00:00.000Z"},{"id":"bad"}]"#,
        );

        let result = run(&mut env.store).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Removed 1 malformed")));

        let rewritten = env.read_raw(PRIMARY_KEY).unwrap();
        assert!(rewritten.contains("\"ok\""));
        assert!(!rewritten.contains("\"bad\""));
        assert!(env.read_raw(BACKUP_KEY).is_some());
    }
}
