use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StoreError};
use crate::model::parse_collection;
use crate::store::DataStore;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Add imported widgets after the existing ones
    #[default]
    Append,
    /// Replace the whole collection
    Replace,
}

/// Import a JSON array of widgets. Every element must be a valid widget;
/// one bad element rejects the whole import.
pub fn run<S: DataStore>(store: &mut S, raw: &str, mode: ImportMode) -> Result<CmdResult> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| StoreError::Parse(format!("import data is not valid JSON: {}", e)))?;
    let imported = parse_collection(&value)?;
    let count = imported.len();

    let widgets = match mode {
        ImportMode::Append => {
            let mut existing = store.read_widgets()?;
            existing.extend(imported.iter().cloned());
            existing
        }
        ImportMode::Replace => imported.clone(),
    };
    store.save_widgets(&widgets)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Imported {} widget(s).", count)));
    result.affected_widgets = imported.iter().map(|w| w.sanitized()).collect();
    Ok(result)
}
