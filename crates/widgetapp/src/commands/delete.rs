use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        if store.delete_widget(id)? {
            result.add_message(CmdMessage::success(format!("Widget deleted: {}", id)));
        } else {
            result.add_message(CmdMessage::error(format!("Widget not found: {}", id)));
        }
    }

    Ok(result)
}
