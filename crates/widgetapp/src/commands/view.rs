use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let widgets = store.get_widgets()?;
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        match widgets.iter().find(|w| w.id == id) {
            Some(widget) => result.listed_widgets.push(widget.clone()),
            None => result.add_message(CmdMessage::error(format!("Widget not found: {}", id))),
        }
    }

    Ok(result)
}
