//! Debounced editing session.
//!
//! Each line read from `input` is the widget's complete new content, as a
//! text field would report it after every keystroke. Lines are fed through a
//! [`Debouncer`], so a burst of edits results in a single store write once
//! the quiet window passes. At end of input the pending edit is flushed.

use crate::commands::helpers::preview;
use crate::commands::{CmdMessage, CmdResult};
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::store::DataStore;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

pub async fn run<S, R>(store: &mut S, id: &str, input: R, delay: Duration) -> Result<CmdResult>
where
    S: DataStore,
    R: AsyncBufRead + Unpin,
{
    let mut result = CmdResult::default();
    if !store.get_widgets()?.iter().any(|w| w.id == id) {
        result.add_message(CmdMessage::error(format!("Widget not found: {}", id)));
        return Ok(result);
    }

    let (mut debouncer, mut saves) = Debouncer::new(delay);
    let mut lines = input.lines();
    let mut edits = 0usize;
    let mut writes = 0usize;

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(content) => {
                    edits += 1;
                    debouncer.call(content);
                }
                None => break,
            },
            Some(content) = saves.recv() => {
                writes += apply(store, id, &content, &mut result)?;
            }
        }
    }

    debouncer.flush();
    while let Ok(content) = saves.try_recv() {
        writes += apply(store, id, &content, &mut result)?;
    }

    debug!(id, edits, writes, "edit session finished");
    result.add_message(CmdMessage::info(format!(
        "{} edit(s), {} write(s).",
        edits, writes
    )));
    Ok(result)
}

fn apply<S: DataStore>(
    store: &mut S,
    id: &str,
    content: &str,
    result: &mut CmdResult,
) -> Result<usize> {
    match store.update_widget(id, content)? {
        Some(widget) => {
            result.add_message(CmdMessage::success(format!(
                "Saved ({}): {}",
                widget.id,
                preview(&widget.content)
            )));
            result.affected_widgets.retain(|w| w.id != widget.id);
            result.affected_widgets.push(widget);
            Ok(1)
        }
        None => {
            result.add_message(CmdMessage::error(format!(
                "Widget disappeared while editing: {}",
                id
            )));
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Widget;
    use crate::store::InMemoryStore;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::in_memory();
        store.add_widget(Widget::new("w1", "start")).unwrap();
        store
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_edits_is_written_once() {
        let mut store = seeded();
        let writes_before = store.backend().write_count();
        let input: &[u8] = b"h\nhe\nhel\nhello\n";

        let result = run(&mut store, "w1", input, Duration::from_millis(500))
            .await
            .unwrap();

        assert_eq!(store.get_widgets().unwrap()[0].content, "hello");
        // one backup + one primary write
        assert_eq!(store.backend().write_count() - writes_before, 2);
        assert_eq!(result.affected_widgets.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "4 edit(s), 1 write(s)."));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_widget_is_reported_without_reading_input() {
        let mut store = seeded();
        let input: &[u8] = b"ignored\n";

        let result = run(&mut store, "nope", input, Duration::from_millis(500))
            .await
            .unwrap();
        assert!(result.has_errors());
        assert_eq!(store.get_widgets().unwrap()[0].content, "start");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_input_writes_nothing() {
        let mut store = seeded();
        let writes_before = store.backend().write_count();
        let input: &[u8] = b"";

        run(&mut store, "w1", input, Duration::from_millis(500))
            .await
            .unwrap();
        assert_eq!(store.backend().write_count(), writes_before);
    }
}
