use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_widgets(store.get_widgets()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let mut store = InMemoryStore::in_memory();
        for text in ["one", "two", "three"] {
            create::run(&mut store, text.into()).unwrap();
        }

        let listed: Vec<_> = run(&store)
            .unwrap()
            .listed_widgets
            .into_iter()
            .map(|w| w.content)
            .collect();
        assert_eq!(listed, vec!["one", "two", "three"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::in_memory();
        assert!(run(&store).unwrap().listed_widgets.is_empty());
    }
}
