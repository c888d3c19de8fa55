//! Notes app: model and view.

use serde::{Deserialize, Serialize};

use crate::store::Store;

pub const NOTES_KEY: &str = "notes";

/// A single note. Identity is its position in the stored list; notes are
/// append-only and never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
}

pub(crate) fn render(store: &Store) -> String {
    let notes: Vec<Note> = store.load(NOTES_KEY, Vec::new());

    if notes.is_empty() {
        return "No notes yet.\n\nType 'new [title]' to create your first note!".to_string();
    }

    let mut output = String::from("Your Notes:\n\n");
    for (index, note) in notes.iter().enumerate() {
        output.push_str(&format!("  {index}: {}\n", note.title));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{render, Note, NOTES_KEY};
    use crate::store::Store;
    use tempfile::TempDir;

    fn store_with_notes(titles: &[&str]) -> (TempDir, Store) {
        let dir = TempDir::new().expect("temp dir");
        let store = Store::new(dir.path().to_path_buf());
        let notes: Vec<Note> = titles
            .iter()
            .map(|title| Note {
                title: title.to_string(),
                content: String::new(),
            })
            .collect();
        assert!(store.save(NOTES_KEY, &notes));
        (dir, store)
    }

    #[test]
    fn empty_store_prompts_for_first_note() {
        let dir = TempDir::new().expect("temp dir");
        let store = Store::new(dir.path().to_path_buf());

        let view = render(&store);
        assert!(view.starts_with("No notes yet."));
        assert!(view.contains("new [title]"));
    }

    #[test]
    fn notes_render_in_insertion_order() {
        let (_dir, store) = store_with_notes(&["first", "second"]);

        let view = render(&store);
        assert!(view.starts_with("Your Notes:"));
        assert!(view.contains("  0: first\n"));
        assert!(view.contains("  1: second\n"));
    }

    #[test]
    fn render_is_idempotent() {
        let (_dir, store) = store_with_notes(&["only"]);
        assert_eq!(render(&store), render(&store));
    }
}
