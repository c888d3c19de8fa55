//! Todo app: model and view.

use serde::{Deserialize, Serialize};

use crate::store::Store;

pub const TODOS_KEY: &str = "todos";

/// A single task. Identity is its position in the stored list; `done` is the
/// only field that ever changes, and only from false to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub task: String,
    pub done: bool,
}

/// Render pending tasks first, then completed. Indices are the original
/// collection indices (not positions within a section) so they stay valid
/// arguments to `done [id]`.
pub(crate) fn render(store: &Store) -> String {
    let todos: Vec<Todo> = store.load(TODOS_KEY, Vec::new());

    if todos.is_empty() {
        return "No tasks yet.\n\nType 'add [task]' to create your first task!".to_string();
    }

    let mut output = String::new();

    if todos.iter().any(|todo| !todo.done) {
        output.push_str("Pending Tasks:\n\n");
        for (index, todo) in todos.iter().enumerate() {
            if !todo.done {
                output.push_str(&format!("  {index}: {}\n", todo.task));
            }
        }
    }

    if todos.iter().any(|todo| todo.done) {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str("Completed Tasks:\n\n");
        for (index, todo) in todos.iter().enumerate() {
            if todo.done {
                output.push_str(&format!("  {index}: ✓ {}\n", todo.task));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::{render, Todo, TODOS_KEY};
    use crate::store::Store;
    use tempfile::TempDir;

    fn store_with_todos(todos: &[(&str, bool)]) -> (TempDir, Store) {
        let dir = TempDir::new().expect("temp dir");
        let store = Store::new(dir.path().to_path_buf());
        let todos: Vec<Todo> = todos
            .iter()
            .map(|(task, done)| Todo {
                task: task.to_string(),
                done: *done,
            })
            .collect();
        assert!(store.save(TODOS_KEY, &todos));
        (dir, store)
    }

    #[test]
    fn empty_store_prompts_for_first_task() {
        let dir = TempDir::new().expect("temp dir");
        let store = Store::new(dir.path().to_path_buf());

        let view = render(&store);
        assert!(view.starts_with("No tasks yet."));
        assert!(view.contains("add [task]"));
    }

    #[test]
    fn sections_keep_original_indices() {
        let (_dir, store) = store_with_todos(&[("buy milk", true), ("walk dog", false)]);

        let view = render(&store);
        let pending = view.find("Pending Tasks:").expect("pending section");
        let completed = view.find("Completed Tasks:").expect("completed section");
        assert!(pending < completed);
        // walk dog keeps index 1 even though it is the only pending entry.
        assert!(view.contains("  1: walk dog\n"));
        assert!(view.contains("  0: ✓ buy milk\n"));
    }

    #[test]
    fn all_pending_omits_completed_section() {
        let (_dir, store) = store_with_todos(&[("one", false), ("two", false)]);

        let view = render(&store);
        assert!(view.contains("Pending Tasks:"));
        assert!(!view.contains("Completed Tasks:"));
    }

    #[test]
    fn all_done_omits_pending_section() {
        let (_dir, store) = store_with_todos(&[("one", true)]);

        let view = render(&store);
        assert!(!view.contains("Pending Tasks:"));
        assert!(view.starts_with("Completed Tasks:"));
        assert!(view.contains("  0: ✓ one\n"));
    }

    #[test]
    fn render_is_idempotent() {
        let (_dir, store) = store_with_todos(&[("one", false), ("two", true)]);
        assert_eq!(render(&store), render(&store));
    }
}
