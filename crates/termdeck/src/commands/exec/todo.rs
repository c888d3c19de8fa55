//! Todo app command handler.

use crate::apps::todo::{Todo, TODOS_KEY};
use crate::store::Store;

use super::CommandOutcome;

/// Handle a todo verb. The collection is re-loaded on every call so each
/// command sees the latest persisted state.
pub(super) fn handle_todo_command(verb: &str, args: &[String], store: &Store) -> CommandOutcome {
    let mut todos: Vec<Todo> = store.load(TODOS_KEY, Vec::new());

    match verb {
        "add" => {
            if args.is_empty() {
                return CommandOutcome {
                    output: "Usage: add [task]".to_string(),
                    redirect: None,
                    reload: false,
                };
            }
            let task = args.join(" ");
            todos.push(Todo {
                task: task.clone(),
                done: false,
            });
            if !store.save(TODOS_KEY, &todos) {
                return CommandOutcome {
                    output: "Failed to save tasks.".to_string(),
                    redirect: None,
                    reload: false,
                };
            }
            CommandOutcome {
                output: format!("Added task: {task}"),
                redirect: None,
                reload: true,
            }
        }
        "done" => {
            // Non-numeric and out-of-range both fall through to the same
            // usage error; the stored collection is left untouched.
            let index = args.first().and_then(|arg| arg.parse::<usize>().ok());
            match index {
                Some(index) if index < todos.len() => {
                    todos[index].done = true;
                    if !store.save(TODOS_KEY, &todos) {
                        return CommandOutcome {
                            output: "Failed to save tasks.".to_string(),
                            redirect: None,
                            reload: false,
                        };
                    }
                    CommandOutcome {
                        output: format!("Marked task {index} as done"),
                        redirect: None,
                        reload: true,
                    }
                }
                _ => CommandOutcome {
                    output: "Usage: done [id]".to_string(),
                    redirect: None,
                    reload: false,
                },
            }
        }
        "list" => {
            if todos.is_empty() {
                return CommandOutcome {
                    output: "No tasks yet.".to_string(),
                    redirect: None,
                    reload: false,
                };
            }
            let output = todos
                .iter()
                .enumerate()
                .map(|(index, todo)| {
                    let marker = if todo.done { '✓' } else { ' ' };
                    format!("  {index}: {marker} {}", todo.task)
                })
                .collect::<Vec<_>>()
                .join("\n");
            CommandOutcome {
                output,
                redirect: None,
                reload: false,
            }
        }
        _ => CommandOutcome {
            output: format!("Unknown todo command: {verb}"),
            redirect: None,
            reload: false,
        },
    }
}
