//! Notes app command handler.

use crate::apps::notes::{Note, NOTES_KEY};
use crate::store::Store;

use super::CommandOutcome;

/// Handle a notes verb. The collection is re-loaded on every call so each
/// command sees the latest persisted state.
pub(super) fn handle_notes_command(verb: &str, args: &[String], store: &Store) -> CommandOutcome {
    let mut notes: Vec<Note> = store.load(NOTES_KEY, Vec::new());

    match verb {
        "new" => {
            if args.is_empty() {
                return CommandOutcome {
                    output: "Usage: new [title]".to_string(),
                    redirect: None,
                    reload: false,
                };
            }
            let title = args.join(" ");
            notes.push(Note {
                title: title.clone(),
                content: String::new(),
            });
            if !store.save(NOTES_KEY, &notes) {
                return CommandOutcome {
                    output: "Failed to save notes.".to_string(),
                    redirect: None,
                    reload: false,
                };
            }
            CommandOutcome {
                output: format!("Created note: {title}"),
                redirect: None,
                reload: true,
            }
        }
        "list" => {
            if notes.is_empty() {
                return CommandOutcome {
                    output: "No notes yet.".to_string(),
                    redirect: None,
                    reload: false,
                };
            }
            let output = notes
                .iter()
                .enumerate()
                .map(|(index, note)| format!("  {index}: {}", note.title))
                .collect::<Vec<_>>()
                .join("\n");
            CommandOutcome {
                output,
                redirect: None,
                reload: false,
            }
        }
        _ => CommandOutcome {
            output: format!("Unknown notes command: {verb}"),
            redirect: None,
            reload: false,
        },
    }
}
