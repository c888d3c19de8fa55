//! App registry and view dispatch.
//!
//! The set of hosted apps is fixed and closed: `AppId` enumerates them and
//! `DESCRIPTORS` carries their static metadata. Everything app-aware — the
//! `ls` command, the nav panel, shortcut keys, CLI hints — is driven from
//! this one table, and view rendering is a single `match` on `AppId`, so the
//! registry and the dispatch cannot drift apart.

pub mod home;
pub mod notes;
pub mod todo;

use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppId {
    Home,
    Notes,
    Todo,
}

impl AppId {
    /// Resolve an app id string (as carried by a redirect) to a known app.
    pub fn parse(input: &str) -> Option<AppId> {
        match input {
            "home" => Some(AppId::Home),
            "notes" => Some(AppId::Notes),
            "todo" => Some(AppId::Todo),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppId::Home => "home",
            AppId::Notes => "notes",
            AppId::Todo => "todo",
        }
    }
}

/// Static metadata for one hosted app.
#[derive(Debug, Clone)]
pub struct AppDescriptor {
    pub id: AppId,
    pub name: &'static str,
    pub hints: &'static str,
    /// Nav-panel key that switches straight to the app.
    pub shortcut: char,
}

pub const DESCRIPTORS: &[AppDescriptor] = &[
    AppDescriptor {
        id: AppId::Home,
        name: "Home",
        hints: "open [app] | ls | help",
        shortcut: 'h',
    },
    AppDescriptor {
        id: AppId::Notes,
        name: "Notes",
        hints: "new [title] | list",
        shortcut: 'n',
    },
    AppDescriptor {
        id: AppId::Todo,
        name: "Todo",
        hints: "add [task] | done [id] | list",
        shortcut: 't',
    },
];

pub fn descriptor(id: AppId) -> &'static AppDescriptor {
    DESCRIPTORS
        .iter()
        .find(|descriptor| descriptor.id == id)
        .expect("every AppId has a descriptor row")
}

/// Render the view for `id` from current stored state. Pure and read-only;
/// safe to call on every reload.
pub fn render(id: AppId, store: &Store) -> String {
    match id {
        AppId::Home => home::render(),
        AppId::Notes => notes::render(store),
        AppId::Todo => todo::render(store),
    }
}

#[cfg(test)]
mod tests {
    use super::{descriptor, render, AppId, DESCRIPTORS};
    use crate::store::Store;
    use tempfile::TempDir;

    #[test]
    fn descriptor_ids_are_unique() {
        for (index, entry) in DESCRIPTORS.iter().enumerate() {
            assert!(
                !DESCRIPTORS[index + 1..]
                    .iter()
                    .any(|other| other.id == entry.id),
                "duplicate descriptor id {:?}",
                entry.id
            );
        }
    }

    #[test]
    fn parse_round_trips_descriptor_ids() {
        for entry in DESCRIPTORS {
            assert_eq!(AppId::parse(entry.id.as_str()), Some(entry.id));
        }
        assert_eq!(AppId::parse("frobnicate"), None);
    }

    #[test]
    fn every_descriptor_renders() {
        let dir = TempDir::new().expect("temp dir");
        let store = Store::new(dir.path().to_path_buf());

        for entry in DESCRIPTORS {
            assert!(!render(entry.id, &store).is_empty());
        }
    }

    #[test]
    fn descriptor_lookup_matches_table() {
        assert_eq!(descriptor(AppId::Notes).name, "Notes");
        assert_eq!(descriptor(AppId::Todo).shortcut, 't');
    }
}
