//! UI Components
//!
//! Reusable UI components for the desktop application.

mod confirm_dialog;
mod header;
mod note_card;
mod note_editor;
mod note_list;
mod sidebar;
mod toasts;
mod toolbar;

pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use sidebar::Sidebar;
pub use toasts::Toasts;
pub use toolbar::Toolbar;
