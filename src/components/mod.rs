//! UI Components
//!
//! Leptos components for the checklist page.

mod celebration_overlay;
mod checklist_row;
mod checklist_view;
mod file_import;
mod help_modal;
mod new_item_form;
mod snow_canvas;

pub use celebration_overlay::CelebrationOverlay;
pub use checklist_row::ChecklistRow;
pub use checklist_view::ChecklistView;
pub use file_import::FileImport;
pub use help_modal::HelpModal;
pub use new_item_form::NewItemForm;
pub use snow_canvas::SnowCanvas;
