//! Shared UI components for the Dioxus fullstack web UI.

pub mod delete_confirmation;
pub mod layout;
pub mod modal;
pub mod sidebar;
pub mod theme;

pub use delete_confirmation::DeleteConfirmation;
pub use layout::Layout;
pub use modal::{Modal, ModalFrame, NetworkDeleteModal};
pub use sidebar::{NavEntry, SidebarPanel, SidebarToggle};
pub use theme::{ThemeIcons, ThemePicker, ThemeToggle};
