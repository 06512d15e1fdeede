//! Dioxus fullstack page components.

mod dashboard;
mod networks;
mod settings;

pub use dashboard::Dashboard;
pub use networks::Networks;
pub use settings::Settings;
