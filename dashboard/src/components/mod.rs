//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod configure;
mod header;
mod query;
mod results;
mod status;
mod tabs;

pub use configure::ConfigureView;
pub use header::Header;
pub use query::QueryView;
pub use results::ResultsPanel;
pub use status::StatusPanel;
pub use tabs::TabNav;
