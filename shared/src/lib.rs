//! ==============================================================================
//! lib.rs - rate limit playground core
//! ==============================================================================
//!
//! purpose:
//!     everything the dashboard does that does not need a browser: the
//!     endpoint table, response decoding, the results view model, the ui
//!     state machine and the controller that drives it over a `Transport`.
//!
//! relationships:
//!     - used by: dashboard (leptos csr front-end)
//!     - talks to: the rate-limited api demo backend, through `Transport`
//!
//! the rate limiting itself happens in the backend. this crate only shows
//! its 429s and sends it configuration.
//!
//! ==============================================================================

pub mod category;
pub mod config;
pub mod configure;
pub mod controller;
pub mod error;
pub mod payload;
pub mod render;
pub mod state;
pub mod transport;

pub use category::{Category, EndpointDescriptor};
pub use config::ClientConfig;
pub use configure::{Algorithm, ConfigForm, ConfigurationRequest, NumericField};
pub use controller::Controller;
pub use error::{ClientError, ErrorBanner, Operation, TransportError};
pub use payload::{QueryResult, Record};
pub use render::{Card, ResultsView, Row};
pub use state::{ActiveView, UiState};
pub use transport::{HttpResponse, Transport};
