//! Document state handling for Easel sessions.
//!
//! When a session loads, the host reconciles the optional imported document
//! state with the local session state ([`reconcile`]). At export time it asks
//! for a document name ([`resolve_export_name`]), which falls back to a
//! timestamped default when the document has no title.

pub mod app_state;
pub mod error;
pub mod name;
pub mod naming;
pub mod reconcile;

pub use app_state::{AppState, NAME_KEY};
pub use error::{Result, StateError};
pub use name::DocumentName;
pub use naming::{DEFAULT_NAME_PREFIX, DefaultNamer, resolve_export_name};
pub use reconcile::{ReconcilePolicy, reconcile, reconcile_with};
