//! Client side of the dashboard: the session record and the auth gate that
//! reads it, small UI helpers, transient notifications and a typed HTTP client
//! for the mock API.

pub mod api;
pub mod error;
pub mod gate;
pub mod notify;
pub mod session;
pub mod util;

pub use api::DashboardClient;
pub use error::ClientError;
pub use gate::{AuthGate, GateState, Navigator, Render};
pub use notify::{Notification, NotificationKind, NotificationQueue};
pub use session::{MemoryStore, SessionContext, SessionStore, StoredUser};
