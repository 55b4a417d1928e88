//! Route guard for protected pages.
//!
//! This only decides what to render from the local session record. It is not
//! an access control: the API endpoints answer anyone who asks.

use crate::session::{SessionContext, SessionStore};

/// Paths rendered whether or not a session exists
pub const PUBLIC_PATHS: [&str; 4] = ["/", "/login", "/register", "/about"];

/// Where unauthenticated visitors of protected paths are sent
pub const REDIRECT_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Before the session has been checked
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// What the gate shows in place of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Loading placeholder
    Loading,
    /// Nothing, a redirect is in flight
    Nothing,
    /// The protected page itself
    Children,
}

/// Client-side router hook
pub trait Navigator {
    /// Replace the current history entry with `path`.
    fn replace(&self, path: &str);
}

/// Whether `path` can be shown without a session.
///
/// Query strings, fragments and a trailing slash are ignored.
pub fn is_public(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    PUBLIC_PATHS.contains(&path)
}

#[derive(Debug, Clone)]
pub struct AuthGate {
    path: String,
    state: GateState,
}

impl AuthGate {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: GateState::Unknown,
        }
    }

    pub const fn state(&self) -> GateState {
        self.state
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run the session check for the current path.
    ///
    /// Redirects through `navigator` when a protected path has no session.
    pub fn mount<S: SessionStore>(
        &mut self,
        session: &SessionContext<S>,
        navigator: &impl Navigator,
    ) -> GateState {
        let logged_in = session.is_logged_in();

        self.state = if !logged_in && !is_public(&self.path) {
            tracing::debug!(path = %self.path, "No session, redirecting");
            navigator.replace(REDIRECT_PATH);
            GateState::Unauthenticated
        } else {
            GateState::Authenticated
        };
        self.state
    }

    /// Move to another path and check it again.
    pub fn navigate<S: SessionStore>(
        &mut self,
        path: impl Into<String>,
        session: &SessionContext<S>,
        navigator: &impl Navigator,
    ) -> GateState {
        self.path = path.into();
        self.state = GateState::Unknown;
        self.mount(session, navigator)
    }

    pub fn render(&self) -> Render {
        match self.state {
            GateState::Unknown => Render::Loading,
            GateState::Unauthenticated if !is_public(&self.path) => Render::Nothing,
            GateState::Authenticated | GateState::Unauthenticated => Render::Children,
        }
    }
}
