//! Session gate
//!
//! Decides which of the two console views is visible and latches the
//! one-time list initialization per authenticated session.

use sleeve_client::Session;

/// Which console view is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Login,
    Admin,
}

/// Authentication state of the console
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Unauthenticated,
    Authenticated {
        email: String,
    },
}

/// Gate over the admin views
#[derive(Debug, Default)]
pub struct SessionGate {
    state: GateState,
    initialized: bool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb the current session, if any
    pub fn observe(&mut self, session: Option<&Session>) {
        self.state = match session {
            Some(session) => GateState::Authenticated {
                email: session.user.email.clone().unwrap_or_default(),
            },
            None => GateState::Unauthenticated,
        };
    }

    /// The login view is visible iff unauthenticated
    pub fn visible_panel(&self) -> Panel {
        match self.state {
            GateState::Unauthenticated => Panel::Login,
            GateState::Authenticated { .. } => Panel::Admin,
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Signed-in email for the who-am-i line
    pub fn email(&self) -> Option<&str> {
        match &self.state {
            GateState::Authenticated { email } => Some(email),
            GateState::Unauthenticated => None,
        }
    }

    /// True exactly once after entering the authenticated state.
    ///
    /// The latch holds until [`reset`](Self::reset), so re-running the gate
    /// on an already-initialized session loads nothing twice.
    pub fn needs_init(&mut self) -> bool {
        if self.initialized || self.state == GateState::Unauthenticated {
            return false;
        }
        self.initialized = true;
        true
    }

    /// Drop back to the signed-out state and re-arm the init latch
    pub fn reset(&mut self) {
        self.state = GateState::Unauthenticated;
        self.initialized = false;
    }
}
