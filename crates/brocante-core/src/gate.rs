//! Navigation gate.
//!
//! Decides whether a protected action may proceed for the current session or
//! whether the caller has to send the user to the login flow. A denial is a
//! routing decision, not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter, EnumString};

use crate::session::SessionState;

/// Actions that may require a logged-in user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProtectedAction {
    PostItem,
    SendMessage,
    ViewMessages,
    ViewProfile,
}

/// What an action needs from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRequirement {
    Public,
    #[default]
    Authenticated,
}

impl AccessRequirement {
    fn is_met_by(self, session: &SessionState) -> bool {
        match self {
            Self::Public => true,
            Self::Authenticated => session.is_authenticated(),
        }
    }
}

/// Outcome of consulting the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    RedirectToLogin,
}

/// Access policy seam.
pub trait AccessPolicy: Send + Sync {
    fn permits(&self, action: ProtectedAction, session: &SessionState) -> bool;
}

/// Every protected action requires an authenticated session.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticatedOnly;

impl AccessPolicy for AuthenticatedOnly {
    fn permits(&self, _action: ProtectedAction, session: &SessionState) -> bool {
        session.is_authenticated()
    }
}

/// Per-action requirements. Actions missing from the table need a login;
/// unknown action names are rejected when the table is parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable {
    requirements: HashMap<ProtectedAction, AccessRequirement>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, action: ProtectedAction, requirement: AccessRequirement) -> Self {
        self.requirements.insert(action, requirement);
        self
    }

    pub fn requirement(&self, action: ProtectedAction) -> AccessRequirement {
        self.requirements.get(&action).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl AccessPolicy for PolicyTable {
    fn permits(&self, action: ProtectedAction, session: &SessionState) -> bool {
        self.requirement(action).is_met_by(session)
    }
}

/// The gate screens consult before rendering or running a protected flow.
pub struct NavigationGate {
    policy: Box<dyn AccessPolicy>,
}

impl NavigationGate {
    pub fn new(policy: Box<dyn AccessPolicy>) -> Self {
        Self { policy }
    }

    /// Builds a gate from a configured table; an empty table means the
    /// uniform authenticated-only rule.
    pub fn from_table(table: PolicyTable) -> Self {
        if table.is_empty() {
            Self::default()
        } else {
            Self::new(Box::new(table))
        }
    }

    pub fn can_access(&self, session: &SessionState, action: ProtectedAction) -> bool {
        self.policy.permits(action, session)
    }

    pub fn route(&self, session: &SessionState, action: ProtectedAction) -> GateDecision {
        if self.can_access(session, action) {
            GateDecision::Proceed
        } else {
            tracing::debug!("Gate: {} requires login", action);
            GateDecision::RedirectToLogin
        }
    }
}

impl Default for NavigationGate {
    fn default() -> Self {
        Self::new(Box::new(AuthenticatedOnly))
    }
}

impl std::fmt::Debug for NavigationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationGate").finish_non_exhaustive()
    }
}
