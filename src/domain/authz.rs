//! Authorization policy for privileged commands.
//!
//! Rule data is configuration, not code: administrators always pass, anyone
//! else must hold one of the configured organizer role names.

use std::collections::HashSet;

/// What the caller holds, extracted from the platform context.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    pub administrator: bool,
    /// Names of roles the caller holds.
    pub roles: HashSet<String>,
}

impl Capabilities {
    pub fn administrator() -> Self {
        Self {
            administrator: true,
            roles: HashSet::new(),
        }
    }

    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            administrator: false,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Decides whether a capability set may run privileged commands.
#[derive(Debug, Clone)]
pub struct AuthzPolicy {
    allowed_roles: Vec<String>,
}

impl AuthzPolicy {
    pub fn new(allowed_roles: Vec<String>) -> Self {
        Self { allowed_roles }
    }

    pub fn authorize(&self, caps: &Capabilities) -> bool {
        caps.administrator || self.allowed_roles.iter().any(|r| caps.roles.contains(r))
    }
}
