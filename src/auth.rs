/// Authentication state consulted by admin-gating logic outside the feed
/// core. The blog has no real accounts; this mirrors the simulated session
/// the original UI kept in browser storage.
pub trait AuthState {
    fn is_authenticated(&self) -> bool;
    fn role(&self) -> String;
}

/// In-memory simulated session. No credentials, no persistence; the role is
/// whatever the fake login handed out for the session.
pub struct SessionAuth {
    role: Option<String>,
}

impl SessionAuth {
    pub fn guest() -> Self {
        SessionAuth { role: None }
    }

    pub fn signed_in(role: &str) -> Self {
        SessionAuth {
            role: Some(role.to_string()),
        }
    }

    pub fn sign_out(&mut self) {
        self.role = None;
    }
}

impl AuthState for SessionAuth {
    fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    fn role(&self) -> String {
        self.role.clone().unwrap_or_else(|| "guest".to_string())
    }
}
