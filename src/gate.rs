/// The editor's password latch. A plain string compare against an injected
/// secret; the secret reaches the client either way, so this is a
/// convenience gate, not access control, and the comparison is not
/// timing-safe on purpose.
///
/// Once unlocked it stays unlocked for the engine's lifetime; only a full
/// reload resets it.
pub struct AccessGate {
    secret: String,
    authenticated: bool,
    error: Option<String>,
}

impl AccessGate {
    pub fn new(secret: &str) -> AccessGate {
        AccessGate {
            secret: secret.to_string(),
            authenticated: false,
            error: None,
        }
    }

    /// Returns true on success. Failure records a user-visible message and
    /// asks the host to clear the input field; there is no lockout.
    pub fn unlock(&mut self, input: &str) -> bool {
        if input == self.secret {
            self.authenticated = true;
            self.error = None;
        } else {
            self.error = Some("Incorrect password".to_string());
        }
        self.authenticated
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_secret_unlocks_and_clears_error() {
        let mut gate = AccessGate::new("admin123");
        assert!(!gate.unlock("admin12"));
        assert_eq!(gate.error(), Some("Incorrect password"));
        assert!(gate.unlock("admin123"));
        assert!(gate.is_authenticated());
        assert_eq!(gate.error(), None);
    }

    #[test]
    fn wrong_input_leaves_gate_locked_with_message() {
        let mut gate = AccessGate::new("admin123");
        assert!(!gate.unlock(""));
        assert!(!gate.unlock("ADMIN123"));
        assert!(!gate.is_authenticated());
        assert!(gate.error().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn unlock_is_sticky_for_the_session() {
        let mut gate = AccessGate::new("s");
        gate.unlock("s");
        // A later bad attempt cannot re-lock the session.
        gate.unlock("nope");
        assert!(gate.is_authenticated());
    }

    #[test]
    fn typing_clears_the_error() {
        let mut gate = AccessGate::new("s");
        gate.unlock("wrong");
        gate.clear_error();
        assert_eq!(gate.error(), None);
    }
}
