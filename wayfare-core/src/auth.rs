/// Gate for actions that need an authenticated session.
///
/// `false` means the gate has already redirected the user into an
/// authentication flow; callers abort silently without mutating state.
pub trait AuthGate: Send + Sync {
    fn require_auth(&self, action: &str) -> bool;
}

/// Gate that lets everything through. Useful for tests and for surfaces
/// rendered behind an already-authenticated session.
pub struct OpenGate;

impl AuthGate for OpenGate {
    fn require_auth(&self, _action: &str) -> bool {
        true
    }
}
