//! Signed-in session state.

use serde::{Deserialize, Serialize};

/// A signed-in user's session, as returned by a successful login.
///
/// The presentation layer owns one `Option<Session>` and persists it however
/// it likes; holding a session is what "authenticated" means to the cart
/// gate, and `token` is the bearer token the client attaches to cart calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: String,
    /// Wallet balance in whole currency units.
    pub balance: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_json() {
        let session = Session {
            username: "crio.do".to_string(),
            token: "testtoken".to_string(),
            balance: 5000,
        };

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
