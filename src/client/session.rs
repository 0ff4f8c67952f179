use std::sync::{Mutex, PoisonError};

use crate::domain::SessionToken;

/// Bearer token held by one client and its clones.
///
/// The lock is only taken for the duration of a read or a replace and is never
/// held across an `.await`.
#[derive(Debug, Default)]
pub(crate) struct Session {
    token: Mutex<Option<SessionToken>>,
}

impl Session {
    #[cfg(test)]
    pub(crate) fn with_token(token: SessionToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }

    pub(crate) fn token(&self) -> Option<SessionToken> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn replace(&self, token: SessionToken) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }
}
