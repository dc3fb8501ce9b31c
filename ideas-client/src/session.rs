use crate::{
    api::{Error, User},
    Notification, Notifier,
};

/// Who is looking at the page
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Session {
        Session { user: None }
    }

    pub fn signed_in(user: User) -> Session {
        Session { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the signed-in user, or asks them to sign in to do `action`
    pub fn require(&self, action: &str, notifier: &mut impl Notifier) -> Result<&User, Error> {
        match &self.user {
            Some(u) => Ok(u),
            None => {
                tracing::debug!(action, "unauthenticated user attempted action");
                notifier.notify(Notification::sign_in_to(action));
                Err(Error::PermissionDenied)
            }
        }
    }
}
