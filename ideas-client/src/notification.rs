#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Info,
    Destructive,
}

/// A transient, user-facing message
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(title: &str, description: &str) -> Notification {
        Notification {
            title: String::from(title),
            description: String::from(description),
            kind: NotificationKind::Info,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Notification {
        Notification {
            title: String::from(title),
            description: String::from(description),
            kind: NotificationKind::Destructive,
        }
    }

    /// `action` completes "Please sign in to ..."
    pub fn sign_in_to(action: &str) -> Notification {
        Notification::info(
            "Authentication required",
            &format!("Please sign in to {action}"),
        )
    }

    pub fn reply_submitted() -> Notification {
        Notification::info(
            "Reply submitted",
            "Your reply has been added to the conversation",
        )
    }
}

/// Where notifications go. Delivery is fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, n: Notification);
}

impl<F: FnMut(Notification)> Notifier for F {
    fn notify(&mut self, n: Notification) {
        self(n)
    }
}
