use ideas_client::{Notification, Session};
use yew::prelude::*;

/// What components need to know about the person using the page, provided
/// through a `ContextProvider<Viewer>` at the root of the app
#[derive(Clone, PartialEq)]
pub struct Viewer {
    pub session: Session,
    pub notify: Callback<Notification>,
}

impl Viewer {
    pub fn notifier(&self) -> impl FnMut(Notification) + '_ {
        move |n: Notification| self.notify.emit(n)
    }
}
