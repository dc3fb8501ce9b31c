use ideas_client::{Notification, NotificationKind};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ToastsProps {
    pub notifications: Vec<(u64, Notification)>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toasts)]
pub fn toasts(p: &ToastsProps) -> Html {
    let toasts = p.notifications.iter().map(|(id, n)| {
        let kind_class = match n.kind {
            NotificationKind::Info => "text-bg-light",
            NotificationKind::Destructive => "text-bg-danger",
        };
        let id = *id;
        html! {
            <div key={ id.to_string() } class={ classes!("toast", "show", kind_class) } role="status">
                <div class="toast-header">
                    <strong class="me-auto">{ &n.title }</strong>
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close"
                        onclick={ p.on_dismiss.reform(move |_| id) }
                    >
                    </button>
                </div>
                <div class="toast-body">{ &n.description }</div>
            </div>
        }
    });
    html! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3" aria-live="polite">
            { for toasts }
        </div>
    }
}
