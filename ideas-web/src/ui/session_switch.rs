use ideas_client::api::{User, UserId};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct SessionSwitchProps {
    pub users: Vec<User>,
    pub current: Option<User>,
    pub on_sign_in: Callback<UserId>,
    pub on_sign_out: Callback<()>,
}

/// Picks which of the known users the page acts as
#[function_component(SessionSwitch)]
pub fn session_switch(p: &SessionSwitchProps) -> Html {
    let toggle = match &p.current {
        Some(u) => html! {
            <button
                type="button"
                class="btn btn-light d-flex align-items-center gap-2"
                data-bs-toggle="dropdown"
            >
                <ui::Avatar user={ u.clone() } small={ true } />
                { &u.name }
            </button>
        },
        None => html! {
            <button type="button" class="btn btn-primary" data-bs-toggle="dropdown">
                { "Sign in" }
            </button>
        },
    };
    let items = p.users.iter().map(|u| {
        let id = u.id.clone();
        html! {
            <li>
                <a
                    class="dropdown-item"
                    href="#"
                    onclick={ p.on_sign_in.reform(move |e: MouseEvent| {
                        e.prevent_default();
                        id.clone()
                    }) }
                >
                    { format!("Sign in as {}", u.name) }
                </a>
            </li>
        }
    });
    let sign_out = p.current.is_some().then(|| {
        html! {
            <>
                <li><hr class="dropdown-divider" /></li>
                <li><a class="dropdown-item" href="#" onclick={ p.on_sign_out.reform(|e: MouseEvent| e.prevent_default()) }>
                    <span class="bi-power me-2" aria-hidden="true"></span>
                    { "Sign out" }
                </a></li>
            </>
        }
    });
    html! {
        <div class="dropdown">
            { toggle }
            <ul class="dropdown-menu dropdown-menu-end">
                { for items }
                { for sign_out }
            </ul>
        </div>
    }
}
