use ideas_client::api::User;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
    pub user: User,
    #[prop_or_default]
    pub small: bool,
}

#[function_component(Avatar)]
pub fn avatar(p: &AvatarProps) -> Html {
    let class = classes!(
        "avatar",
        "rounded-circle",
        "flex-shrink-0",
        p.small.then(|| "avatar-sm")
    );
    match &p.user.avatar {
        Some(url) => html! {
            <img class={ class } src={ url.clone() } alt={ p.user.name.clone() } />
        },
        None => html! {
            <span class={ class } aria-label={ p.user.name.clone() }>{ p.user.initial() }</span>
        },
    }
}
