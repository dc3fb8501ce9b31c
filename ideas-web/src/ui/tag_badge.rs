use ideas_client::tag_slug;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TagBadgeProps {
    pub name: String,
    #[prop_or_default]
    pub count: Option<u32>,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub on_select: Option<Callback<String>>,
}

#[function_component(TagBadge)]
pub fn tag_badge(p: &TagBadgeProps) -> Html {
    let count = p.count.map(|c| {
        html! {
            <span class="ms-1 small opacity-75">{ c.to_string() }</span>
        }
    });
    let class = classes!(
        "badge",
        "rounded-pill",
        "tag-badge",
        if p.active { "text-bg-primary" } else { "text-bg-light" }
    );
    match &p.on_select {
        None => html! {
            <span class={ class }>{ &p.name }{ for count }</span>
        },
        Some(on_select) => {
            let slug = tag_slug(&p.name);
            html! {
                <button
                    type="button"
                    class={ classes!(class, "border-0") }
                    aria-label={ format!("View all posts tagged with {}", p.name) }
                    onclick={ on_select.reform(move |_: MouseEvent| slug.clone()) }
                >
                    { &p.name }{ for count }
                </button>
            }
        }
    }
}
