use chrono::Utc;
use ideas_client::{
    api::{Idea, IdeaId},
    excerpt, format_relative, visible_tags, CardVariant,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct IdeaCardProps {
    pub idea: Idea,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub on_open: Option<Callback<IdeaId>>,
    #[prop_or_default]
    pub on_select_tag: Option<Callback<String>>,
}

#[function_component(IdeaCard)]
pub fn idea_card(p: &IdeaCardProps) -> Html {
    let idea = &p.idea;
    let variant_class = match p.variant {
        CardVariant::Default => "idea-card",
        CardVariant::Compact => "idea-card idea-card-compact",
        CardVariant::Featured => "idea-card idea-card-featured shadow",
    };
    let image = idea
        .image
        .as_ref()
        .filter(|_| p.variant.shows_image())
        .map(|url| {
            html! {
                <img class="card-img-top idea-card-image" src={ url.clone() } alt={ idea.title.clone() } />
            }
        });
    let tags = p.variant.shows_tags().then(|| {
        let (shown, more) = visible_tags(&idea.tags);
        html! {
            <div class="d-flex flex-wrap gap-2 mb-3">
                { for shown.iter().map(|t| html! {
                    <ui::TagBadge name={ t.clone() } on_select={ p.on_select_tag.clone() } />
                }) }
                if more > 0 {
                    <span class="small text-muted align-self-center">{ format!("+{more} more") }</span>
                }
            </div>
        }
    });
    let on_open = p.on_open.as_ref().map(|cb| {
        let id = idea.id.clone();
        cb.reform(move |e: MouseEvent| {
            e.prevent_default();
            id.clone()
        })
    });

    html! {
        <article class={ classes!("card", "h-100", variant_class) }>
            { for image }
            <div class="card-body d-flex flex-column">
                <div class="d-flex align-items-center gap-2 mb-3">
                    <ui::Avatar user={ idea.author.clone() } small={ true } />
                    <div class="d-flex flex-column">
                        <span class="small fw-medium">{ &idea.author.name }</span>
                        <span class="small text-muted">
                            { format_relative(idea.created_at, Utc::now()) }
                        </span>
                    </div>
                </div>
                <h3 class="card-title fs-5">
                    <a href="#" class="stretched-link-title" onclick={ on_open }>{ &idea.title }</a>
                </h3>
                <p class="card-text small text-muted">{ excerpt(&idea.content, p.variant) }</p>
                { for tags }
                <div class="d-flex align-items-center gap-3 mt-auto small text-muted">
                    <span><span class="bi-heart me-1"></span>{ idea.likes.to_string() }</span>
                    <span><span class="bi-chat me-1"></span>{ idea.comments.to_string() }</span>
                </div>
            </div>
        </article>
    }
}
