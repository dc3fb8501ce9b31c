use chrono::Utc;
use ideas_client::{api::Idea, IdeaDraft, MAX_TAGS};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct IdeaFormProps {
    pub on_submit: Callback<Idea>,
}

#[function_component(IdeaForm)]
pub fn idea_form(p: &IdeaFormProps) -> Html {
    let viewer = use_context::<ui::Viewer>().expect("IdeaForm rendered outside of a Viewer");
    let draft = use_state(IdeaDraft::default);

    macro_rules! edit_field {
        ($elt:ty, $field:ident) => {{
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: $elt = e.target_unchecked_into();
                let mut next = (*draft).clone();
                next.$field = input.value();
                draft.set(next);
            })
        }};
    }

    let on_tag_key = {
        let draft = draft.clone();
        Callback::from(move |e: KeyboardEvent| {
            if !matches!(&e.key() as &str, "Enter" | ",") {
                return;
            }
            e.prevent_default();
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            match next.add_tag(&input.value()) {
                Ok(()) => {
                    draft.set(next);
                    input.set_value("");
                }
                Err(e) => tracing::debug!(%e, "tag not added"),
            }
        })
    };
    let tags = draft.tags().iter().map(|t| {
        let on_remove = {
            let draft = draft.clone();
            let t = t.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*draft).clone();
                next.remove_tag(&t);
                draft.set(next);
            })
        };
        html! {
            <span class="badge rounded-pill text-bg-light d-inline-flex align-items-center gap-1">
                { t }
                <button
                    type="button"
                    class="btn-close btn-close-sm"
                    aria-label={ format!("Remove tag {t}") }
                    onclick={ on_remove }
                >
                </button>
            </span>
        }
    });
    let on_submit = {
        let draft = draft.clone();
        let viewer = viewer.clone();
        let on_submit = p.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            match draft.submit(&viewer.session, &mut viewer.notifier(), Utc::now()) {
                Ok(idea) => {
                    on_submit.emit(idea);
                    draft.set(IdeaDraft::default());
                }
                Err(e) => tracing::debug!(%e, "idea not submitted"),
            }
        })
    };

    html! {
        <form class="idea-form card card-body mb-4">
            <div class="mb-3">
                <label class="form-label" for="idea-title">{ "Title" }</label>
                <input
                    type="text"
                    class="form-control"
                    id="idea-title"
                    placeholder="Give your idea a clear, catchy title"
                    value={ draft.title.clone() }
                    oninput={ edit_field!(web_sys::HtmlInputElement, title) }
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="idea-content">{ "Description" }</label>
                <textarea
                    class="form-control"
                    id="idea-content"
                    placeholder="Describe your idea in detail..."
                    value={ draft.content.clone() }
                    oninput={ edit_field!(web_sys::HtmlTextAreaElement, content) }
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="idea-tags">
                    { format!("Tags ({}/{MAX_TAGS})", draft.tags().len()) }
                </label>
                <div class="d-flex flex-wrap gap-2 mb-2">{ for tags }</div>
                <input
                    type="text"
                    class="form-control"
                    id="idea-tags"
                    placeholder="Add a tag and press Enter"
                    disabled={ !draft.can_add_tag() }
                    onkeydown={ on_tag_key }
                />
            </div>
            <div class="d-flex justify-content-end">
                <button type="button" class="btn btn-primary" onclick={ on_submit }>
                    { "Share idea" }
                </button>
            </div>
        </form>
    }
}
