use ideas_client::{
    api::{Comment, CommentId},
    prelude::*,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentThreadProps {
    pub comments: Vec<Comment>,
    pub on_comment: Callback<String>,
    pub on_reply: Callback<(CommentId, String)>,
}

#[function_component(CommentThreadView)]
pub fn comment_thread(p: &CommentThreadProps) -> Html {
    let viewer = use_context::<ui::Viewer>().expect("CommentThreadView rendered outside of a Viewer");
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let on_post = {
        let draft = draft.clone();
        let viewer = viewer.clone();
        let on_comment = p.on_comment.clone();
        Callback::from(move |_: MouseEvent| {
            if viewer
                .session
                .require("comment on ideas", &mut viewer.notifier())
                .is_err()
            {
                return;
            }
            let content = draft.trim();
            if !content.is_empty() {
                on_comment.emit(String::from(content));
                draft.set(String::new());
            }
        })
    };

    let total: usize = p.comments.iter().map(|c| c.node_count()).sum();
    let roots = p.comments.iter().map(|c| {
        html! {
            <ui::CommentView
                key={ c.id.0.clone() }
                comment={ c.clone() }
                on_reply={ Some(p.on_reply.clone()) }
            />
        }
    });

    html! {
        <section class="comment-thread mt-4">
            <h2 class="fs-5 mb-3">{ format!("Comments ({total})") }</h2>
            <div class="mb-4">
                <textarea
                    class="form-control mb-2"
                    placeholder="Share your thoughts..."
                    value={ (*draft).clone() }
                    oninput={ on_input }
                />
                <div class="d-flex justify-content-end">
                    <button
                        type="button"
                        class="btn btn-primary btn-sm"
                        disabled={ draft.trim().is_empty() }
                        onclick={ on_post }
                    >
                        { "Comment" }
                    </button>
                </div>
            </div>
            if p.comments.is_empty() {
                <p class="text-muted">{ "No comments yet. Start the conversation!" }</p>
            } else {
                <div class="d-flex flex-column gap-4">
                    { for roots }
                </div>
            }
        </section>
    }
}
