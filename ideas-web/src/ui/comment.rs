use std::rc::Rc;

use chrono::Utc;
use ideas_client::{
    api::{Comment, CommentId, Error},
    format_relative, indents_replies, CommentControls,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentViewProps {
    pub comment: Comment,
    #[prop_or_default]
    pub level: usize,
    #[prop_or_default]
    pub on_reply: Option<Callback<(CommentId, String)>>,
}

/// Props of the views rendering the replies of `p.comment`, in display order
fn reply_props(p: &CommentViewProps) -> Vec<CommentViewProps> {
    p.comment
        .replies
        .iter()
        .map(|r| CommentViewProps {
            comment: r.clone(),
            level: p.level + 1,
            on_reply: p.on_reply.clone(),
        })
        .collect()
}

enum ControlsAction {
    ToggleLike(ui::Viewer),
    ToggleReply(ui::Viewer),
    Edit(String),
    Cancel,
    Submit {
        viewer: ui::Viewer,
        parent: CommentId,
        on_reply: Option<Callback<(CommentId, String)>>,
    },
}

#[derive(Clone, PartialEq)]
struct ControlsState(CommentControls);

impl ControlsState {
    fn apply(next: &mut CommentControls, action: ControlsAction) -> Result<(), Error> {
        match action {
            ControlsAction::ToggleLike(viewer) => {
                let mut notify = viewer.notifier();
                next.toggle_like(&viewer.session, &mut notify)
            }
            ControlsAction::ToggleReply(viewer) => {
                let mut notify = viewer.notifier();
                next.toggle_reply(&viewer.session, &mut notify)
            }
            ControlsAction::Edit(text) => next.edit_reply(text),
            ControlsAction::Cancel => {
                next.cancel_reply();
                Ok(())
            }
            ControlsAction::Submit {
                viewer,
                parent,
                on_reply,
            } => {
                let on_reply = on_reply.map(|cb| {
                    move |parent: CommentId, content: String| cb.emit((parent, content))
                });
                let mut notify = viewer.notifier();
                next.submit_reply(&viewer.session, &parent, on_reply, &mut notify)
            }
        }
    }
}

impl Reducible for ControlsState {
    type Action = ControlsAction;

    fn reduce(self: Rc<Self>, action: ControlsAction) -> Rc<Self> {
        let mut next = self.0.clone();
        match ControlsState::apply(&mut next, action) {
            Ok(()) => Rc::new(ControlsState(next)),
            Err(e) => {
                tracing::debug!(%e, "comment interaction rejected");
                self
            }
        }
    }
}

/// One comment, its like and reply controls, then all its replies rendered one
/// level deeper
#[function_component(CommentView)]
pub fn comment_view(p: &CommentViewProps) -> Html {
    let viewer = use_context::<ui::Viewer>().expect("CommentView rendered outside of a Viewer");
    let controls = {
        let comment = p.comment.clone();
        use_reducer(move || ControlsState(CommentControls::new(&comment)))
    };
    let c = &p.comment;

    let on_like = {
        let controls = controls.clone();
        let viewer = viewer.clone();
        Callback::from(move |_: MouseEvent| {
            controls.dispatch(ControlsAction::ToggleLike(viewer.clone()))
        })
    };
    let on_toggle_reply = {
        let controls = controls.clone();
        let viewer = viewer.clone();
        Callback::from(move |_: MouseEvent| {
            controls.dispatch(ControlsAction::ToggleReply(viewer.clone()))
        })
    };

    let state = &controls.0;
    let heart_class = match state.is_liked() {
        true => "bi-heart-fill text-primary",
        false => "bi-heart",
    };

    html! {
        <div class="comment d-flex gap-3">
            <ui::Avatar user={ c.author.clone() } small={ true } />
            <div class="flex-fill min-w-0">
                <div class="comment-body p-3 rounded-3">
                    <div class="d-flex align-items-center gap-2 mb-1">
                        <span class="fw-medium small">{ &c.author.name }</span>
                        <span class="text-muted small">
                            { format_relative(c.created_at, Utc::now()) }
                        </span>
                    </div>
                    <p class="small m-0">{ &c.content }</p>
                </div>
                <div class="d-flex align-items-center gap-3 mt-2 small">
                    <button
                        type="button"
                        class="btn btn-link btn-sm text-muted p-0"
                        aria-label={ if state.is_liked() { "Unlike" } else { "Like" } }
                        onclick={ on_like }
                    >
                        <span class={ classes!("bi-btn", heart_class, "me-1") }></span>
                        { state.like_count().to_string() }
                    </button>
                    <button
                        type="button"
                        class="btn btn-link btn-sm text-muted p-0"
                        onclick={ on_toggle_reply }
                    >
                        <span class="bi-btn bi-reply me-1"></span>
                        { "Reply" }
                    </button>
                </div>
                { for state.is_composing().then(|| reply_box(p, &viewer, &controls)) }
                { for (!c.is_leaf()).then(|| replies(p)) }
            </div>
        </div>
    }
}

fn reply_box(
    p: &CommentViewProps,
    viewer: &ui::Viewer,
    controls: &UseReducerHandle<ControlsState>,
) -> Html {
    let on_input = {
        let controls = controls.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            controls.dispatch(ControlsAction::Edit(input.value()))
        })
    };
    let on_cancel = {
        let controls = controls.clone();
        Callback::from(move |_: MouseEvent| controls.dispatch(ControlsAction::Cancel))
    };
    let on_submit = {
        let controls = controls.clone();
        let viewer = viewer.clone();
        let parent = p.comment.id.clone();
        let on_reply = p.on_reply.clone();
        Callback::from(move |_: MouseEvent| {
            controls.dispatch(ControlsAction::Submit {
                viewer: viewer.clone(),
                parent: parent.clone(),
                on_reply: on_reply.clone(),
            })
        })
    };
    let can_submit = p.on_reply.is_some() && controls.0.can_submit(&viewer.session);

    html! {
        <div class="reply-box mt-3">
            <textarea
                class="form-control form-control-sm mb-2"
                placeholder="Write your reply..."
                value={ controls.0.draft().unwrap_or_default().to_owned() }
                oninput={ on_input }
            />
            <div class="d-flex justify-content-end gap-2">
                <button type="button" class="btn btn-light btn-sm" onclick={ on_cancel }>
                    { "Cancel" }
                </button>
                <button
                    type="button"
                    class="btn btn-primary btn-sm"
                    disabled={ !can_submit }
                    onclick={ on_submit }
                >
                    { "Reply" }
                </button>
            </div>
        </div>
    }
}

fn replies(p: &CommentViewProps) -> Html {
    let margin = match indents_replies(p.level) {
        true => "margin-left: 1rem",
        false => "margin-left: 0",
    };
    html! {
        <div class="comment-replies d-flex flex-column gap-3 mt-3" style={ margin }>
            { for reply_props(p).into_iter().map(|r| {
                let key = r.comment.id.0.clone();
                html! {
                    <CommentView
                        key={ key }
                        comment={ r.comment }
                        level={ r.level }
                        on_reply={ r.on_reply }
                    />
                }
            }) }
        </div>
    }
}
