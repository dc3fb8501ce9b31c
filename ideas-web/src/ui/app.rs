use chrono::Utc;
use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use ideas_client::{
    api::{CommentId, Dataset, Idea, IdeaId, User, UserId},
    mock, tag_slug, CardVariant, Feed, Notification, Session,
};
use std::{collections::VecDeque, rc::Rc};
use yew::prelude::*;

use crate::ui;

const KEY_SESSION_USER: &str = "session-user";
const KEY_DATASET: &str = "dataset";
const MAX_NOTIFICATIONS: usize = 3;
const FEATURED_IDEAS: usize = 3;

pub enum AppMsg {
    SignIn(UserId),
    SignOut,

    Notify(Notification),
    DismissNotification(u64),

    Search(String),
    SelectTag(Option<String>),
    OpenIdea(Option<IdeaId>),

    PostIdea(Idea),
    PostComment(IdeaId, String),
    PostReply(IdeaId, CommentId, String),
}

pub struct App {
    feed: Rc<Feed>,
    users: Vec<User>,
    session: Session,
    notifications: VecDeque<(u64, Notification)>, // push_back, pop_front
    next_notification: u64,
    query: String,
    tag: Option<String>,
    open_idea: Option<IdeaId>,
}

impl App {
    fn push_notification(&mut self, n: Notification) {
        self.notifications.push_back((self.next_notification, n));
        self.next_notification += 1;
        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.pop_front();
        }
    }

    fn visible_ideas(&self) -> Vec<Idea> {
        let ideas = match &self.tag {
            Some(t) => self.feed.with_tag(t, &self.query),
            None => self.feed.search(&self.query),
        };
        ideas.into_iter().cloned().collect()
    }

    fn view_feed(&self, ctx: &Context<Self>) -> Html {
        let on_open = ctx.link().callback(|id: IdeaId| AppMsg::OpenIdea(Some(id)));
        let on_select_tag = ctx.link().callback(|slug: String| AppMsg::SelectTag(Some(slug)));
        let filtering = !self.query.trim().is_empty() || self.tag.is_some();
        let featured = (!filtering).then(|| {
            html! {
                <section class="mb-5">
                    <h2 class="fs-4 mb-3">{ "Trending ideas" }</h2>
                    <div class="row g-4">
                        { for self.feed.featured(FEATURED_IDEAS).iter().map(|i| html! {
                            <div class="col-md-4" key={ i.id.0.clone() }>
                                <ui::IdeaCard
                                    idea={ i.clone() }
                                    variant={ CardVariant::Featured }
                                    on_open={ on_open.clone() }
                                    on_select_tag={ on_select_tag.clone() }
                                />
                            </div>
                        }) }
                    </div>
                </section>
            }
        });
        let active_tag = self.tag.clone().map(|t| {
            html! {
                <div class="mb-3 d-flex align-items-center gap-2">
                    <ui::TagBadge name={ t } active={ true } />
                    <button
                        type="button"
                        class="btn btn-link btn-sm"
                        onclick={ ctx.link().callback(|_| AppMsg::SelectTag(None)) }
                    >
                        { "Clear" }
                    </button>
                </div>
            }
        });
        let ideas = self.visible_ideas();
        html! {
            <>
                { for featured }
                <section class="mb-5">
                    <h2 class="fs-6 mb-3">{ "Explore trending topics" }</h2>
                    <div class="d-flex flex-wrap gap-2">
                        { for self.feed.trending_tags().iter().map(|t| html! {
                            <ui::TagBadge
                                key={ t.name.clone() }
                                name={ t.name.clone() }
                                count={ t.count }
                                active={ self.tag.as_deref() == Some(tag_slug(&t.name).as_str()) }
                                on_select={ on_select_tag.clone() }
                            />
                        }) }
                    </div>
                </section>
                <ui::IdeaForm on_submit={ ctx.link().callback(AppMsg::PostIdea) } />
                { for active_tag }
                if ideas.is_empty() {
                    <p class="text-muted">{ "No ideas match your search." }</p>
                } else {
                    <div class="d-flex flex-column gap-3">
                        { for ideas.into_iter().map(|i| {
                            let key = i.id.0.clone();
                            html! {
                                <ui::IdeaCard
                                    key={ key }
                                    idea={ i }
                                    variant={ CardVariant::Compact }
                                    on_open={ on_open.clone() }
                                />
                            }
                        }) }
                    </div>
                }
            </>
        }
    }

    fn view_idea(&self, ctx: &Context<Self>, idea: &Idea) -> Html {
        let comments = self
            .feed
            .thread(&idea.id)
            .map(|t| t.roots().to_vec())
            .unwrap_or_default();
        let on_comment = {
            let id = idea.id.clone();
            ctx.link()
                .callback(move |content: String| AppMsg::PostComment(id.clone(), content))
        };
        let on_reply = {
            let id = idea.id.clone();
            ctx.link().callback(move |(parent, content): (CommentId, String)| {
                AppMsg::PostReply(id.clone(), parent, content)
            })
        };
        html! {
            <>
                <button
                    type="button"
                    class="btn btn-link px-0 mb-3"
                    onclick={ ctx.link().callback(|_| AppMsg::OpenIdea(None)) }
                >
                    <span class="bi-arrow-left me-1"></span>
                    { "Back to ideas" }
                </button>
                <ui::IdeaCard
                    idea={ idea.clone() }
                    variant={ CardVariant::Featured }
                    on_select_tag={ ctx.link().callback(|slug: String| AppMsg::SelectTag(Some(slug))) }
                />
                <ui::CommentThreadView { comments } { on_comment } { on_reply } />
            </>
        }
    }
}

/// The dataset saved under `KEY_DATASET` (for instance the output of
/// `generate-test-data`), falling back to the builtin one
fn load_feed() -> (Vec<User>, Feed) {
    match LocalStorage::get::<Dataset>(KEY_DATASET) {
        Err(StorageError::KeyNotFound(_)) => (),
        Err(e) => tracing::warn!(%e, "ignoring unreadable dataset from LocalStorage"),
        Ok(dataset) => {
            let users = dataset.users.clone();
            match Feed::from_dataset(dataset) {
                Ok(feed) => return (users, feed),
                Err(e) => tracing::warn!(?e, "ignoring inconsistent dataset from LocalStorage"),
            }
        }
    }
    let dataset = mock::builtin_dataset().expect("failed loading builtin dataset");
    let users = dataset.users.clone();
    let feed = Feed::from_dataset(dataset).expect("builtin dataset is inconsistent");
    (users, feed)
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let (users, feed) = load_feed();

        // Restore the session from the last visit
        let session = LocalStorage::get::<UserId>(KEY_SESSION_USER)
            .ok()
            .and_then(|id| users.iter().find(|u| u.id == id).cloned())
            .map(Session::signed_in)
            .unwrap_or_default();

        App {
            feed: Rc::new(feed),
            users,
            session,
            notifications: VecDeque::new(),
            next_notification: 0,
            query: String::new(),
            tag: None,
            open_idea: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SignIn(id) => match self.users.iter().find(|u| u.id == id) {
                None => tracing::warn!(?id, "attempted signing in as unknown user"),
                Some(u) => {
                    LocalStorage::set(KEY_SESSION_USER, &u.id)
                        .expect("failed saving session to LocalStorage");
                    tracing::debug!(?id, "signed in");
                    self.session = Session::signed_in(u.clone());
                }
            },
            AppMsg::SignOut => {
                LocalStorage::delete(KEY_SESSION_USER);
                self.session = Session::anonymous();
            }
            AppMsg::Notify(n) => self.push_notification(n),
            AppMsg::DismissNotification(id) => self.notifications.retain(|(i, _)| *i != id),
            AppMsg::Search(q) => self.query = q,
            AppMsg::SelectTag(t) => {
                self.tag = t;
                self.open_idea = None;
            }
            AppMsg::OpenIdea(id) => self.open_idea = id,
            AppMsg::PostIdea(idea) => {
                Rc::make_mut(&mut self.feed).post_idea(idea);
                self.push_notification(Notification::info(
                    "Idea posted",
                    "Your idea has been shared with the community",
                ));
            }
            AppMsg::PostComment(idea, content) => {
                let mut notes = Vec::new();
                let _ = Rc::make_mut(&mut self.feed).comment_as(
                    &self.session,
                    &idea,
                    &content,
                    Utc::now(),
                    &mut |n: Notification| notes.push(n),
                );
                notes.into_iter().for_each(|n| self.push_notification(n));
            }
            AppMsg::PostReply(idea, parent, content) => {
                let mut notes = Vec::new();
                let _ = Rc::make_mut(&mut self.feed).reply_as(
                    &self.session,
                    &idea,
                    &parent,
                    &content,
                    Utc::now(),
                    &mut |n: Notification| notes.push(n),
                );
                notes.into_iter().for_each(|n| self.push_notification(n));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let viewer = ui::Viewer {
            session: self.session.clone(),
            notify: ctx.link().callback(AppMsg::Notify),
        };
        let main = match self.open_idea.as_ref().and_then(|id| self.feed.idea(id)) {
            Some(idea) => self.view_idea(ctx, idea),
            None => self.view_feed(ctx),
        };
        html! {
            <ContextProvider<ui::Viewer> context={ viewer }>
                <div class="container">
                    <header class="d-flex align-items-center gap-3 py-2">
                        <a
                            class="fs-4 fw-bold text-decoration-none"
                            href="#"
                            onclick={ ctx.link().callback(|e: MouseEvent| {
                                e.prevent_default();
                                AppMsg::OpenIdea(None)
                            }) }
                        >
                            { "ideaexchange" }
                        </a>
                        <ui::SearchBar
                            value={ self.query.clone() }
                            on_search={ ctx.link().callback(AppMsg::Search) }
                        />
                        <ui::SessionSwitch
                            users={ self.users.clone() }
                            current={ self.session.user().cloned() }
                            on_sign_in={ ctx.link().callback(AppMsg::SignIn) }
                            on_sign_out={ ctx.link().callback(|()| AppMsg::SignOut) }
                        />
                    </header>
                    <main class="py-4">
                        { main }
                    </main>
                </div>
                <ui::Toasts
                    notifications={ self.notifications.iter().cloned().collect::<Vec<_>>() }
                    on_dismiss={ ctx.link().callback(AppMsg::DismissNotification) }
                />
            </ContextProvider<ui::Viewer>>
        }
    }
}
