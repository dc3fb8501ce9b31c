mod app;
pub use app::App;

mod avatar;
pub use avatar::Avatar;

mod comment;
pub use comment::CommentView;

mod comment_thread;
pub use comment_thread::CommentThreadView;

mod idea_card;
pub use idea_card::IdeaCard;

mod idea_form;
pub use idea_form::IdeaForm;

mod search_bar;
pub use search_bar::SearchBar;

mod session_switch;
pub use session_switch::SessionSwitch;

mod tag_badge;
pub use tag_badge::TagBadge;

mod toasts;
pub use toasts::Toasts;

mod viewer;
pub use viewer::Viewer;
