use chrono::TimeZone;

use crate::api::{Comment, CommentId, Time, User, UserId};

pub fn at(secs: i64) -> Time {
    chrono::Utc
        .timestamp_opt(1_692_000_000 + secs, 0)
        .single()
        .expect("fixture timestamp is valid")
}

pub fn user(name: &str) -> User {
    User {
        id: UserId(name.to_lowercase()),
        name: String::from(name),
        email: format!("{}@example.com", name.to_lowercase()),
        avatar: None,
        bio: None,
        joined_at: at(0),
    }
}

pub fn comment(id: &str, likes: u32) -> Comment {
    Comment {
        id: CommentId::from(id),
        content: format!("comment {id}"),
        author: user("Alice"),
        created_at: at(60),
        updated_at: None,
        likes,
        replies: Vec::new(),
        parent_id: None,
    }
}

pub fn with_replies(mut c: Comment, replies: Vec<Comment>) -> Comment {
    c.replies = replies;
    c
}
