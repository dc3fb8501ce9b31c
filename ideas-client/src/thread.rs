use std::collections::HashSet;

use crate::{
    api::{validate_string, Comment, CommentId, Error, Time, User},
    comment::{find_in, find_in_mut, PreOrder},
};

/// The canonical comment tree of one idea
///
/// Views only ever read it; replies they propose come back here through
/// `add_reply`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentThread {
    roots: Vec<Comment>,
}

fn set_parent_ids(comments: &mut [Comment], parent: Option<&CommentId>) {
    for c in comments.iter_mut() {
        c.parent_id = parent.cloned();
        set_parent_ids(&mut c.replies, Some(&c.id));
    }
}

fn normalize_content(content: &str) -> Result<String, Error> {
    let content = content.trim();
    if content.is_empty() {
        return Err(Error::EmptyContent);
    }
    validate_string(content)?;
    Ok(String::from(content))
}

impl CommentThread {
    pub fn new() -> CommentThread {
        CommentThread { roots: Vec::new() }
    }

    /// Checks that ids are unique and points every reply's `parent_id` to the
    /// comment it is nested under
    pub fn from_roots(mut roots: Vec<Comment>) -> Result<CommentThread, Error> {
        {
            let mut seen = HashSet::new();
            for (c, _) in PreOrder::new(&roots, 0) {
                if !seen.insert(&c.id) {
                    return Err(Error::IdAlreadyUsed(c.id.0.clone()));
                }
            }
        }
        set_parent_ids(&mut roots, None);
        Ok(CommentThread { roots })
    }

    pub fn roots(&self) -> &[Comment] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Comment> {
        self.roots
    }

    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(&self.roots, 0)
    }

    /// Total number of comments, replies included
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        find_in(&self.roots, id)
    }

    fn fresh_id(&self) -> CommentId {
        loop {
            let id = CommentId::fresh();
            if self.find(&id).is_none() {
                return id;
            }
        }
    }

    fn new_comment(&self, content: String, author: User, now: Time) -> Comment {
        Comment {
            id: self.fresh_id(),
            content,
            author,
            created_at: now,
            updated_at: None,
            likes: 0,
            replies: Vec::new(),
            parent_id: None,
        }
    }

    pub fn add_comment(
        &mut self,
        content: &str,
        author: User,
        now: Time,
    ) -> Result<CommentId, Error> {
        let content = normalize_content(content)?;
        let c = self.new_comment(content, author, now);
        let id = c.id.clone();
        self.roots.push(c);
        Ok(id)
    }

    /// Appends a reply at the end of `parent`'s replies
    ///
    /// If `parent` is not in this thread the reply is kept as a top-level
    /// comment.
    pub fn add_reply(
        &mut self,
        parent: &CommentId,
        content: &str,
        author: User,
        now: Time,
    ) -> Result<CommentId, Error> {
        let content = normalize_content(content)?;
        let mut c = self.new_comment(content, author, now);
        let id = c.id.clone();
        match find_in_mut(&mut self.roots, parent) {
            Some(p) => {
                c.parent_id = Some(parent.clone());
                p.replies.push(c);
            }
            None => {
                tracing::warn!(?parent, "reply to unknown comment, adding it at top level");
                self.roots.push(c);
            }
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures::{at, comment, user, with_replies},
        PreOrder,
    };

    fn example() -> CommentThread {
        CommentThread::from_roots(vec![
            with_replies(comment("c1", 5), vec![comment("r1", 3), comment("r2", 2)]),
            comment("c2", 2),
        ])
        .unwrap()
    }

    #[test]
    fn from_roots_sets_parents() {
        let mut roots = vec![with_replies(
            comment("c1", 0),
            vec![with_replies(comment("r1", 0), vec![comment("r1.1", 0)])],
        )];
        roots[0].parent_id = Some(CommentId::from("dangling"));
        let t = CommentThread::from_roots(roots).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.find(&CommentId::from("c1")).unwrap().parent_id, None);
        assert_eq!(
            t.find(&CommentId::from("r1")).unwrap().parent_id,
            Some(CommentId::from("c1"))
        );
        assert_eq!(
            t.find(&CommentId::from("r1.1")).unwrap().parent_id,
            Some(CommentId::from("r1"))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let res = CommentThread::from_roots(vec![
            with_replies(comment("c1", 0), vec![comment("dup", 0)]),
            comment("dup", 0),
        ]);
        assert_eq!(res, Err(Error::IdAlreadyUsed(String::from("dup"))));
    }

    #[test]
    fn reply_is_appended_last() {
        let mut t = example();
        let id = t
            .add_reply(&CommentId::from("c1"), "  indoor LEDs  ", user("Bob"), at(120))
            .unwrap();
        let c1 = t.find(&CommentId::from("c1")).unwrap();
        let ids = c1.replies.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids, vec![CommentId::from("r1"), CommentId::from("r2"), id.clone()]);

        let new = t.find(&id).unwrap();
        assert_eq!(new.content, "indoor LEDs");
        assert_eq!(new.likes, 0);
        assert_eq!(new.author, user("Bob"));
        assert_eq!(new.created_at, at(120));
        assert_eq!(new.parent_id, Some(CommentId::from("c1")));
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn reply_to_leaf_makes_it_a_parent() {
        let mut t = example();
        t.add_reply(&CommentId::from("c2"), "first!", user("Bob"), at(0))
            .unwrap();
        assert!(!t.find(&CommentId::from("c2")).unwrap().is_leaf());
        let (last, level) = PreOrder::new(t.roots(), 0).last().unwrap();
        assert_eq!(last.content, "first!");
        assert_eq!(level, 1);
    }

    #[test]
    fn reply_to_unknown_parent_goes_top_level() {
        let mut t = example();
        let id = t
            .add_reply(&CommentId::from("gone"), "still here", user("Bob"), at(0))
            .unwrap();
        assert_eq!(t.roots().last().unwrap().id, id);
        assert_eq!(t.roots().last().unwrap().parent_id, None);
    }

    #[test]
    fn blank_content_is_rejected() {
        let mut t = example();
        assert_eq!(
            t.add_reply(&CommentId::from("c1"), " \n ", user("Bob"), at(0)),
            Err(Error::EmptyContent)
        );
        assert_eq!(
            t.add_comment("a\0b", user("Bob"), at(0)),
            Err(Error::NullByteInString(String::from("a\0b")))
        );
        assert_eq!(t, example());
    }

    #[test]
    fn top_level_comment() {
        let mut t = CommentThread::new();
        assert!(t.is_empty());
        let id = t.add_comment("hello", user("Carol"), at(0)).unwrap();
        assert_eq!(t.roots().len(), 1);
        assert_eq!(t.roots()[0].id, id);
    }
}
