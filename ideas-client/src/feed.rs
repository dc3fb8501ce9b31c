use std::collections::HashMap;

use anyhow::Context;

use crate::{
    api::{CommentId, Dataset, Error, Idea, IdeaId, Time, TrendingTag, User},
    has_tag, CommentThread, Notification, Notifier, Session,
};

/// Whether the title, content or one of the tags of `idea` contains `query`,
/// ignoring case. An empty query matches everything.
fn matches_query(idea: &Idea, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || idea.title.to_lowercase().contains(&query)
        || idea.content.to_lowercase().contains(&query)
        || idea.tags.iter().any(|t| t.to_lowercase().contains(&query))
}

/// All the ideas shown by the front end, with their comment threads
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Feed {
    // newest first
    ideas: Vec<Idea>,
    threads: HashMap<IdeaId, CommentThread>,
    trending_tags: Vec<TrendingTag>,
}

impl Feed {
    pub fn from_dataset(d: Dataset) -> anyhow::Result<Feed> {
        let mut ideas = d.ideas;
        ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let mut threads = HashMap::with_capacity(d.comments.len());
        for (idea, roots) in d.comments {
            if !ideas.iter().any(|i| i.id == idea) {
                tracing::warn!(?idea, "dropping comments for idea not in dataset");
                continue;
            }
            let thread = CommentThread::from_roots(roots)
                .with_context(|| format!("loading comments of idea {:?}", idea))?;
            threads.insert(idea, thread);
        }
        Ok(Feed {
            ideas,
            threads,
            trending_tags: d.trending_tags,
        })
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn idea(&self, id: &IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|i| i.id == *id)
    }

    pub fn featured(&self, n: usize) -> &[Idea] {
        &self.ideas[..n.min(self.ideas.len())]
    }

    pub fn search(&self, query: &str) -> Vec<&Idea> {
        self.ideas.iter().filter(|i| matches_query(i, query)).collect()
    }

    /// Ideas tagged `slug` that also match `query`
    pub fn with_tag(&self, slug: &str, query: &str) -> Vec<&Idea> {
        self.ideas
            .iter()
            .filter(|i| has_tag(i, slug) && matches_query(i, query))
            .collect()
    }

    pub fn trending_tags(&self) -> &[TrendingTag] {
        &self.trending_tags
    }

    pub fn thread(&self, idea: &IdeaId) -> Option<&CommentThread> {
        self.threads.get(idea)
    }

    pub fn post_idea(&mut self, idea: Idea) {
        tracing::debug!(id = ?idea.id, "posting idea");
        self.ideas.insert(0, idea);
    }

    fn idea_mut(&mut self, id: &IdeaId) -> Result<&mut Idea, Error> {
        self.ideas
            .iter_mut()
            .find(|i| i.id == *id)
            .ok_or_else(|| Error::UnknownIdea(id.clone()))
    }

    pub fn post_comment(
        &mut self,
        idea: &IdeaId,
        content: &str,
        author: User,
        now: Time,
    ) -> Result<CommentId, Error> {
        self.idea_mut(idea)?;
        let thread = self.threads.entry(idea.clone()).or_default();
        let id = thread.add_comment(content, author, now)?;
        self.idea_mut(idea)?.comments += 1;
        Ok(id)
    }

    pub fn post_reply(
        &mut self,
        idea: &IdeaId,
        parent: &CommentId,
        content: &str,
        author: User,
        now: Time,
    ) -> Result<CommentId, Error> {
        self.idea_mut(idea)?;
        let thread = self.threads.entry(idea.clone()).or_default();
        let id = thread.add_reply(parent, content, author, now)?;
        self.idea_mut(idea)?.comments += 1;
        tracing::debug!(?idea, ?parent, ?id, "posted reply");
        Ok(id)
    }

    /// Posts a top-level comment as the signed-in user, telling them through
    /// `notifier` when it could not be added
    pub fn comment_as(
        &mut self,
        session: &Session,
        idea: &IdeaId,
        content: &str,
        now: Time,
        notifier: &mut impl Notifier,
    ) -> Result<CommentId, Error> {
        let author = session.require("comment on ideas", notifier)?.clone();
        self.post_comment(idea, content, author, now)
            .map_err(|e| rejected("Comment not posted", e, notifier))
    }

    /// Adds a reply as the signed-in user, telling them through `notifier`
    /// when it could not be added
    pub fn reply_as(
        &mut self,
        session: &Session,
        idea: &IdeaId,
        parent: &CommentId,
        content: &str,
        now: Time,
        notifier: &mut impl Notifier,
    ) -> Result<CommentId, Error> {
        let author = session.require("reply to comments", notifier)?.clone();
        self.post_reply(idea, parent, content, author, now)
            .map_err(|e| rejected("Reply not added", e, notifier))
    }
}

fn rejected(title: &str, e: Error, notifier: &mut impl Notifier) -> Error {
    tracing::warn!(%e, title, "rejected user content");
    notifier.notify(Notification::destructive(title, &e.to_string()));
    e
}
