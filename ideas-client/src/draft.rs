use crate::{
    api::{validate_string, Error, Idea, IdeaId, Time},
    Notification, Notifier, Session,
};

pub const MAX_TAGS: usize = 5;

/// A new idea being written in the idea form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IdeaDraft {
    pub title: String,
    pub content: String,
    tags: Vec<String>,
}

impl IdeaDraft {
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn can_add_tag(&self) -> bool {
        self.tags.len() < MAX_TAGS
    }

    pub fn add_tag(&mut self, tag: &str) -> Result<(), Error> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(Error::EmptyContent);
        }
        validate_string(tag)?;
        if self.tags.iter().any(|t| t == tag) {
            return Err(Error::TagAlreadyAdded(String::from(tag)));
        }
        if !self.can_add_tag() {
            return Err(Error::TooManyTags);
        }
        self.tags.push(String::from(tag));
        Ok(())
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Turns the draft into an idea authored by the signed-in user
    pub fn submit(
        &self,
        session: &Session,
        notifier: &mut impl Notifier,
        now: Time,
    ) -> Result<Idea, Error> {
        let author = session.require("post ideas", notifier)?;
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            notifier.notify(Notification::destructive(
                "Missing information",
                "Please provide both a title and content for your idea",
            ));
            return Err(Error::EmptyContent);
        }
        validate_string(title)?;
        validate_string(content)?;
        Ok(Idea {
            id: IdeaId::fresh(),
            title: String::from(title),
            content: String::from(content),
            author: author.clone(),
            created_at: now,
            updated_at: None,
            likes: 0,
            comments: 0,
            tags: self.tags.clone(),
            image: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{at, user};

    #[test]
    fn tag_rules() {
        let mut d = IdeaDraft::default();
        d.add_tag(" technology ").unwrap();
        assert_eq!(d.add_tag("  "), Err(Error::EmptyContent));
        assert_eq!(
            d.add_tag("technology"),
            Err(Error::TagAlreadyAdded(String::from("technology")))
        );
        for t in ["a", "b", "c", "d"] {
            d.add_tag(t).unwrap();
        }
        assert!(!d.can_add_tag());
        assert_eq!(d.add_tag("f"), Err(Error::TooManyTags));
        assert_eq!(d.tags(), &["technology", "a", "b", "c", "d"].map(String::from));
        d.remove_tag("b");
        assert_eq!(d.tags().len(), 4);
        d.add_tag("f").unwrap();
    }

    #[test]
    fn submit() {
        let mut notes = Vec::new();
        let mut notify = |n: Notification| notes.push(n);
        let d = IdeaDraft {
            title: String::from(" Urban farming "),
            content: String::from("Rooftops everywhere"),
            tags: vec![String::from("urban")],
        };
        let idea = d
            .submit(&Session::signed_in(user("Bob")), &mut notify, at(5))
            .unwrap();
        assert_eq!(idea.title, "Urban farming");
        assert_eq!(idea.author, user("Bob"));
        assert_eq!(idea.tags, vec![String::from("urban")]);
        assert_eq!((idea.likes, idea.comments), (0, 0));
        assert_eq!(idea.created_at, at(5));
        assert!(notes.is_empty());
    }

    #[test]
    fn submit_rejections_notify() {
        let mut notes = Vec::new();
        let mut notify = |n: Notification| notes.push(n);
        let d = IdeaDraft {
            title: String::from("Title"),
            content: String::from("   "),
            tags: Vec::new(),
        };
        assert_eq!(
            d.submit(&Session::anonymous(), &mut notify, at(0)),
            Err(Error::PermissionDenied)
        );
        assert_eq!(
            d.submit(&Session::signed_in(user("Bob")), &mut notify, at(0)),
            Err(Error::EmptyContent)
        );
        assert_eq!(
            notes,
            vec![
                Notification::sign_in_to("post ideas"),
                Notification::destructive(
                    "Missing information",
                    "Please provide both a title and content for your idea",
                ),
            ]
        );
    }
}
