use crate::api::Idea;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CardVariant {
    #[default]
    Default,
    Compact,
    Featured,
}

impl CardVariant {
    fn excerpt_len(&self) -> usize {
        match self {
            CardVariant::Compact => 120,
            CardVariant::Default | CardVariant::Featured => 180,
        }
    }

    pub fn shows_image(&self) -> bool {
        !matches!(self, CardVariant::Compact)
    }

    pub fn shows_tags(&self) -> bool {
        !matches!(self, CardVariant::Compact)
    }
}

/// Idea content cut down to what fits on a card of the given variant
pub fn excerpt(content: &str, variant: CardVariant) -> String {
    let max = variant.excerpt_len();
    match content.char_indices().nth(max) {
        None => String::from(content),
        Some((cut, _)) => format!("{}...", &content[..cut]),
    }
}

/// Tags displayed on a card, and how many more there are
pub fn visible_tags(tags: &[String]) -> (&[String], usize) {
    const SHOWN: usize = 3;
    match tags.len() > SHOWN {
        true => (&tags[..SHOWN], tags.len() - SHOWN),
        false => (tags, 0),
    }
}

/// The form of a tag name used to refer to it, eg. "Urban Farming" becomes
/// "urban-farming"
pub fn tag_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn has_tag(idea: &Idea, slug: &str) -> bool {
    idea.tags.iter().any(|t| tag_slug(t) == slug)
}
