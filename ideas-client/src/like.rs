/// Local, optimistic like state of a comment
///
/// The displayed count is the count the comment was loaded with, plus one if
/// the current user liked it from this view. Nothing is sent anywhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LikeToggle {
    loaded: u32,
    liked: bool,
}

impl LikeToggle {
    pub fn new(loaded: u32) -> LikeToggle {
        LikeToggle {
            loaded,
            liked: false,
        }
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn count(&self) -> u32 {
        match self.liked {
            true => self.loaded.saturating_add(1),
            false => self.loaded,
        }
    }

    /// Returns the new count
    pub fn toggle(&mut self) -> u32 {
        self.liked = !self.liked;
        self.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let mut l = LikeToggle::new(5);
        assert_eq!(l.count(), 5);
        assert_eq!(l.toggle(), 6);
        assert!(l.is_liked());
        assert_eq!(l.toggle(), 5);
        assert!(!l.is_liked());
    }

    #[test]
    fn zero_likes() {
        let mut l = LikeToggle::new(0);
        assert_eq!(l.toggle(), 1);
        assert_eq!(l.toggle(), 0);
    }
}
