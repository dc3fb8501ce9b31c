use crate::api::{validate_string, Error};

/// Reply drafting state of a single comment
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Composer {
    #[default]
    Idle,
    Composing {
        draft: String,
    },
}

impl Composer {
    pub fn is_composing(&self) -> bool {
        matches!(self, Composer::Composing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Composer::Idle => None,
            Composer::Composing { draft } => Some(draft),
        }
    }

    /// The draft as it would be submitted, if it is not blank
    pub fn trimmed(&self) -> Option<&str> {
        self.draft().map(str::trim).filter(|d| !d.is_empty())
    }

    /// Opens the composer, or closes it and drops the draft if it was open
    pub fn toggle(&mut self) {
        *self = match self {
            Composer::Idle => Composer::Composing {
                draft: String::new(),
            },
            Composer::Composing { .. } => Composer::Idle,
        };
    }

    pub fn cancel(&mut self) {
        *self = Composer::Idle;
    }

    pub fn edit(&mut self, text: String) -> Result<(), Error> {
        match self {
            Composer::Idle => Err(Error::NotComposing),
            Composer::Composing { draft } => {
                *draft = text;
                Ok(())
            }
        }
    }

    /// Takes the trimmed draft out and goes back to idle
    ///
    /// A blank draft is left in place and rejected.
    pub fn take(&mut self) -> Result<String, Error> {
        let content = match self.draft() {
            None => return Err(Error::NotComposing),
            Some(d) => String::from(d.trim()),
        };
        if content.is_empty() {
            return Err(Error::EmptyContent);
        }
        validate_string(&content)?;
        *self = Composer::Idle;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_edit_take() {
        let mut c = Composer::default();
        assert!(!c.is_composing());
        c.toggle();
        assert!(c.is_composing());
        c.edit(String::from("  hello there \n")).unwrap();
        assert_eq!(c.trimmed(), Some("hello there"));
        assert_eq!(c.take(), Ok(String::from("hello there")));
        assert_eq!(c, Composer::Idle);
    }

    #[test]
    fn blank_draft_is_kept_and_rejected() {
        let mut c = Composer::default();
        c.toggle();
        c.edit(String::from(" \t\n ")).unwrap();
        assert_eq!(c.trimmed(), None);
        assert_eq!(c.take(), Err(Error::EmptyContent));
        assert_eq!(c.draft(), Some(" \t\n "));
    }

    #[test]
    fn idle_rejects_edits() {
        let mut c = Composer::default();
        assert_eq!(c.edit(String::from("hi")), Err(Error::NotComposing));
        assert_eq!(c.take(), Err(Error::NotComposing));
    }

    #[test]
    fn toggle_twice_drops_draft() {
        let mut c = Composer::default();
        c.toggle();
        c.edit(String::from("draft")).unwrap();
        c.toggle();
        assert_eq!(c, Composer::Idle);
        c.toggle();
        assert_eq!(c.draft(), Some(""));
    }

    #[test]
    fn cancel() {
        let mut c = Composer::default();
        c.toggle();
        c.edit(String::from("draft")).unwrap();
        c.cancel();
        assert_eq!(c, Composer::Idle);
    }
}
