use crate::api::{Comment, CommentId};

/// Replies of comments nested deeper than this are rendered without further
/// indentation
pub const MAX_INDENT_LEVEL: usize = 3;

pub fn indents_replies(level: usize) -> bool {
    level < MAX_INDENT_LEVEL
}

/// Depth-first, pre-order walk over a comment forest, yielding each comment
/// along with its nesting level
pub struct PreOrder<'a> {
    // next comment is at the end
    stack: Vec<(&'a Comment, usize)>,
}

impl<'a> PreOrder<'a> {
    pub fn new(roots: &'a [Comment], level: usize) -> PreOrder<'a> {
        PreOrder {
            stack: roots.iter().rev().map(|c| (c, level)).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (&'a Comment, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (c, level) = self.stack.pop()?;
        self.stack
            .extend(c.replies.iter().rev().map(|r| (r, level + 1)));
        Some((c, level))
    }
}

pub trait CommentExt {
    /// Walks this comment then all its replies, this comment being at level 0
    fn pre_order(&self) -> PreOrder<'_>;

    fn node_count(&self) -> usize;
}

impl CommentExt for Comment {
    fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(std::slice::from_ref(self), 0)
    }

    fn node_count(&self) -> usize {
        self.pre_order().count()
    }
}

pub fn find_in<'a>(comments: &'a [Comment], id: &CommentId) -> Option<&'a Comment> {
    PreOrder::new(comments, 0)
        .map(|(c, _)| c)
        .find(|c| c.id == *id)
}

pub fn find_in_mut<'a>(comments: &'a mut [Comment], id: &CommentId) -> Option<&'a mut Comment> {
    for c in comments.iter_mut() {
        if c.id == *id {
            return Some(c);
        }
        if let Some(res) = find_in_mut(&mut c.replies, id) {
            return Some(res);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::fixtures::{comment, with_replies};

    fn example_forest() -> Vec<Comment> {
        vec![
            with_replies(
                comment("c1", 5),
                vec![
                    with_replies(
                        comment("r1", 3),
                        vec![with_replies(
                            comment("r1.1", 0),
                            vec![with_replies(
                                comment("r1.1.1", 0),
                                vec![comment("r1.1.1.1", 0)],
                            )],
                        )],
                    ),
                    comment("r2", 2),
                ],
            ),
            comment("c2", 2),
        ]
    }

    /// Builds a forest from a byte string: each byte picks the parent of the
    /// next comment among the already-built ones, or makes it a root
    fn forest_from_shape(shape: &[u8]) -> (Vec<Comment>, HashMap<CommentId, usize>) {
        let mut roots = Vec::new();
        let mut ids: Vec<CommentId> = Vec::new();
        let mut depths = HashMap::new();
        for (i, b) in shape.iter().enumerate() {
            let c = comment(&format!("n{i}"), 0);
            let pick = *b as usize % (ids.len() + 1);
            if pick == ids.len() {
                depths.insert(c.id.clone(), 0);
                roots.push(c);
            } else {
                let parent_id = &ids[pick];
                let depth = depths[parent_id] + 1;
                depths.insert(c.id.clone(), depth);
                find_in_mut(&mut roots, parent_id)
                    .expect("parent was built before")
                    .replies
                    .push(c);
            }
            ids.push(CommentId(format!("n{i}")));
        }
        (roots, depths)
    }

    #[test]
    fn pre_order_visits_every_node_once_at_its_depth() {
        bolero::check!()
            .with_type::<Vec<u8>>()
            .cloned()
            .for_each(|shape: Vec<u8>| {
                let shape = &shape[..shape.len().min(64)];
                let (roots, depths) = forest_from_shape(shape);
                let mut seen = HashSet::new();
                for (c, level) in PreOrder::new(&roots, 0) {
                    assert!(seen.insert(c.id.clone()), "{:?} visited twice", c.id);
                    assert_eq!(level, depths[&c.id], "{:?} at the wrong level", c.id);
                    for r in c.replies.iter() {
                        assert_eq!(depths[&r.id], level + 1);
                    }
                }
                assert_eq!(seen.len(), shape.len());
                assert_eq!(
                    roots.iter().map(|r| r.node_count()).sum::<usize>(),
                    shape.len()
                );
            })
    }

    #[test]
    fn pre_order_keeps_insertion_order() {
        let forest = example_forest();
        let order = PreOrder::new(&forest, 0)
            .map(|(c, l)| (c.id.0.as_str(), l))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                ("c1", 0),
                ("r1", 1),
                ("r1.1", 2),
                ("r1.1.1", 3),
                ("r1.1.1.1", 4),
                ("r2", 1),
                ("c2", 0),
            ]
        );
    }

    #[test]
    fn indentation_is_capped() {
        let forest = example_forest();
        let indents = PreOrder::new(&forest, 0)
            .map(|(c, level)| (c.id.0.as_str(), indents_replies(level)))
            .collect::<Vec<_>>();
        assert_eq!(
            indents,
            vec![
                ("c1", true),
                ("r1", true),
                ("r1.1", true),
                ("r1.1.1", false),
                ("r1.1.1.1", false),
                ("r2", true),
                ("c2", true),
            ]
        );
    }

    #[test]
    fn find_nested() {
        let mut forest = example_forest();
        assert_eq!(
            find_in(&forest, &CommentId::from("r1.1.1")).map(|c| c.likes),
            Some(0)
        );
        assert!(find_in(&forest, &CommentId::from("nope")).is_none());
        find_in_mut(&mut forest, &CommentId::from("r2"))
            .expect("r2 is in the forest")
            .likes = 10;
        assert_eq!(forest[0].replies[1].likes, 10);
    }
}
