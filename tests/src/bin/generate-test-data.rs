//! Prints a random dataset as JSON. Saved in the browser's local storage under
//! the `dataset` key, it replaces the builtin dataset of the web front end.

use std::collections::BTreeMap;

use anyhow::Context;
use chrono::{Duration, Utc};
use ideas_api::{Dataset, Idea, IdeaId, TrendingTag, User, UserId};
use ideas_client::{tag_slug, CommentThread};
use rand::{seq::SliceRandom, Rng};

const NUM_USERS: usize = 8;

const NUM_IDEAS: usize = 40;
const IDEA_TITLE_WORDS: usize = 6;
const IDEA_CONTENT_WORDS: usize = 60;
const MAX_TAGS_PER_IDEA: usize = 5;

const MAX_COMMENTS_PER_IDEA: usize = 30;
const COMMENT_WORDS: usize = 20;
// probability that a comment replies to an earlier one instead of being top-level
const REPLY_PROBABILITY: f64 = 0.7;

const TAGS: &[&str] = &[
    "technology", "AI", "sustainability", "health", "education", "business", "design",
    "society", "philosophy", "science", "urban", "open source",
];

fn gen_user(rng: &mut impl Rng, i: usize) -> User {
    let name = lipsum::lipsum_title();
    User {
        id: UserId::fresh(),
        email: format!("{}@example.com", tag_slug(&name)),
        avatar: rng
            .gen_bool(0.8)
            .then(|| format!("https://i.pravatar.cc/150?img={}", i + 1)),
        bio: rng.gen_bool(0.5).then(|| lipsum::lipsum_words(12)),
        joined_at: Utc::now() - Duration::days(rng.gen_range(100..1000)),
        name,
    }
}

fn gen_idea(rng: &mut impl Rng, users: &[User]) -> Idea {
    let num_tags = rng.gen_range(0..=MAX_TAGS_PER_IDEA);
    let mut tags = TAGS
        .choose_multiple(rng, num_tags)
        .map(|t| String::from(*t))
        .collect::<Vec<_>>();
    tags.sort();
    Idea {
        id: IdeaId::fresh(),
        title: lipsum::lipsum_words(IDEA_TITLE_WORDS),
        content: lipsum::lipsum_words(IDEA_CONTENT_WORDS),
        author: users.choose(rng).expect("no users generated").clone(),
        created_at: Utc::now() - Duration::minutes(rng.gen_range(1..200_000)),
        updated_at: None,
        likes: rng.gen_range(0..100),
        comments: 0,
        tags,
        image: None,
    }
}

fn gen_thread(rng: &mut impl Rng, users: &[User], idea: &Idea) -> anyhow::Result<CommentThread> {
    let mut thread = CommentThread::new();
    let mut ids = Vec::new();
    for i in 0..rng.gen_range(0..=MAX_COMMENTS_PER_IDEA) {
        let author = users.choose(rng).expect("no users generated").clone();
        let content = lipsum::lipsum_words(rng.gen_range(3..=COMMENT_WORDS));
        let date = idea.created_at + Duration::minutes(10 * i as i64 + 1);
        let id = match ids.choose(rng) {
            Some(parent) if rng.gen_bool(REPLY_PROBABILITY) => {
                thread.add_reply(parent, &content, author, date)
            }
            _ => thread.add_comment(&content, author, date),
        }
        .context("generating comment")?;
        ids.push(id);
    }
    Ok(thread)
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();

    let users = (0..NUM_USERS)
        .map(|i| gen_user(&mut rng, i))
        .collect::<Vec<_>>();

    let mut ideas = Vec::with_capacity(NUM_IDEAS);
    let mut comments = BTreeMap::new();
    for _ in 0..NUM_IDEAS {
        let mut idea = gen_idea(&mut rng, &users);
        let thread = gen_thread(&mut rng, &users, &idea)?;
        idea.comments = thread.len() as u32;
        if !thread.is_empty() {
            comments.insert(idea.id.clone(), thread.into_roots());
        }
        ideas.push(idea);
    }
    ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let trending_tags = TAGS
        .iter()
        .map(|t| TrendingTag {
            name: String::from(*t),
            count: ideas.iter().filter(|i| i.tags.iter().any(|it| it == t)).count() as u32,
        })
        .collect();

    let dataset = Dataset {
        users,
        ideas,
        comments,
        trending_tags,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&dataset).context("serializing dataset")?
    );
    Ok(())
}
