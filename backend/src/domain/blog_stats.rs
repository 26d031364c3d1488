//! Aggregations over a list of blog entries.
//!
//! All functions are pure. Ties resolve to whichever candidate appears
//! first in the input.

use serde::{Deserialize, Serialize};

use crate::domain::BlogEntry;

/// Most-liked entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteBlog {
    /// Entry title.
    pub title: String,
    /// Entry author.
    pub author: String,
    /// Like count.
    pub likes: u64,
}

/// Author with the most entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogCount {
    /// Author name.
    pub author: String,
    /// Number of entries.
    pub blogs: usize,
}

/// Author with the highest like total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    /// Author name.
    pub author: String,
    /// Likes across the author's entries.
    pub likes: u64,
}

/// Every statistic at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    /// Sum of all likes.
    pub total_likes: u64,
    /// Most liked entry.
    pub favorite_blog: Option<FavoriteBlog>,
    /// Author with the most entries.
    pub most_blogs: Option<AuthorBlogCount>,
    /// Author with the most likes.
    pub most_likes: Option<AuthorLikes>,
}

impl BlogStats {
    /// Compute every statistic over `entries`.
    pub fn from_entries(entries: &[BlogEntry]) -> Self {
        Self {
            total_likes: total_likes(entries),
            favorite_blog: favorite_blog(entries),
            most_blogs: most_blogs(entries),
            most_likes: most_likes(entries),
        }
    }
}

/// Sum of likes; zero for no entries. Saturates at `u64::MAX`.
pub fn total_likes(entries: &[BlogEntry]) -> u64 {
    entries
        .iter()
        .map(BlogEntry::likes)
        .fold(0, u64::saturating_add)
}

/// Entry with the most likes.
pub fn favorite_blog(entries: &[BlogEntry]) -> Option<FavoriteBlog> {
    first_max_by_key(entries.iter(), |entry| entry.likes()).map(|entry| FavoriteBlog {
        title: entry.title().to_owned(),
        author: entry.author().to_owned(),
        likes: entry.likes(),
    })
}

/// Author with the most entries.
pub fn most_blogs(entries: &[BlogEntry]) -> Option<AuthorBlogCount> {
    let tallies = tally_by_author(entries, |_| 1_u64);
    first_max_by_key(tallies.into_iter(), |(_, count)| *count).map(|(author, blogs)| {
        AuthorBlogCount {
            author: author.to_owned(),
            blogs: usize::try_from(blogs).unwrap_or(usize::MAX),
        }
    })
}

/// Author whose entries collected the most likes.
pub fn most_likes(entries: &[BlogEntry]) -> Option<AuthorLikes> {
    let tallies = tally_by_author(entries, BlogEntry::likes);
    first_max_by_key(tallies.into_iter(), |(_, likes)| *likes).map(|(author, likes)| AuthorLikes {
        author: author.to_owned(),
        likes,
    })
}

/// Per-author sums in first-appearance order.
fn tally_by_author(entries: &[BlogEntry], weight: impl Fn(&BlogEntry) -> u64) -> Vec<(&str, u64)> {
    let mut tallies: Vec<(&str, u64)> = Vec::new();
    for entry in entries {
        let value = weight(entry);
        match tallies.iter_mut().find(|(author, _)| *author == entry.author()) {
            Some((_, total)) => *total = total.saturating_add(value),
            None => tallies.push((entry.author(), value)),
        }
    }
    tallies
}

/// `Iterator::max_by_key` keeps the last maximum; ties here must go to the
/// first.
fn first_max_by_key<T>(items: impl Iterator<Item = T>, key: impl Fn(&T) -> u64) -> Option<T> {
    let mut best: Option<(u64, T)> = None;
    for item in items {
        let value = key(&item);
        if best.as_ref().is_none_or(|(top, _)| value > *top) {
            best = Some((value, item));
        }
    }
    best.map(|(_, item)| item)
}
