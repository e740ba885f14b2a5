use indexmap::IndexMap;

use super::Game;

/// Splits a comma-separated genre field into trimmed, non-empty tags
pub fn split_genres(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Per-tag occurrence counts, kept in order of first occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreTally {
    counts: IndexMap<String, usize>,
}

impl GenreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tally from the genre fields of the given games
    pub fn from_games<'a, I>(games: I) -> Self
    where
        I: IntoIterator<Item = &'a Game>,
    {
        let mut tally = Self::new();
        for game in games {
            if let Some(genre) = game.genre.as_deref() {
                tally.record(genre);
            }
        }
        tally
    }

    /// Counts every tag in one genre field
    pub fn record(&mut self, field: &str) {
        for tag in split_genres(field) {
            *self.counts.entry(tag.to_string()).or_insert(0) += 1;
        }
    }

    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates tags with their counts in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    /// Returns the `n` most frequent tags.
    ///
    /// Tags with equal counts keep their first-occurrence order. That
    /// tie-break is arbitrary: it depends on the order games were read.
    pub fn top(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(&String, &usize)> = self.counts.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(tag, _)| tag.clone())
            .collect()
    }
}
