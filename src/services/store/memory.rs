use std::collections::HashSet;

use crate::{
    error::AppResult,
    models::{Game, GameId, User},
    services::store::GameStore,
};

/// Game store backed by plain vectors
///
/// Keeps insertion order, which stands in for the natural order of a
/// collection scan. Used for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameStore {
    users: Vec<User>,
    games: Vec<Game>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_game(mut self, game: Game) -> Self {
        self.games.push(game);
        self
    }

    pub fn with_games<I: IntoIterator<Item = Game>>(mut self, games: I) -> Self {
        self.games.extend(games);
        self
    }
}

#[async_trait::async_trait]
impl GameStore for InMemoryGameStore {
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_games_by_ids(&self, ids: &[GameId]) -> AppResult<Vec<Game>> {
        let wanted: HashSet<&GameId> = ids.iter().collect();
        Ok(self
            .games
            .iter()
            .filter(|g| wanted.contains(&g.id))
            .cloned()
            .collect())
    }

    async fn find_games_excluding(&self, ids: &[GameId]) -> AppResult<Vec<Game>> {
        let excluded: HashSet<&GameId> = ids.iter().collect();
        Ok(self
            .games
            .iter()
            .filter(|g| !excluded.contains(&g.id))
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
