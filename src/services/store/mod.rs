/// Game store abstraction
///
/// The recommendation service only needs three reads from the document store:
/// a user lookup by username, a batch lookup of games by id and a catalog scan
/// that skips a set of ids. Ids are normalized to `GameId` before they cross
/// this boundary, so implementations never see raw BSON.
use crate::{
    error::AppResult,
    models::{Game, GameId, User},
};

pub mod memory;
pub mod mongo;

pub use memory::InMemoryGameStore;
pub use mongo::MongoGameStore;

/// Trait for game stores
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GameStore: Send + Sync {
    /// Point lookup of a user by username
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Fetch all games whose id is in `ids`
    ///
    /// Ids that match no stored game are ignored.
    async fn find_games_by_ids(&self, ids: &[GameId]) -> AppResult<Vec<Game>>;

    /// Scan the catalog in store order, skipping games whose id is in `ids`
    async fn find_games_excluding(&self, ids: &[GameId]) -> AppResult<Vec<Game>>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}
