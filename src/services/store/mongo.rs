/// MongoDB game store
///
/// Reads the `Users` and `Games` collections of the game-store database.
/// Owned ids may be stored as ObjectIds or as their hex strings; both are
/// normalized to `GameId` when documents are read and written back as the
/// matching BSON type in `$in` / `$nin` filters.
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    Collection, Database,
};
use tracing::instrument;

use crate::{
    error::AppResult,
    models::{Game, GameDocument, GameId, User, UserDocument},
    services::store::GameStore,
};

#[derive(Clone)]
pub struct MongoGameStore {
    users: Collection<UserDocument>,
    games: Collection<GameDocument>,
}

impl MongoGameStore {
    pub fn new(database: &Database, users_collection: &str, games_collection: &str) -> Self {
        Self {
            users: database.collection(users_collection),
            games: database.collection(games_collection),
        }
    }

    async fn collect_games(&self, filter: Document) -> AppResult<Vec<Game>> {
        let cursor = self.games.find(filter).await?;
        let documents: Vec<GameDocument> = cursor.try_collect().await?;
        documents.into_iter().map(Game::try_from).collect()
    }
}

/// Builds the BSON array used by `$in` and `$nin` filters
fn id_array(ids: &[GameId]) -> Vec<Bson> {
    ids.iter().map(GameId::to_bson).collect()
}

#[async_trait::async_trait]
impl GameStore for MongoGameStore {
    #[instrument(skip(self))]
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let document = self.users.find_one(doc! { "Username": username }).await?;
        document.map(User::try_from).transpose()
    }

    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    async fn find_games_by_ids(&self, ids: &[GameId]) -> AppResult<Vec<Game>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let games = self
            .collect_games(doc! { "_id": { "$in": id_array(ids) } })
            .await?;

        tracing::debug!(found = games.len(), "Fetched owned games");
        Ok(games)
    }

    #[instrument(skip(self, ids), fields(excluded = ids.len()))]
    async fn find_games_excluding(&self, ids: &[GameId]) -> AppResult<Vec<Game>> {
        let games = self
            .collect_games(doc! { "_id": { "$nin": id_array(ids) } })
            .await?;

        tracing::debug!(scanned = games.len(), "Scanned catalog");
        Ok(games)
    }

    fn name(&self) -> &'static str {
        "mongodb"
    }
}
