use mongodb::bson::Bson;
use serde::Deserialize;

use super::{split_genres, GameId};
use crate::error::{AppError, AppResult};

/// A game from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    /// Free-form comma-separated genre tags, as stored
    pub genre: Option<String>,
}

impl Game {
    pub fn new(id: GameId, name: impl Into<String>, genre: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            genre: genre.map(str::to_string),
        }
    }

    /// Trimmed, non-empty genre tags of this game
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre.as_deref().into_iter().flat_map(split_genres)
    }
}

// ============================================================================
// Stored document shape
// ============================================================================

/// Raw document from the games collection
#[derive(Debug, Clone, Deserialize)]
pub struct GameDocument {
    #[serde(rename = "_id")]
    pub id: Bson,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
}

impl TryFrom<GameDocument> for Game {
    type Error = AppError;

    fn try_from(doc: GameDocument) -> AppResult<Self> {
        Ok(Game {
            id: GameId::from_bson(&doc.id)?,
            name: doc.name.unwrap_or_default(),
            genre: doc.genre,
        })
    }
}
