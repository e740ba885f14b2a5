use mongodb::bson::{oid::ObjectId, Bson};
use std::fmt::Display;

use crate::error::{AppError, AppResult};

pub mod game;
pub mod genre;
pub mod user;

pub use game::{Game, GameDocument};
pub use genre::{split_genres, GenreTally};
pub use user::{User, UserDocument};

/// Identifier for a game, either a native ObjectId or a raw external string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameId {
    /// Native MongoDB ObjectId (e.g., "65f1c2a9e4b0a1b2c3d4e5f6")
    ObjectId(ObjectId),
    /// Any other string identifier, kept verbatim
    Raw(String),
}

impl GameId {
    /// Normalizes a string id: 24 hex characters become an ObjectId,
    /// everything else stays raw.
    pub fn from_raw(raw: &str) -> Self {
        if raw.len() == 24 {
            if let Ok(oid) = ObjectId::parse_str(raw) {
                return GameId::ObjectId(oid);
            }
        }
        GameId::Raw(raw.to_string())
    }

    /// Converts a stored BSON value into a game id
    pub fn from_bson(value: &Bson) -> AppResult<Self> {
        match value {
            Bson::ObjectId(oid) => Ok(GameId::ObjectId(*oid)),
            Bson::String(s) => Ok(GameId::from_raw(s)),
            other => Err(AppError::MalformedData(format!(
                "unsupported game id type: {:?}",
                other.element_type()
            ))),
        }
    }

    pub fn to_bson(&self) -> Bson {
        match self {
            GameId::ObjectId(oid) => Bson::ObjectId(*oid),
            GameId::Raw(s) => Bson::String(s.clone()),
        }
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameId::ObjectId(oid) => write!(f, "{}", oid.to_hex()),
            GameId::Raw(id) => write!(f, "{}", id),
        }
    }
}
