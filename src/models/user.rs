use mongodb::bson::Bson;
use serde::Deserialize;

use super::GameId;
use crate::error::{AppError, AppResult};

/// A store user and the games they own
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    /// Owned game ids in stored order
    pub owned_game_ids: Vec<GameId>,
}

/// Raw document from the users collection
#[derive(Debug, Clone, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "OwnedGamesIds", default)]
    pub owned_games_ids: Option<Vec<Bson>>,
}

impl TryFrom<UserDocument> for User {
    type Error = AppError;

    fn try_from(doc: UserDocument) -> AppResult<Self> {
        let owned_game_ids = doc
            .owned_games_ids
            .unwrap_or_default()
            .iter()
            .map(GameId::from_bson)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(User {
            username: doc.username,
            email: doc.email,
            owned_game_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, oid::ObjectId};

    #[test]
    fn test_owned_ids_are_normalized() {
        let oid = ObjectId::new();
        let document = doc! {
            "Username": "gevoge",
            "Email": "gevoge@example.com",
            "OwnedGamesIds": [oid.to_hex(), oid, "legacy-1"],
        };

        let raw: UserDocument = from_document(document).unwrap();
        let user = User::try_from(raw).unwrap();

        assert_eq!(user.username, "gevoge");
        assert_eq!(user.email.as_deref(), Some("gevoge@example.com"));
        assert_eq!(
            user.owned_game_ids,
            vec![
                GameId::ObjectId(oid),
                GameId::ObjectId(oid),
                GameId::Raw("legacy-1".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_owned_ids_means_empty_library() {
        let raw: UserDocument = from_document(doc! { "Username": "newbie" }).unwrap();
        let user = User::try_from(raw).unwrap();
        assert!(user.owned_game_ids.is_empty());
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_null_owned_ids_means_empty_library() {
        let raw: UserDocument =
            from_document(doc! { "Username": "newbie", "OwnedGamesIds": null }).unwrap();
        let user = User::try_from(raw).unwrap();
        assert!(user.owned_game_ids.is_empty());
    }

    #[test]
    fn test_malformed_owned_id_is_an_error() {
        let raw: UserDocument =
            from_document(doc! { "Username": "x", "OwnedGamesIds": [true] }).unwrap();
        assert!(User::try_from(raw).is_err());
    }
}
