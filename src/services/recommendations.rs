use std::collections::HashSet;
use std::sync::Arc;

use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{Game, GameId, GenreTally, User},
    services::store::GameStore,
};

/// Tuning knobs for the genre heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationParams {
    /// How many of the most frequent genres count as preferred
    pub top_genres: usize,
    /// Cap on the number of recommended games
    pub max_results: usize,
}

impl RecommendationParams {
    pub const DEFAULT_TOP_GENRES: usize = 3;
    pub const DEFAULT_MAX_RESULTS: usize = 10;
}

impl Default for RecommendationParams {
    fn default() -> Self {
        Self {
            top_genres: Self::DEFAULT_TOP_GENRES,
            max_results: Self::DEFAULT_MAX_RESULTS,
        }
    }
}

/// Outcome of the genre heuristic for one library
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Genre counts over the owned games
    pub tally: GenreTally,
    /// Most frequent genres, highest count first
    pub preferred_genres: Vec<String>,
    /// Recommended games in catalog scan order
    pub games: Vec<Game>,
}

/// Everything gathered for one user during a run
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationReport {
    pub user: User,
    pub params: RecommendationParams,
    pub owned_games: Vec<Game>,
    pub recommendation: Recommendation,
}

/// Whether any of the game's genre tags is among the preferred genres
pub fn shares_genre(game: &Game, preferred: &[String]) -> bool {
    game.genres().any(|tag| preferred.iter().any(|p| p == tag))
}

/// Computes genre-based recommendations from already-loaded games
///
/// Tallies the genre tags of `owned`, keeps the `top_genres` most frequent
/// ones, then walks `catalog` in order and picks every game that shares at
/// least one preferred genre, stopping after `max_results` matches. Catalog
/// games whose id is in `owned_ids` are never picked. Matches are not ranked
/// against each other: the first ones found win.
pub fn recommend(
    owned: &[Game],
    catalog: &[Game],
    owned_ids: &HashSet<GameId>,
    params: RecommendationParams,
) -> Recommendation {
    let tally = GenreTally::from_games(owned);
    let preferred_genres = tally.top(params.top_genres);

    let games = catalog
        .iter()
        .filter(|game| !owned_ids.contains(&game.id))
        .filter(|game| shares_genre(game, &preferred_genres))
        .take(params.max_results)
        .cloned()
        .collect();

    Recommendation {
        tally,
        preferred_genres,
        games,
    }
}

/// Loads a user's library from the store and recommends games for it
///
/// Returns `AppError::NotFound` when the user does not exist; no game reads
/// are issued in that case. The catalog scan is skipped when the owned games
/// carry no genre tags, since nothing could match.
#[instrument(skip(store, params), fields(store = store.name()))]
pub async fn get_recommendations(
    store: Arc<dyn GameStore>,
    username: &str,
    params: RecommendationParams,
) -> AppResult<RecommendationReport> {
    let user = store
        .find_user_by_username(username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;

    tracing::info!(
        owned_count = user.owned_game_ids.len(),
        "Loaded user"
    );

    let owned_games = if user.owned_game_ids.is_empty() {
        Vec::new()
    } else {
        store.find_games_by_ids(&user.owned_game_ids).await?
    };

    let mut owned_ids: HashSet<GameId> = user.owned_game_ids.iter().cloned().collect();
    owned_ids.extend(owned_games.iter().map(|g| g.id.clone()));

    let has_genres = owned_games.iter().any(|g| g.genres().next().is_some());
    let catalog = if has_genres {
        store.find_games_excluding(&user.owned_game_ids).await?
    } else {
        tracing::info!("Owned games carry no genres, skipping catalog scan");
        Vec::new()
    };

    let recommendation = recommend(&owned_games, &catalog, &owned_ids, params);

    tracing::info!(
        preferred = ?recommendation.preferred_genres,
        recommended = recommendation.games.len(),
        "Recommendations computed"
    );

    Ok(RecommendationReport {
        user,
        params,
        owned_games,
        recommendation,
    })
}
