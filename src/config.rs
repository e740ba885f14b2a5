use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::recommendations::RecommendationParams;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// MongoDB connection string
    #[serde(default = "default_mongodb_uri")]
    pub mongodb_uri: String,

    /// Database holding the users and games collections
    #[serde(default = "default_database_name")]
    pub database_name: String,

    #[serde(default = "default_users_collection")]
    pub users_collection: String,

    #[serde(default = "default_games_collection")]
    pub games_collection: String,

    /// User whose library drives the recommendations
    #[serde(default = "default_target_username")]
    pub target_username: String,

    /// Number of most frequent genres kept as preferred genres
    #[serde(default = "default_top_genres")]
    pub top_genres: usize,

    /// Upper bound on the number of recommended games
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database_name() -> String {
    "GameStoreDb".to_string()
}

fn default_users_collection() -> String {
    "Users".to_string()
}

fn default_games_collection() -> String {
    "Games".to_string()
}

fn default_target_username() -> String {
    "gevoge".to_string()
}

fn default_top_genres() -> usize {
    RecommendationParams::DEFAULT_TOP_GENRES
}

fn default_max_recommendations() -> usize {
    RecommendationParams::DEFAULT_MAX_RESULTS
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.top_genres == 0 {
            return Err(AppError::InvalidInput(
                "TOP_GENRES must be at least 1".to_string(),
            ));
        }
        if self.max_recommendations == 0 {
            return Err(AppError::InvalidInput(
                "MAX_RECOMMENDATIONS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn recommendation_params(&self) -> RecommendationParams {
        RecommendationParams {
            top_genres: self.top_genres,
            max_results: self.max_recommendations,
        }
    }
}
