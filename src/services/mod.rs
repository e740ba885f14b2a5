pub mod recommendations;
pub mod store;

pub use recommendations::{get_recommendations, recommend, RecommendationParams};
pub use store::GameStore;
