use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use game_recs::{
    config::Config,
    db, report,
    services::{get_recommendations, store::MongoGameStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let client = db::create_client(&config.mongodb_uri).await?;
    let database = client.database(&config.database_name);
    let store = Arc::new(MongoGameStore::new(
        &database,
        &config.users_collection,
        &config.games_collection,
    ));

    let result = get_recommendations(
        store,
        &config.target_username,
        config.recommendation_params(),
    )
    .await;

    client.shutdown().await;

    match result {
        Ok(summary) => print!("{}", summary),
        Err(e) if e.is_not_found() => println!("{}", report::not_found(&config.target_username)),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
