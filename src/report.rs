use std::fmt::{self, Display};

use crate::services::recommendations::RecommendationReport;

/// Message printed when the requested user does not exist
pub fn not_found(username: &str) -> String {
    format!("User '{}' not found", username)
}

fn join<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Display for RecommendationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user = &self.user;

        writeln!(f, "=== USER INFO ===")?;
        writeln!(f, "Username: {}", user.username)?;
        writeln!(f, "Email: {}", user.email.as_deref().unwrap_or("-"))?;
        writeln!(f, "OwnedGamesIds: [{}]", join(&user.owned_game_ids))?;
        writeln!(f, "Number of owned games: {}", user.owned_game_ids.len())?;

        if user.owned_game_ids.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "=== OWNED GAMES ({}) ===", self.owned_games.len())?;
        for game in &self.owned_games {
            writeln!(
                f,
                "  - ID: {} | Name: {} | Genre: {}",
                game.id,
                game.name,
                game.genre.as_deref().unwrap_or("-")
            )?;
        }

        let recommendation = &self.recommendation;

        writeln!(f)?;
        writeln!(f, "=== ANALYZING RECOMMENDATIONS ===")?;
        writeln!(
            f,
            "Individual genre breakdown: {{{}}}",
            join(
                recommendation
                    .tally
                    .iter()
                    .map(|(tag, count)| format!("{}: {}", tag, count))
            )
        )?;
        writeln!(
            f,
            "Top {} genres: [{}]",
            self.params.top_genres,
            join(&recommendation.preferred_genres)
        )?;

        writeln!(f)?;
        writeln!(f, "=== RECOMMENDED GAMES ({}) ===", recommendation.games.len())?;
        for game in &recommendation.games {
            writeln!(
                f,
                "  - Name: {} | Genre: {}",
                game.name,
                game.genre.as_deref().unwrap_or("-")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Game, GameId, GenreTally, User};
    use crate::services::recommendations::{Recommendation, RecommendationParams};

    fn report(owned: Vec<&str>) -> RecommendationReport {
        let owned_games: Vec<Game> = owned
            .iter()
            .map(|id| Game::new(GameId::Raw(id.to_string()), "Witcher 3", Some("RPG, Action")))
            .collect();
        let tally = GenreTally::from_games(&owned_games);
        let preferred_genres = tally.top(3);

        RecommendationReport {
            user: User {
                username: "gevoge".to_string(),
                email: Some("gevoge@example.com".to_string()),
                owned_game_ids: owned
                    .iter()
                    .map(|id| GameId::Raw(id.to_string()))
                    .collect(),
            },
            params: RecommendationParams::default(),
            recommendation: Recommendation {
                tally,
                preferred_genres,
                games: if owned.is_empty() {
                    vec![]
                } else {
                    vec![Game::new(
                        GameId::Raw("c1".to_string()),
                        "Baldur's Gate 3",
                        Some("Strategy, RPG"),
                    )]
                },
            },
            owned_games,
        }
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(not_found("gevoge"), "User 'gevoge' not found");
    }

    #[test]
    fn test_report_sections() {
        let text = report(vec!["g1"]).to_string();

        assert!(text.contains("=== USER INFO ==="));
        assert!(text.contains("Username: gevoge"));
        assert!(text.contains("OwnedGamesIds: [g1]"));
        assert!(text.contains("Number of owned games: 1"));
        assert!(text.contains("  - ID: g1 | Name: Witcher 3 | Genre: RPG, Action"));
        assert!(text.contains("Individual genre breakdown: {RPG: 1, Action: 1}"));
        // The header names the configured count, not how many genres exist.
        assert!(text.contains("Top 3 genres: [RPG, Action]"));
        assert!(text.contains("=== RECOMMENDED GAMES (1) ==="));
        assert!(text.contains("  - Name: Baldur's Gate 3 | Genre: Strategy, RPG"));
    }

    #[test]
    fn test_report_for_empty_library_stops_after_user_info() {
        let text = report(vec![]).to_string();

        assert!(text.contains("Number of owned games: 0"));
        assert!(!text.contains("OWNED GAMES"));
        assert!(!text.contains("RECOMMENDED GAMES"));
    }
}
