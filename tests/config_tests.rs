use std::io::Write;

use matchday::bootstrap::build_game;
use matchday::config::Config;
use matchday::domain::PlayerId;
use matchday::error::{ConfigError, Error};
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

const LEAGUE: &str = r#"
[logging]
level = "debug"
format = "json"

[service]
poll_interval_secs = 30
fetch_timeout_ms = 800

[provider]
base_url = "https://fixtures.test/v1"
bookmakers = ["Pinnacle"]

[scoring]
exact_points = 3
outcome_points = 1
no_bet_points = -2
outsider_multiplier = 2.5

[game]
id = "office-2016"
competition = "FL1"
season = "2016"

[[game.players]]
id = "p1"
name = "Player1"
email = "p1@example.com"

[[game.players]]
id = "p2"
name = "Player2"
"#;

#[test]
fn loads_full_league_file() {
    let file = write_temp_config(LEAGUE);
    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.service.poll_interval().as_secs(), 30);
    assert_eq!(config.service.fetch_timeout().as_millis(), 800);
    assert_eq!(config.provider.bookmakers, vec!["Pinnacle"]);
    assert_eq!(config.scoring.no_bet_points, -2);
    assert_eq!(config.scoring.outsider_multiplier, dec!(2.5));
    assert_eq!(config.game.players.len(), 2);
}

#[test]
fn roster_builds_game() {
    let file = write_temp_config(LEAGUE);
    let config = Config::load(file.path()).expect("valid config");
    let game = build_game(&config);

    assert_eq!(game.id().as_str(), "office-2016");
    assert_eq!(game.players().count(), 2);
    let p1 = game.player(&PlayerId::new("p1")).expect("p1 on roster");
    assert_eq!(p1.email.as_deref(), Some("p1@example.com"));
    assert_eq!(game.record().players.len(), 2);
}

#[test]
fn missing_file_is_a_read_error() {
    let result = Config::load("/nonexistent/matchday/config.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn rejects_out_of_range_margin() {
    let file = write_temp_config("[scoring]\nfavorite_margin = 1.2\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "favorite_margin",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid margin error, got {err}"),
        Ok(_) => panic!("Expected invalid margin error, got Ok"),
    }
}

#[test]
fn rejects_empty_season() {
    let file = write_temp_config("[game]\nid = \"g\"\ncompetition = \"FL1\"\nseason = \"\"\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::MissingField {
            field: "game.season"
        }))
    ));
}

#[test]
fn rejects_outcome_above_exact() {
    let file = write_temp_config("[scoring]\nexact_points = 1\noutcome_points = 2\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "outcome_points",
            ..
        }))
    ));
}
