//! Game configuration: which season is played and by whom.

use serde::Deserialize;

use crate::domain::{GameId, Player, PlayerId};

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub id: String,
    pub competition: String,
    pub season: String,
    #[serde(default)]
    pub players: Vec<PlayerConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl GameConfig {
    #[must_use]
    pub fn game_id(&self) -> GameId {
        GameId::new(self.id.clone())
    }

    #[must_use]
    pub fn roster(&self) -> Vec<Player> {
        self.players
            .iter()
            .map(|p| Player {
                id: PlayerId::new(p.id.clone()),
                name: p.name.clone(),
                email: p.email.clone(),
                avatar_url: None,
            })
            .collect()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            id: "default".into(),
            competition: "FL1".into(),
            season: "2016".into(),
            players: Vec::new(),
        }
    }
}
