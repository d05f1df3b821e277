use std::fmt;

use serde::Serialize;

/// Disc colors assigned to players in roster order. The palette length caps
/// the roster size, matching the four supported disc colors.
pub const DISC_COLORS: [&str; 4] = [
    "#F5473E", // red
    "#FEEC49", // yellow
    "#048B44", // green
    "#293777", // blue
];

/// Identifier for a player, unique within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant in the game: identity plus display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: &'static str,
}

impl Player {
    /// Build the roster from a list of display names, assigning ids and disc
    /// colors in order. The caller validates the roster size against the
    /// palette beforehand.
    pub fn roster(names: &[String]) -> Vec<Player> {
        names
            .iter()
            .zip(DISC_COLORS)
            .enumerate()
            .map(|(index, (name, color))| Player {
                id: PlayerId(index as u8),
                name: name.clone(),
                color,
            })
            .collect()
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &'static str {
        self.color
    }
}
