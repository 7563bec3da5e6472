use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    pub fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
        }
    }

    /// Avatar and flag color for this team.
    pub fn color(self) -> TeamColor {
        match self {
            Team::Red => TeamColor { r: 255, g: 0, b: 0 },
            Team::Blue => TeamColor { r: 0, g: 0, b: 255 },
        }
    }

    /// Darker shade used for the team's base.
    pub fn base_color(self) -> TeamColor {
        match self {
            Team::Red => TeamColor { r: 139, g: 0, b: 0 },
            Team::Blue => TeamColor { r: 0, g: 0, b: 139 },
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a team name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTeam(pub String);

impl fmt::Display for UnknownTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown team '{}' (expected 'red' or 'blue')", self.0)
    }
}

impl std::error::Error for UnknownTeam {}

impl std::str::FromStr for Team {
    type Err = UnknownTeam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Team::Red),
            "blue" => Ok(Team::Blue),
            _ => Err(UnknownTeam(s.to_string())),
        }
    }
}

/// RGB color handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
