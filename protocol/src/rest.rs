//! Payloads of the REST + server-sent-event deployment.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::grid::{Cell, Coord, Grid, Modifier};
use crate::message::{LetterPoints, Player};
use crate::{ProtocolError, null_as_default};

/// `GET /api/v1/games/:id` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: String,
    #[serde(default)]
    pub started: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    /// Set when the request carried a session for a player of this game.
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub rack: Option<Vec<char>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub letter_points: LetterPoints,
}

/// One entry of a board listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCell {
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
}

impl BoardCell {
    #[must_use]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Cell value; a placed letter hides the modifier underneath it.
    #[must_use]
    pub fn cell(&self) -> Cell {
        match (self.letter, self.modifier) {
            (Some(letter), _) => Cell::Letter(letter),
            (None, Some(modifier)) => Cell::Modifier(modifier),
            (None, None) => Cell::Empty,
        }
    }
}

/// `GET /api/v1/games/:id/board` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cells: Vec<BoardCell>,
}

impl BoardResponse {
    /// Convert the listing into a sparse grid, dropping empty entries.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        self.cells
            .iter()
            .filter(|c| !c.cell().is_empty())
            .map(|c| (c.coord(), c.cell()))
            .collect()
    }
}

/// Operation carried by `PATCH /api/v1/games/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    JoinGame,
    StartGame,
}

impl Operation {
    /// Human-readable name used in error reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JoinGame => "JOIN_GAME",
            Self::StartGame => "START_GAME",
        }
    }
}

/// `PATCH /api/v1/games/:id` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchGameRequest {
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl PatchGameRequest {
    #[must_use]
    pub fn join(player_name: &str) -> Self {
        Self {
            operation: Operation::JoinGame,
            payload: Some(serde_json::json!({ "playerName": player_name })),
        }
    }

    #[must_use]
    pub fn start() -> Self {
        Self { operation: Operation::StartGame, payload: None }
    }
}

/// Response to a `JOIN_GAME` patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub player_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
}

/// Response to a `START_GAME` patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    #[serde(default)]
    pub started: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rack: Vec<char>,
}

/// A named server-sent event from `/api/v1/games/:id/events`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// `MESSAGE`: a chat line from a player.
    Message { player_id: String, message: String },
    /// `GAME_STARTED`
    GameStarted,
    /// Any other event name.
    Unrecognized(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageEventData {
    player_id: String,
    #[serde(default)]
    message: String,
}

impl StreamEvent {
    /// Event name as sent in the `event:` field.
    pub const MESSAGE: &'static str = "MESSAGE";
    pub const GAME_STARTED: &'static str = "GAME_STARTED";

    /// Decode an event from its name and `data` text.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Payload`] when a `MESSAGE` event carries
    /// malformed data.
    pub fn parse(name: &str, data: &str) -> Result<Self, ProtocolError> {
        match name {
            Self::MESSAGE => {
                let parsed: MessageEventData = serde_json::from_str(data)
                    .map_err(|source| ProtocolError::Payload { kind: name.to_owned(), source })?;
                Ok(Self::Message { player_id: parsed.player_id, message: parsed.message })
            }
            Self::GAME_STARTED => Ok(Self::GameStarted),
            other => Ok(Self::Unrecognized(other.to_owned())),
        }
    }
}
