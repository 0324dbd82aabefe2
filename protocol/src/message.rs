//! Realtime socket messages: the `{type, payload}` envelope and its typed unions.
//!
//! Outbound messages serialize directly through serde's adjacent tagging.
//! Inbound messages are decoded in two steps (envelope, then payload by tag)
//! so an unknown tag degrades to [`ServerMessage::Unrecognized`] instead of
//! failing the whole decode.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::grid::Grid;
use crate::{ProtocolError, null_as_default};

/// Point value per letter, as configured by the server for one game.
pub type LetterPoints = BTreeMap<char, u32>;

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Axis along which a played word reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Request to play a word starting at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayWord {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    pub word: String,
}

/// Messages sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    CreateGame { player_name: String },
    #[serde(rename_all = "camelCase")]
    JoinGame { game_id: String, player_name: String },
    #[serde(rename_all = "camelCase")]
    RejoinGame { game_id: String, player_id: String },
    StartGame {},
    PlayWord(PlayWord),
}

impl ClientMessage {
    /// Wire tag of this message.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateGame { .. } => "create_game",
            Self::JoinGame { .. } => "join_game",
            Self::RejoinGame { .. } => "rejoin_game",
            Self::StartGame {} => "start_game",
            Self::PlayWord(_) => "play_word",
        }
    }
}

/// `create_game` response: the caller created a game and is its first player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreated {
    pub game_id: String,
    pub player_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub letter_points: LetterPoints,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid: Grid,
}

/// `join_game` response: the caller joined an existing game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameJoined {
    pub game_id: String,
    pub player_id: String,
    #[serde(default)]
    pub started: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub letter_points: LetterPoints,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid: Grid,
}

/// `rejoin_game` response: full snapshot for a returning player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRejoined {
    pub game_id: String,
    pub player_id: String,
    #[serde(default)]
    pub started: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub letter_points: LetterPoints,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rack: Vec<char>,
    #[serde(default)]
    pub turn: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid: Grid,
}

/// `start_game` broadcast: the game began and the caller received tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStarted {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rack: Vec<char>,
    #[serde(default)]
    pub grid: Option<Grid>,
    #[serde(default)]
    pub turn: Option<u32>,
    #[serde(default)]
    pub players: Option<Vec<Player>>,
}

/// `play_word` broadcast: a word landed on the board.
///
/// `rack` is only present in the copy sent to the player who played it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPlayed {
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid: Grid,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub rack: Option<Vec<char>>,
}

/// `new_player` broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerJoined {
    pub player_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// `player_online` broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatus {
    pub player_id: String,
    #[serde(default)]
    pub online: bool,
}

/// Messages received from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    CreateGame(GameCreated),
    JoinGame(GameJoined),
    RejoinGame(GameRejoined),
    StartGame(GameStarted),
    PlayWord(WordPlayed),
    NewPlayer(PlayerJoined),
    PlayerOnline(PlayerStatus),
    /// A well-formed envelope whose tag this client does not handle.
    Unrecognized(String),
}

impl ServerMessage {
    /// Wire tag of this message.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::CreateGame(_) => "create_game",
            Self::JoinGame(_) => "join_game",
            Self::RejoinGame(_) => "rejoin_game",
            Self::StartGame(_) => "start_game",
            Self::PlayWord(_) => "play_word",
            Self::NewPlayer(_) => "new_player",
            Self::PlayerOnline(_) => "player_online",
            Self::Unrecognized(kind) => kind,
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

/// Encode an outbound message as JSON text.
///
/// # Errors
///
/// Returns [`ProtocolError::Json`] if serialization fails.
pub fn encode_client_message(message: &ClientMessage) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(message)?)
}

/// Decode an inbound JSON text frame.
///
/// # Errors
///
/// Returns [`ProtocolError::Json`] when the text is not a `{type, payload}`
/// envelope and [`ProtocolError::Payload`] when a known tag carries a payload
/// of the wrong shape. Unknown tags are not errors.
pub fn decode_server_message(text: &str) -> Result<ServerMessage, ProtocolError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    let kind = envelope.kind;
    let payload = envelope.payload;
    let message = match kind.as_str() {
        "create_game" => ServerMessage::CreateGame(payload_as(&kind, payload)?),
        "join_game" => ServerMessage::JoinGame(payload_as(&kind, payload)?),
        "rejoin_game" => ServerMessage::RejoinGame(payload_as(&kind, payload)?),
        "start_game" => ServerMessage::StartGame(payload_as(&kind, normalize_empty(payload))?),
        "play_word" => ServerMessage::PlayWord(payload_as(&kind, payload)?),
        "new_player" => ServerMessage::NewPlayer(payload_as(&kind, payload)?),
        "player_online" => ServerMessage::PlayerOnline(payload_as(&kind, payload)?),
        _ => ServerMessage::Unrecognized(kind),
    };
    Ok(message)
}

fn payload_as<T: DeserializeOwned>(kind: &str, payload: Value) -> Result<T, ProtocolError> {
    serde_json::from_value(payload).map_err(|source| ProtocolError::Payload { kind: kind.to_owned(), source })
}

// A payload-less `start_game` is still a start.
fn normalize_empty(payload: Value) -> Value {
    if payload.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        payload
    }
}
