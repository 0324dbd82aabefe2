//! Shared wire model for the word-tile game protocol.
//!
//! This crate owns the representation exchanged between the game server and
//! the browser client: grid coordinates and cell values, the tagged
//! `{type, payload}` message unions for the realtime socket, and the payloads
//! of the alternate REST + event-stream surface.
//!
//! Coordinates travel as `"x,y"` strings (they are JSON object keys on the
//! wire) but are decoded into [`Coord`] at the boundary so nothing downstream
//! parses strings.

mod grid;
mod message;
mod rest;

pub use grid::{BLANK, Cell, Coord, Grid, Modifier};
pub use message::{
    ClientMessage, Direction, GameCreated, GameJoined, GameRejoined, GameStarted, LetterPoints, PlayWord, Player,
    PlayerJoined, PlayerStatus, ServerMessage, WordPlayed, decode_server_message, encode_client_message,
};
pub use rest::{
    BoardCell, BoardResponse, GameSummary, JoinResponse, Operation, PatchGameRequest, StartResponse, StreamEvent,
};

/// Error returned when decoding wire data.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The text is not valid JSON, or does not match the envelope shape.
    #[error("failed to decode message: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload of a known message type does not match its schema.
    #[error("invalid payload for {kind}: {source}")]
    Payload {
        /// Message tag whose payload failed to decode.
        kind: String,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// A grid key is not of the form `"x,y"` with integer components.
    #[error("invalid coordinate key: {0:?}")]
    InvalidCoord(String),
    /// A cell value is neither empty, a single letter, nor a known modifier.
    #[error("invalid cell value: {0:?}")]
    InvalidCell(String),
}

/// Deserialize a collection where the sender may emit `null` for "none".
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
