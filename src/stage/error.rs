//! Error type shared by the stage modules.

use thiserror::Error;

use super::actor::ActorId;

/// Errors raised by actors, worlds and their configuration.
#[derive(Debug, Error)]
pub enum StageError {
    /// A strict accessor was used on an actor that is not a member of the
    /// world it was handed.
    #[error("actor #{0} is not in the active world")]
    NotInWorld(ActorId),

    /// Reading or writing a configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be (de)serialized.
    #[error("invalid parameters: {0}")]
    Json(#[from] serde_json::Error),

    /// The renderer could not load a texture.
    #[error("failed to load texture {path}: {reason}")]
    Texture {
        /// Path that was requested.
        path: String,
        /// Message reported by the loader.
        reason: String,
    },
}
