//! Error type shared by the controller, its settings and the hosts.

use thiserror::Error;

/// Everything that can go wrong while setting up a swipe stack.
///
/// Once a [`crate::SwipeController`] is initialized, none of its pointer
/// handlers fail; invalid input is reported through [`crate::SwipeResponse::NoDrag`].
#[derive(Debug, Error)]
pub enum SwipeError {
    /// The host has no container matching the configured selector.
    #[error("no container matches selector `{0}`")]
    ContainerNotFound(String),

    /// `drop_distance` was negative or not a number.
    #[error("drop distance must be a non-negative number, got {0}")]
    InvalidDropDistance(f32),

    /// Options could not be parsed from TOML.
    #[error("failed to parse swipe options: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias using [`SwipeError`].
pub type Result<T> = std::result::Result<T, SwipeError>;
