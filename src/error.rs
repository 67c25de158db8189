//! Error type for SDK-delegated failures.
//!
//! This crate performs no validation, retry, or fallback of its own: a load
//! failure inside the SDK is wrapped with enough context to name the asset
//! and then propagated all the way out of the startup sequence.

use std::path::PathBuf;

use thiserror::Error;

use crate::sdk::ResourceKind;

#[derive(Debug, Error)]
pub enum SdkError {
    /// An asset file could not be loaded by the SDK.
    #[error("failed to load {kind} '{}': {message}", path.display())]
    Load {
        kind: ResourceKind,
        path: PathBuf,
        message: String,
    },
    /// A display surface operation failed.
    #[error("display error: {0}")]
    Display(String),
}

impl SdkError {
    /// Wrap an SDK load failure for the given asset.
    pub fn load(kind: ResourceKind, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SdkError::Load {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}
