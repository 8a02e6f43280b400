//! Snapshot hash over an artifact's tracked attributes.
//!
//! The hash covers kind, name, position, and size. It is an opaque string;
//! only equality between two hashes means anything.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::ports::Artifact;

/// Stored in place of a hash that could not be computed.
pub const HASH_ERROR: &str = "hash-error";

/// Why an artifact could not be fingerprinted.
#[derive(Debug, Error, PartialEq)]
pub enum HashError {
    /// Position or size is NaN or infinite.
    #[error("artifact {0} has non-finite geometry")]
    NonFiniteGeometry(String),
    /// The attribute record could not be serialized.
    #[error("failed to serialize artifact attributes: {0}")]
    Serialize(String),
}

#[derive(Serialize)]
struct Attributes<'a> {
    kind: &'a str,
    name: &'a str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Computes the snapshot hash of `artifact`.
///
/// # Errors
///
/// Returns [`HashError`] when the geometry is not finite.
pub fn snapshot_hash<A: Artifact + ?Sized>(artifact: &A) -> Result<String, HashError> {
    let g = artifact.geometry();
    if ![g.x, g.y, g.width, g.height].iter().all(|v| v.is_finite()) {
        return Err(HashError::NonFiniteGeometry(artifact.id().to_string()));
    }
    let attributes = Attributes {
        kind: artifact.kind().as_str(),
        name: artifact.name(),
        x: g.x,
        y: g.y,
        width: g.width,
        height: g.height,
    };
    let canonical = serde_json::to_string(&attributes)
        .map_err(|e| HashError::Serialize(e.to_string()))?;
    let digest = Sha256::digest(canonical.as_bytes());
    Ok(hex::encode(&digest[..8]))
}

/// Like [`snapshot_hash`], substituting [`HASH_ERROR`] on failure.
#[must_use]
pub fn snapshot_hash_or_sentinel<A: Artifact + ?Sized>(artifact: &A) -> String {
    snapshot_hash(artifact).unwrap_or_else(|e| {
        tracing::warn!(artifact = artifact.id(), error = %e, "hash computation failed");
        HASH_ERROR.to_string()
    })
}
