//! ID generator port for item and column identifiers.

/// Generates unique identifiers.
///
/// Tests substitute a predictable sequence so record ids can be asserted.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
