//! Shared model type aliases.

/// Opaque product identifier, exactly as supplied by the caller.
///
/// Ids are never parsed or normalized; distinct strings are distinct
/// products even when they only differ in case.
pub type ProductId = String;
