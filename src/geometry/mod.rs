//! Pure cover-fit geometry: one engine, consumed by every renderer target.

/// Cover-fit media frame computation.
pub mod engine;
/// Offset/focal percentage conversion.
pub mod focal;
