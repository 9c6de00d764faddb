//! Static percentage-based output for the playback runtime.

/// Element serialization to static markup.
pub mod serializer;
