//! Encoder trait: renders entries for one encoding

use super::{error::Result, field::Field, log_entry::LogEntry};

/// A stateful renderer for one encoding.
///
/// Besides rendering, an encoder accumulates the context fields of the logger
/// scope it belongs to. An instance serves exactly one logger context and is
/// never shared between cores; deriving a scope goes through
/// [`Encoder::clone_encoder`].
pub trait Encoder: Send + Sync {
    /// Deep copy, including every field added so far.
    ///
    /// The copy and the original are independent afterwards: adding fields
    /// to one never shows up in the other.
    fn clone_encoder(&self) -> Box<dyn Encoder>;

    /// Fold context fields into this encoder, in order
    fn add_fields(&mut self, fields: &[Field]);

    /// Render one entry plus call-site fields, newline terminated.
    ///
    /// Call-site fields are not retained.
    fn encode_entry(&self, entry: &LogEntry, fields: &[Field]) -> Result<Vec<u8>>;
}

impl Clone for Box<dyn Encoder> {
    fn clone(&self) -> Self {
        self.clone_encoder()
    }
}
