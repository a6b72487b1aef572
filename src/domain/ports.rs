use crate::error::{DecodeError, Result};

/// Caller-assigned identifier shared by every stored record type.
pub type EntityId = u32;

/// Capability required to live in an `EntityRepository`.
pub trait Entity {
    fn id(&self) -> EntityId;
}

/// Entities whose mutable state includes a non-negative stock count.
pub trait QuantityBearing {
    fn quantity(&self) -> u32;
    fn set_quantity(&mut self, quantity: u32);
}

/// Turns entities into single text lines and back.
///
/// Implementations must round-trip every field exactly.
pub trait RecordCodec<T> {
    fn encode(&self, entity: &T) -> Result<String>;
    fn decode(&self, line: &str) -> std::result::Result<T, DecodeError>;
}

/// Destination for formatted report lines.
pub trait ReportSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;
}
