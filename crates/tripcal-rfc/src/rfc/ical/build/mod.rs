//! iCalendar serialization (RFC 5545).
//!
//! - Escape: TEXT value validation and escaping
//! - Fold: Content line folding at 75 octets
//! - Serializer: Full document serialization with canonical property ordering

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_text, validate_text};
pub use fold::{MAX_LINE_OCTETS, fold_line};
pub use serializer::{serialize, serialize_component, serialize_property};
