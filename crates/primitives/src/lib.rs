//! Types shared between the annotation registry and the rich-text engine
//! that hosts it: ranges, read-only node access and native event payloads.

/// Read-only content node access.
pub mod node;
/// Annotation ranges.
pub mod range;

pub use node::{ContentNode, NativeEvent};
pub use range::{CharIdx, TextRange};
