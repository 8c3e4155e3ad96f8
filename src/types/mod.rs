pub mod compression;
pub mod identifiers;

pub use compression::{CompressionError, DocumentCompression, RankedPath, RunReport, Selection};
pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion};
