//! Pattern Library: static category tables and their compiled form.

pub mod categories;
pub mod library;
pub mod signatures;

pub use categories::{AlgorithmCategory, CodingPattern, DataStructureKind};
pub use library::{PatternLibrary, SignatureSet};
