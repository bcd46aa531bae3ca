//! Static extraction of GraphQL operations for persisted-query systems.
//!
//! The pipeline runs, in order:
//!
//! 1. [`extract::LiteralLocator`] pulls tagged template literals out of
//!    program source (only in [`SourceMode::Embedded`]).
//! 2. [`extract::aggregate`] concatenates the candidate text of every input
//!    file into one logical document, so fragment and operation names share
//!    a single namespace across the whole input tree.
//! 3. [`document::parse_document`] and [`document::split_operations`] turn
//!    that text into one sub-document per operation.
//! 4. A [`transform::TransformerPipeline`] rewrites each sub-document.
//! 5. [`resolve::FragmentResolver`] prunes each sub-document down to the
//!    operation plus its transitive fragment closure.
//! 6. [`CanonicalKey`] prints the result deterministically and
//!    [`IdentifierAssigner`] maps each distinct key to one [`Identifier`].
//!
//! [`QueryExtractor`] drives the whole thing.

pub mod ast;
mod canonical;
pub mod document;
pub mod extract;
mod extractor;
pub mod file_reader;
mod identifier;
pub mod resolve;
pub mod sink;
pub mod transform;

pub use canonical::CanonicalKey;
pub use extract::SourceMode;
pub use extractor::ConfigError;
pub use extractor::DEFAULT_EMBEDDED_EXTENSION;
pub use extractor::DEFAULT_EXTENSION;
pub use extractor::DEFAULT_LITERAL_TAG;
pub use extractor::DEFAULT_OUTPUT_PATH;
pub use extractor::ExtractConfig;
pub use extractor::ExtractError;
pub use extractor::QueryExtractor;
pub use extractor::ValidatedConfig;
pub use extractor::write_output_map;
pub use identifier::IdStrategy;
pub use identifier::Identifier;
pub use identifier::IdentifierAssigner;
pub use identifier::OutputMap;

#[cfg(test)]
mod tests;
