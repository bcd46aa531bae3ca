mod add_typename;
mod transformer_pipeline;

pub use add_typename::AddTypename;
pub use add_typename::TYPENAME_FIELD;
pub use transformer_pipeline::TransformerPipeline;

use crate::ast;

/// A pure, structural document-to-document rewrite applied to each
/// operation's sub-document before fragment resolution and keying.
///
/// Implementations must be idempotent and must never rename, reorder, add
/// or remove operation/fragment definitions: canonical keys and fragment
/// resolution both depend on definition names staying put.
pub trait DocumentTransformer: std::fmt::Debug {
    /// The name this transformer is selected by in configuration.
    fn name(&self) -> &str;

    fn transform(&self, document: ast::Document) -> ast::Document;
}
