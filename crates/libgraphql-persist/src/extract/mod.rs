mod aggregator;
mod literal_locator;
mod source_tree;

pub use aggregator::aggregate;
pub use aggregator::candidate_text;
pub use literal_locator::LiteralLocator;
pub use literal_locator::TaggedLiterals;
pub use source_tree::SourceFile;
pub use source_tree::SourceTree;

/// How the text of each input file is turned into GraphQL document text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SourceMode {
    /// Each file is a standalone GraphQL document.
    #[default]
    Document,

    /// Each file is program source; GraphQL lives in template literals
    /// tagged with `tag` (e.g. ``gql`query { ... }` ``).
    Embedded { tag: String },
}

#[cfg(test)]
mod tests;
