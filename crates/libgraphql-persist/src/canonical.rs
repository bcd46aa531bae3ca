use crate::ast;
use std::borrow::Borrow;

/// The deduplication identity of an operation: the printed text of the
/// operation followed by its name-sorted fragment closure.
///
/// Printing goes through `graphql_parser`'s formatter, so the key depends
/// only on AST shape, never on the source's whitespace, comments or
/// fragment declaration order. Hash-based identifier strategies digest the
/// UTF-8 bytes of this text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Prints `document` with bare anonymous queries collapsed to the
    /// `{ ... }` shorthand. Callers are expected to pass the output of
    /// [`FragmentResolver::resolve`](crate::resolve::FragmentResolver::resolve),
    /// whose definition order is already canonical.
    pub fn from_document(document: &ast::Document) -> Self {
        let mut document = document.clone();
        ast::collapse_query_shorthand(&mut document);
        Self(document.to_string())
    }

    #[cfg(test)]
    pub(crate) fn from_raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CanonicalKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
