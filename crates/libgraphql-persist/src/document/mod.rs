//! Parsing the aggregated text and splitting it per operation.

use crate::ExtractError;
use crate::ast;
use std::collections::HashSet;

/// Parses the aggregated text of every input file as one document.
///
/// A parse failure is terminal for the whole run: once the files have been
/// aggregated there is no way to isolate the file that broke.
pub fn parse_document(text: &str) -> Result<ast::Document, ExtractError> {
    ast::parse(text).map_err(|err| {
        let message = err.to_string();
        let context = error_line(&message)
            .and_then(|line_num| {
                text.lines()
                    .nth(line_num.saturating_sub(1))
                    .or_else(|| text.lines().last())
            })
            .map(|line| line.trim_end().to_string());
        ExtractError::Syntax { message, context }
    })
}

/// Whether `text` holds anything besides GraphQL's ignored tokens
/// (whitespace, commas, byte order marks and `#` comments).
pub fn has_definitions(text: &str) -> bool {
    text.lines().any(|line| {
        let code = line.split('#').next().unwrap_or_default();
        !code.trim_matches(|c: char| {
            c.is_whitespace() || c == ',' || c == '\u{feff}'
        }).is_empty()
    })
}

/// `graphql_parser` reports positions only inside its message text
/// (`... Parse error at LINE:COL ...`).
fn error_line(message: &str) -> Option<usize> {
    let (_, rest) = message.split_once("error at ")?;
    let (line, _) = rest.split_once(':')?;
    line.trim().parse().ok()
}

/// Splits a document into one sub-document per operation.
///
/// Each sub-document holds the operation followed by *every* fragment
/// definition of `document`, in document order; pruning to the fragments
/// an operation actually needs happens later, in
/// [`FragmentResolver`](crate::resolve::FragmentResolver).
///
/// Named operations are deduplicated by name and the first one wins. Every
/// anonymous operation is kept as its own entry.
pub fn split_operations(document: &ast::Document) -> Vec<ast::Document> {
    use ast::Definition as Def;

    let fragments: Vec<ast::Definition> =
        document.definitions.iter()
            .filter(|def| matches!(def, Def::Fragment(_)))
            .cloned()
            .collect();

    let mut seen_op_names = HashSet::new();
    let mut split_docs = vec![];
    for def in &document.definitions {
        let Def::Operation(op_def) = def else {
            continue;
        };

        if let Some(name) = ast::operation_name(op_def)
            && !seen_op_names.insert(name.to_string()) {
            log::debug!(
                "Dropping duplicate definition of operation `{name}`; the \
                first definition wins.",
            );
            continue;
        }

        let mut definitions = Vec::with_capacity(fragments.len() + 1);
        definitions.push(Def::Operation(op_def.clone()));
        definitions.extend(fragments.iter().cloned());
        split_docs.push(ast::Document { definitions });
    }

    log::debug!(
        "Split document into {} operations ({} fragment definitions).",
        split_docs.len(),
        fragments.len(),
    );
    split_docs
}
