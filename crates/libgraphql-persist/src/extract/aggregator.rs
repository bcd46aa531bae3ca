use crate::extract::LiteralLocator;
use crate::extract::SourceFile;
use crate::extract::SourceMode;

/// The GraphQL text one file contributes to the aggregated document.
///
/// A file whose extension does not match `extension` contributes nothing.
pub fn candidate_text(
    file: &SourceFile,
    extension: &str,
    mode: &SourceMode,
) -> String {
    if !file.has_extension(extension) {
        return String::new();
    }

    match mode {
        SourceMode::Document => file.contents.clone(),
        SourceMode::Embedded { tag } => {
            let locator = LiteralLocator::new(tag.as_str());
            locator.literals(&file.contents).collect::<Vec<_>>().join("\n")
        },
    }
}

/// Concatenates the candidate text of every file, in order, into the one
/// logical document that the rest of the pipeline parses.
///
/// Because everything ends up in a single document, fragment and operation
/// names share one namespace across all files: a fragment defined in one
/// file can be spread from an operation in another.
pub fn aggregate(
    files: &[SourceFile],
    extension: &str,
    mode: &SourceMode,
) -> String {
    let mut aggregated = String::new();
    for file in files {
        let text = candidate_text(file, extension, mode);
        if text.is_empty() {
            continue;
        }
        log::trace!("{:?} contributed {} bytes.", file.path, text.len());
        if !aggregated.is_empty() {
            aggregated.push('\n');
        }
        aggregated.push_str(&text);
    }
    log::debug!(
        "Aggregated {} bytes of GraphQL from {} files.",
        aggregated.len(),
        files.len(),
    );
    aggregated
}
