use crate::CanonicalKey;
use crate::IdStrategy;
use crate::IdentifierAssigner;
use crate::OutputMap;
use crate::ast;
use crate::document;
use crate::extract;
use crate::extract::SourceFile;
use crate::extract::SourceMode;
use crate::extract::SourceTree;
use crate::file_reader::ReadContentError;
use crate::resolve::FragmentResolver;
use crate::transform::TransformerPipeline;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExtractError>;

pub const DEFAULT_EMBEDDED_EXTENSION: &str = "js";
pub const DEFAULT_EXTENSION: &str = "graphql";
pub const DEFAULT_LITERAL_TAG: &str = "gql";
pub const DEFAULT_OUTPUT_PATH: &str = "extracted_queries.json";

/// Unvalidated extraction settings, as gathered from the command line or a
/// caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractConfig {
    pub extension: String,
    pub id_strategy: String,
    pub input_path: PathBuf,
    pub source_mode: SourceMode,
    pub transformers: Vec<String>,
}

impl ExtractConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            id_strategy: IdStrategy::default().to_string(),
            input_path: input_path.into(),
            source_mode: SourceMode::Document,
            transformers: vec![],
        }
    }

    /// Resolves every configured name up front so that a bad strategy or
    /// transformer name is rejected before any file is touched.
    pub fn validate(&self) -> std::result::Result<ValidatedConfig, ConfigError> {
        if let SourceMode::Embedded { tag } = &self.source_mode
            && tag.trim().is_empty() {
            return Err(ConfigError::EmptyLiteralTag);
        }

        Ok(ValidatedConfig {
            extension: self.extension.clone(),
            id_strategy: self.id_strategy.parse()?,
            input_path: self.input_path.clone(),
            pipeline: TransformerPipeline::from_names(&self.transformers)?,
            source_mode: self.source_mode.clone(),
        })
    }
}

#[derive(Debug)]
pub struct ValidatedConfig {
    pub extension: String,
    pub id_strategy: IdStrategy,
    pub input_path: PathBuf,
    pub pipeline: TransformerPipeline,
    pub source_mode: SourceMode,
}

/// Runs the whole extraction: load, aggregate, parse, split, transform,
/// resolve, canonicalize, assign.
///
/// Everything after file loading is synchronous and single-threaded; the
/// identifier cache is only ever touched once all I/O has finished.
#[derive(Debug)]
pub struct QueryExtractor {
    config: ValidatedConfig,
}

impl QueryExtractor {
    pub fn new(config: &ExtractConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self::from_validated(config.validate()?))
    }

    pub fn from_validated(config: ValidatedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Loads every matching file under the configured input path and
    /// extracts from the aggregate. Any I/O failure aborts the run.
    pub async fn extract(&self) -> Result<OutputMap> {
        let tree = SourceTree::load(
            &self.config.input_path,
            &self.config.extension,
        ).await?;
        self.extract_from_files(tree.files())
    }

    pub fn extract_from_files(&self, files: &[SourceFile]) -> Result<OutputMap> {
        let text = extract::aggregate(
            files,
            &self.config.extension,
            &self.config.source_mode,
        );
        self.extract_from_str(&text)
    }

    /// Extracts from already-aggregated document text.
    pub fn extract_from_str(&self, text: &str) -> Result<OutputMap> {
        let mut output = OutputMap::new();
        if !document::has_definitions(text) {
            log::warn!("No GraphQL text found; nothing to extract.");
            return Ok(output);
        }

        let document = document::parse_document(text)?;
        let mut assigner = IdentifierAssigner::new(self.config.id_strategy);
        let mut num_operations = 0;
        for op_doc in document::split_operations(&document) {
            let Some(key) = self.canonical_key(op_doc) else {
                continue;
            };
            num_operations += 1;
            assigner.assign(key, &mut output);
        }

        log::debug!(
            "Assigned {} `{}` ids to {num_operations} operations.",
            output.len(),
            self.config.id_strategy,
        );
        Ok(output)
    }

    /// Transforms a single-operation sub-document, prunes it to the
    /// operation's fragment closure and prints it.
    ///
    /// Returns `None` only if a transformer dropped the operation.
    pub fn canonical_key(&self, op_doc: ast::Document) -> Option<CanonicalKey> {
        let transformed = self.config.pipeline.apply(op_doc);
        let op_def = transformed.definitions.iter().find_map(|def| match def {
            ast::Definition::Operation(op_def) => Some(op_def),
            ast::Definition::Fragment(_) => None,
        });
        let Some(op_def) = op_def else {
            log::warn!("Transformed document no longer contains an operation; skipping it.");
            return None;
        };

        let resolved = FragmentResolver::new(&transformed).resolve(op_def);
        Some(CanonicalKey::from_document(&resolved))
    }
}

/// Writes `output` to `path` as a flat, pretty-printed JSON object.
pub async fn write_output_map(
    output: &OutputMap,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let json = output.to_json_pretty()?;
    tokio::fs::write(path, json).await
        .map_err(|err| ExtractError::OutputWrite {
            path: path.to_path_buf(),
            err,
        })?;
    log::debug!("Wrote {} entries to {path:?}.", output.len());
    Ok(())
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Embedded-source mode needs a non-empty literal tag (e.g. `gql`)")]
    EmptyLiteralTag,

    #[error(
        "Unknown identifier strategy `{0}`; expected one of: {strategies}",
        strategies = format_strategies(),
    )]
    UnknownIdStrategy(String),

    #[error("Unknown query transformer `{0}`")]
    UnknownTransformer(String),
}

fn format_strategies() -> String {
    IdStrategy::ALL.iter()
        .map(|strategy| strategy.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failure while traversing {path:?}: {err}")]
    DirectoryWalk {
        path: PathBuf,
        err: walkdir::Error,
    },

    #[error("Failure while reading a source file: {0}")]
    FileRead(#[from] ReadContentError),

    #[error("Failure while writing output to {path:?}: {err}")]
    OutputWrite {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failure while serializing the output map: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(
        "Error parsing the aggregated GraphQL document: {message}{}",
        format_context(.context),
    )]
    Syntax {
        message: String,
        context: Option<String>,
    },
}

fn format_context(context: &Option<String>) -> String {
    match context {
        Some(line) => format!("\n  --> {line}"),
        None => String::new(),
    }
}
