use crate::Cli;
use crate::CommandResult;
use crate::command::RunnableCommand;
use libgraphql_persist::DEFAULT_EMBEDDED_EXTENSION;
use libgraphql_persist::DEFAULT_LITERAL_TAG;
use libgraphql_persist::DEFAULT_OUTPUT_PATH;
use libgraphql_persist::ExtractConfig;
use libgraphql_persist::QueryExtractor;
use libgraphql_persist::SourceMode;
use libgraphql_persist::sink;
use libgraphql_persist::transform::AddTypename;
use libgraphql_persist::write_output_map;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExtractCmd {
    #[arg(
        help="Add a `__typename` selection to every nested selection set \
             (shorthand for `--transformers add_typename`).",
        long,
    )]
    pub(crate) add_typename: bool,

    #[arg(
        help="Only files with this extension are read. Defaults to \
             `graphql`, or to `js` when --js is given.",
        long,
    )]
    pub(crate) extension: Option<String>,

    #[arg(
        default_value="sequential",
        help="How ids are assigned: md5, sha1, sha256, sequential or uuid.",
        long,
    )]
    pub(crate) id_strategy: String,

    #[arg(
        help="Treat input files as program source and extract GraphQL from \
             tagged template literals instead of reading whole files.",
        long,
    )]
    pub(crate) js: bool,

    #[arg(
        default_value=DEFAULT_LITERAL_TAG,
        help="Template literal tag to look for with --js.",
        long,
    )]
    pub(crate) literal_tag: String,

    #[arg(
        default_value=sink::DEFAULT_NAMESPACE,
        help="Prefix prepended to every id written with --push-dir.",
        long,
    )]
    pub(crate) namespace: String,

    #[arg(
        help="Also write the inverted map (one file per id, holding the \
             query text) into this directory.",
        long,
    )]
    pub(crate) push_dir: Option<PathBuf>,

    #[arg(
        help="Ordered list of transformers to apply to every operation \
             before it is keyed.",
        long,
        value_delimiter=',',
    )]
    pub(crate) transformers: Vec<String>,

    #[arg(
        help="A GraphQL/program source file, or a directory to search \
             recursively.",
        name="INPUT_PATH",
        required=true,
    )]
    pub(crate) input_path: PathBuf,

    #[arg(
        default_value=DEFAULT_OUTPUT_PATH,
        help="Where to write the JSON map of query text to id.",
        name="OUTPUT_PATH",
    )]
    pub(crate) output_path: PathBuf,
}

impl ExtractCmd {
    pub(crate) fn extract_config(&self) -> ExtractConfig {
        let mut config = ExtractConfig::new(self.input_path.clone());
        config.id_strategy = self.id_strategy.clone();

        config.transformers = self.transformers.clone();
        if self.add_typename
            && !config.transformers.iter().any(|name| name == AddTypename::NAME) {
            config.transformers.push(AddTypename::NAME.to_string());
        }

        if self.js {
            config.extension = DEFAULT_EMBEDDED_EXTENSION.to_string();
            config.source_mode = SourceMode::Embedded {
                tag: self.literal_tag.clone(),
            };
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }

        config
    }
}

#[inherent::inherent]
impl RunnableCommand for ExtractCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        // Unknown strategies and transformers are rejected before any file
        // is read.
        let extractor = match QueryExtractor::new(&self.extract_config()) {
            Ok(extractor) => extractor,
            Err(e) => return CommandResult::failure(format_args!("{e}")),
        };

        log::debug!(
            "Extracting from {:?} (`.{}` files, `{}` ids)...",
            self.input_path,
            extractor.config().extension,
            extractor.config().id_strategy,
        );
        let output = match extractor.extract().await {
            Ok(output) => output,
            Err(e) => return CommandResult::failure(format_args!(
                "Extraction failed: {e}",
            )),
        };

        if let Err(e) = write_output_map(&output, &self.output_path).await {
            return CommandResult::failure(format_args!("{e}"));
        }

        let mut push_summary = String::new();
        if let Some(push_dir) = &self.push_dir {
            let store = sink::DirectoryStore::new(push_dir.clone());
            match sink::push_inverted(&output, &store, &self.namespace).await {
                Ok(num_written) => push_summary = format!(
                    "\n  * Pushed {num_written} entries to {push_dir:?}.",
                ),
                Err(e) => return CommandResult::failure(format_args!(
                    "Wrote {:?} but failed to push to {push_dir:?}: {e}",
                    self.output_path,
                )),
            }
        }

        CommandResult::success(format_args!(
            concat!(
                "Extracted {} distinct operations:\n",
                "  * Wrote {:?}.",
                "{}",
            ),
            output.len(),
            self.output_path,
            push_summary,
        ))
    }
}
