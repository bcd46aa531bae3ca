use crate::ConfigError;
use crate::ast;
use crate::transform::AddTypename;
use crate::transform::DocumentTransformer;

/// An ordered list of [`DocumentTransformer`]s, applied left to right.
#[derive(Debug, Default)]
pub struct TransformerPipeline {
    transformers: Vec<Box<dyn DocumentTransformer>>,
}

impl TransformerPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pipeline from configured transformer names, preserving their
    /// order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let mut pipeline = Self::new();
        for name in names {
            let transformer: Box<dyn DocumentTransformer> = match name.as_ref() {
                AddTypename::NAME => Box::new(AddTypename),
                other => return Err(ConfigError::UnknownTransformer(other.to_string())),
            };
            pipeline.transformers.push(transformer);
        }
        Ok(pipeline)
    }

    pub fn push(&mut self, transformer: Box<dyn DocumentTransformer>) {
        self.transformers.push(transformer);
    }

    pub fn apply(&self, document: ast::Document) -> ast::Document {
        self.transformers.iter().fold(document, |doc, transformer| {
            log::trace!("Applying `{}` transformer.", transformer.name());
            transformer.transform(doc)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transformers.iter().map(|transformer| transformer.name())
    }
}
