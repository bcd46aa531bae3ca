/// A persisted-query identifier.
///
/// Serializes as a JSON number for sequential ids and as a JSON string
/// otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum Identifier {
    Sequential(u64),
    Digest(String),
    Uuid(String),
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential(id) => write!(f, "{id}"),
            Self::Digest(id) | Self::Uuid(id) => f.write_str(id),
        }
    }
}
