use crate::ConfigError;
use std::str::FromStr;

/// How fresh identifiers are derived. Fixed for the duration of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdStrategy {
    /// Hex MD5 digest of the canonical key.
    Md5,
    /// Hex SHA-1 digest of the canonical key.
    Sha1,
    /// Hex SHA-256 digest of the canonical key.
    Sha256,
    /// 1, 2, 3, ... in the order distinct keys are first seen.
    #[default]
    Sequential,
    /// Random `8-4-4-4-12` hex ids, unrelated to the key. Different on every
    /// run, even over identical input.
    Uuid,
}

impl IdStrategy {
    pub const ALL: [Self; 5] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sequential,
        Self::Uuid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sequential => "sequential",
            Self::Uuid => "uuid",
        }
    }

    /// Whether two runs over the same input assign the same ids.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Self::Uuid)
    }
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownIdStrategy(s.to_string()))
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
