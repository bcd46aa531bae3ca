use crate::CanonicalKey;
use crate::IdStrategy;
use crate::Identifier;
use crate::OutputMap;
use md5::Md5;
use sha1::Sha1;
use sha2::Digest;
use sha2::Sha256;

/// Assigns each distinct [`CanonicalKey`] exactly one [`Identifier`].
///
/// The [`OutputMap`] passed to [`assign`](Self::assign) doubles as the
/// "seen" table: a key already present gets its existing id back and
/// nothing changes. An assigner and its map are meant to live for a single
/// extraction run.
#[derive(Debug)]
pub struct IdentifierAssigner {
    next_sequential_id: u64,
    strategy: IdStrategy,
}

impl IdentifierAssigner {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            next_sequential_id: 1,
            strategy,
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn assign(&mut self, key: CanonicalKey, output: &mut OutputMap) -> Identifier {
        if let Some(existing_id) = output.get(key.as_str()) {
            log::trace!("Canonical key already assigned id `{existing_id}`.");
            return existing_id.clone();
        }

        let id = self.fresh_id(&key);
        log::trace!("Assigned new id `{id}`.");
        output.insert(key, id.clone());
        id
    }

    fn fresh_id(&mut self, key: &CanonicalKey) -> Identifier {
        match self.strategy {
            IdStrategy::Md5 =>
                Identifier::Digest(hex::encode(Md5::digest(key.as_bytes()))),

            IdStrategy::Sha1 =>
                Identifier::Digest(hex::encode(Sha1::digest(key.as_bytes()))),

            IdStrategy::Sha256 =>
                Identifier::Digest(hex::encode(Sha256::digest(key.as_bytes()))),

            IdStrategy::Sequential => {
                let id = self.next_sequential_id;
                self.next_sequential_id += 1;
                Identifier::Sequential(id)
            },

            IdStrategy::Uuid => {
                let bytes: [u8; 16] = rand::random();
                Identifier::Uuid(uuid::Uuid::from_bytes(bytes).hyphenated().to_string())
            },
        }
    }
}
