mod id_strategy;
#[allow(clippy::module_inception)]
mod identifier;
mod identifier_assigner;
mod output_map;

pub use id_strategy::IdStrategy;
pub use identifier::Identifier;
pub use identifier_assigner::IdentifierAssigner;
pub use output_map::OutputMap;

#[cfg(test)]
mod tests;
