mod fragment_resolver;

pub use fragment_resolver::FragmentResolver;
pub use fragment_resolver::collect_fragment_spreads;

#[cfg(test)]
mod tests;
