use crate::ast;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::collections::VecDeque;

/// Computes the fragment closure of operations within one document.
///
/// Fragment definitions are indexed by name when the resolver is built. If
/// several definitions share a name, the first in document order wins and
/// the rest are ignored.
#[derive(Debug)]
pub struct FragmentResolver<'doc> {
    fragments: IndexMap<&'doc str, &'doc ast::FragmentDefinition>,
}

impl<'doc> FragmentResolver<'doc> {
    pub fn new(document: &'doc ast::Document) -> Self {
        let mut fragments = IndexMap::new();
        for def in &document.definitions {
            let ast::Definition::Fragment(frag_def) = def else {
                continue;
            };
            let name = frag_def.name.as_str();
            if fragments.contains_key(name) {
                log::debug!(
                    "Ignoring duplicate definition of fragment `{name}`; the \
                    first definition wins.",
                );
                continue;
            }
            fragments.insert(name, frag_def);
        }
        Self { fragments }
    }

    pub fn fragment(&self, name: &str) -> Option<&'doc ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    /// Names of every fragment `op_def` transitively spreads, sorted.
    ///
    /// A name only enters the work queue the first time it is added to the
    /// result set, so every fragment is scanned at most once and spread
    /// cycles terminate. Names with no definition in the document stay in
    /// the result; they simply have nothing further to scan.
    pub fn required_fragments(
        &self,
        op_def: &ast::OperationDefinition,
    ) -> BTreeSet<String> {
        let mut required = BTreeSet::new();
        let mut unvisited = VecDeque::new();

        for name in collect_fragment_spreads(ast::operation_selection_set(op_def)) {
            if required.insert(name.clone()) {
                unvisited.push_back(name);
            }
        }

        while let Some(name) = unvisited.pop_front() {
            let Some(frag_def) = self.fragment(name.as_str()) else {
                log::debug!("Spread of undefined fragment `{name}` omitted.");
                continue;
            };
            for spread_name in collect_fragment_spreads(&frag_def.selection_set) {
                if required.insert(spread_name.clone()) {
                    unvisited.push_back(spread_name);
                }
            }
        }

        required
    }

    /// Builds the minimal document for `op_def`: the operation followed by
    /// the definitions of its fragment closure, sorted by name.
    ///
    /// Spreads of fragments that have no definition are silently left out,
    /// so the resulting document may be incomplete.
    pub fn resolve(&self, op_def: &ast::OperationDefinition) -> ast::Document {
        let required = self.required_fragments(op_def);
        let mut definitions = Vec::with_capacity(required.len() + 1);
        definitions.push(ast::Definition::Operation(op_def.clone()));
        definitions.extend(
            required.iter()
                .filter_map(|name| self.fragment(name.as_str()))
                .map(|frag_def| ast::Definition::Fragment(frag_def.clone())),
        );
        ast::Document { definitions }
    }
}

/// Names of every fragment spread anywhere within `sel_set`, including
/// inside nested fields and inline fragments. Does not follow the spreads.
pub fn collect_fragment_spreads(sel_set: &ast::SelectionSet) -> Vec<String> {
    let mut names = vec![];
    let mut pending = vec![sel_set];
    while let Some(sel_set) = pending.pop() {
        for selection in &sel_set.items {
            match selection {
                ast::Selection::Field(field) =>
                    pending.push(&field.selection_set),

                ast::Selection::InlineFragment(inline_frag) =>
                    pending.push(&inline_frag.selection_set),

                ast::Selection::FragmentSpread(spread) =>
                    names.push(spread.fragment_name.clone()),
            }
        }
    }
    names
}
