use crate::ast;
use crate::transform::DocumentTransformer;

pub const TYPENAME_FIELD: &str = "__typename";

/// Adds a `__typename` selection to every selection set that lacks one, so
/// that normalizing client caches can always identify the concrete type of
/// every object in a response.
///
/// The root selection set of an operation is left alone: a root
/// `__typename` tells a cache nothing, and GraphQL forbids it on
/// subscriptions, which must select exactly one root field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddTypename;

impl AddTypename {
    pub const NAME: &'static str = "add_typename";
}

impl DocumentTransformer for AddTypename {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn transform(&self, mut document: ast::Document) -> ast::Document {
        use ast::Definition as Def;
        for def in &mut document.definitions {
            match def {
                Def::Operation(op_def) =>
                    add_to_nested_selection_sets(
                        ast::operation_selection_set_mut(op_def),
                    ),

                Def::Fragment(frag_def) =>
                    add_to_selection_set(&mut frag_def.selection_set),
            }
        }
        document
    }
}

fn add_to_selection_set(sel_set: &mut ast::SelectionSet) {
    add_to_nested_selection_sets(sel_set);

    // Matched by field name regardless of alias
    let has_typename = sel_set.items.iter().any(|selection| matches!(
        selection,
        ast::Selection::Field(field) if field.name == TYPENAME_FIELD,
    ));
    if !has_typename {
        let pos = sel_set.span.1;
        sel_set.items.push(ast::Selection::Field(typename_field(pos)));
    }
}

fn add_to_nested_selection_sets(sel_set: &mut ast::SelectionSet) {
    for selection in &mut sel_set.items {
        match selection {
            // Leaf fields have no selection set to add to
            ast::Selection::Field(field) =>
                if !field.selection_set.items.is_empty() {
                    add_to_selection_set(&mut field.selection_set);
                },

            ast::Selection::InlineFragment(inline_frag) =>
                add_to_selection_set(&mut inline_frag.selection_set),

            ast::Selection::FragmentSpread(_) => (),
        }
    }
}

fn typename_field(position: ast::AstPos) -> ast::Field {
    ast::Field {
        position,
        alias: None,
        name: TYPENAME_FIELD.to_string(),
        arguments: vec![],
        directives: vec![],
        selection_set: ast::SelectionSet {
            span: (position, position),
            items: vec![],
        },
    }
}
