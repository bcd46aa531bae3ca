//! Owned (`'static`) aliases over `graphql_parser`'s executable-document AST.
//!
//! Every stage of the extraction pipeline passes these around by value, so
//! the borrowed-from-source lifetimes `graphql_parser` supports are erased
//! right at parse time.

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;

pub type AstPos = graphql_parser::Pos;
pub type ParseError = graphql_parser::query::ParseError;

pub fn parse(src: &str) -> Result<Document, ParseError> {
    Ok(graphql_parser::query::parse_query::<String>(src)?.into_static())
}

/// The name of an operation, or `None` for anonymous operations (including
/// the `{ ... }` shorthand form).
pub fn operation_name(op: &OperationDefinition) -> Option<&str> {
    use OperationDefinition as OpDef;
    match op {
        OpDef::Query(query) => query.name.as_deref(),
        OpDef::Mutation(mutation) => mutation.name.as_deref(),
        OpDef::Subscription(subscription) => subscription.name.as_deref(),
        OpDef::SelectionSet(_) => None,
    }
}

pub fn operation_selection_set(op: &OperationDefinition) -> &SelectionSet {
    use OperationDefinition as OpDef;
    match op {
        OpDef::Query(query) => &query.selection_set,
        OpDef::Mutation(mutation) => &mutation.selection_set,
        OpDef::Subscription(subscription) => &subscription.selection_set,
        OpDef::SelectionSet(sel_set) => sel_set,
    }
}

pub fn operation_selection_set_mut(op: &mut OperationDefinition) -> &mut SelectionSet {
    use OperationDefinition as OpDef;
    match op {
        OpDef::Query(query) => &mut query.selection_set,
        OpDef::Mutation(mutation) => &mut mutation.selection_set,
        OpDef::Subscription(subscription) => &mut subscription.selection_set,
        OpDef::SelectionSet(sel_set) => sel_set,
    }
}

/// Rewrites every anonymous `query { ... }` that carries no variables and no
/// directives into the `{ ... }` shorthand, so both spellings of the same
/// operation print identically.
pub fn collapse_query_shorthand(document: &mut Document) {
    for def in &mut document.definitions {
        if let Definition::Operation(op) = def
            && let OperationDefinition::Query(query) = op
            && query.name.is_none()
            && query.variable_definitions.is_empty()
            && query.directives.is_empty()
        {
            let empty = SelectionSet {
                span: query.selection_set.span,
                items: vec![],
            };
            let sel_set = std::mem::replace(&mut query.selection_set, empty);
            *op = OperationDefinition::SelectionSet(sel_set);
        }
    }
}
