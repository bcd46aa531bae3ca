use crate::ast;
use crate::resolve::FragmentResolver;
use crate::resolve::collect_fragment_spreads;
use std::collections::BTreeSet;

fn parse(src: &str) -> ast::Document {
    ast::parse(src).unwrap()
}

fn first_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    doc.definitions.iter()
        .find_map(|def| match def {
            ast::Definition::Operation(op_def) => Some(op_def),
            ast::Definition::Fragment(_) => None,
        })
        .expect("document has no operation")
}

fn names(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn fragment_names(doc: &ast::Document) -> Vec<&str> {
    doc.definitions.iter()
        .filter_map(|def| match def {
            ast::Definition::Fragment(frag_def) => Some(frag_def.name.as_str()),
            ast::Definition::Operation(_) => None,
        })
        .collect()
}

#[test]
fn spread_cycle_terminates_with_each_fragment_once() {
    let doc = parse(r#"
        query Q { ...F1 }
        fragment F1 on T { id ...F2 }
        fragment F2 on T { name ...F1 }
    "#);
    let resolver = FragmentResolver::new(&doc);
    let op_def = first_operation(&doc);

    assert_eq!(resolver.required_fragments(op_def), names(&["F1", "F2"]));

    let resolved = resolver.resolve(op_def);
    assert_eq!(resolved.definitions.len(), 3);
    assert_eq!(fragment_names(&resolved), vec!["F1", "F2"]);
}

#[test]
fn self_spreading_fragment_terminates() {
    let doc = parse("query Q { ...F } fragment F on T { id ...F }");
    let resolver = FragmentResolver::new(&doc);
    assert_eq!(
        resolver.required_fragments(first_operation(&doc)),
        names(&["F"]),
    );
}

#[test]
fn closure_follows_spreads_in_nested_fields_and_inline_fragments() {
    let doc = parse(r#"
        query Q {
          user {
            ... on Admin { ...AdminFields }
            friends { ...UserFields }
          }
        }
        fragment AdminFields on Admin { level ...Audit }
        fragment UserFields on User { id }
        fragment Audit on Admin { log { ... on Entry { ...EntryFields } } }
        fragment EntryFields on Entry { at }
        fragment Unrelated on User { email }
    "#);
    let resolver = FragmentResolver::new(&doc);
    assert_eq!(
        resolver.required_fragments(first_operation(&doc)),
        names(&["AdminFields", "Audit", "EntryFields", "UserFields"]),
    );
}

#[test]
fn resolved_document_is_operation_then_fragments_sorted_by_name() {
    let doc = parse(r#"
        fragment Zed on T { z }
        fragment Unused on T { u }
        query Q { ...Zed ...Alpha }
        fragment Alpha on T { a }
    "#);
    let resolver = FragmentResolver::new(&doc);
    let resolved = resolver.resolve(first_operation(&doc));

    assert!(matches!(resolved.definitions[0], ast::Definition::Operation(_)));
    assert_eq!(fragment_names(&resolved), vec!["Alpha", "Zed"]);
}

#[test]
fn undefined_fragment_is_silently_omitted() {
    let doc = parse("query Q { ...Known ...Missing } fragment Known on T { id }");
    let resolver = FragmentResolver::new(&doc);
    let op_def = first_operation(&doc);

    assert_eq!(
        resolver.required_fragments(op_def),
        names(&["Known", "Missing"]),
    );
    assert_eq!(fragment_names(&resolver.resolve(op_def)), vec!["Known"]);
}

#[test]
fn first_definition_of_a_duplicate_fragment_wins() {
    let doc = parse(r#"
        query Q { ...F }
        fragment F on T { first }
        fragment F on T { second }
    "#);
    let resolver = FragmentResolver::new(&doc);
    let resolved = resolver.resolve(first_operation(&doc));

    assert_eq!(fragment_names(&resolved), vec!["F"]);
    let frag_def = resolver.fragment("F").unwrap();
    let ast::Selection::Field(field) = &frag_def.selection_set.items[0] else {
        panic!("Expected a field");
    };
    assert_eq!(field.name, "first");
}

#[test]
fn operation_without_spreads_resolves_to_itself() {
    let doc = parse("query Q { a } fragment F on T { id }");
    let resolver = FragmentResolver::new(&doc);
    let resolved = resolver.resolve(first_operation(&doc));
    assert_eq!(resolved.definitions.len(), 1);
}

#[test]
fn collects_direct_spreads_only() {
    let doc = parse("query Q { a { ...A } ... on T { ...B } ...A } fragment A on T { ...C }");
    let sel_set = ast::operation_selection_set(first_operation(&doc));
    let collected: BTreeSet<String> = collect_fragment_spreads(sel_set).into_iter().collect();
    assert_eq!(collected, names(&["A", "B"]));
}
