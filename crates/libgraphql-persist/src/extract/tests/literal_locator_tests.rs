use crate::extract::LiteralLocator;
use proptest::prelude::*;

fn gql_literals(src: &str) -> Vec<String> {
    LiteralLocator::new("gql").literals(src).collect()
}

#[test]
fn interpolation_holes_are_deleted() {
    let literals = gql_literals("const q = gql`query { ${X} id }`;");
    assert_eq!(literals, vec!["query {  id }".to_string()]);
}

#[test]
fn finds_every_literal_in_source_order() {
    let src = r#"
        const A = gql`query A { a }`;
        const B = gql`
          query B { b }
        `;
    "#;
    let literals = gql_literals(src);
    assert_eq!(literals.len(), 2);
    assert_eq!(literals[0], "query A { a }");
    assert_eq!(literals[1].trim(), "query B { b }");
}

#[test]
fn tag_must_be_a_whole_identifier() {
    assert!(gql_literals("const q = notgql`query { a }`;").is_empty());
    assert!(gql_literals("const q = gql_`query { a }`;").is_empty());
    assert!(gql_literals("const q = gqlx`query { a }`;").is_empty());
}

#[test]
fn tag_may_be_a_member_expression_property() {
    let literals = gql_literals("const q = graphql.gql`{ a }`;");
    assert_eq!(literals, vec!["{ a }".to_string()]);
}

#[test]
fn whitespace_between_tag_and_backtick_is_allowed() {
    let literals = gql_literals("const q = gql  `{ a }`;");
    assert_eq!(literals, vec!["{ a }".to_string()]);
}

#[test]
fn untagged_and_differently_tagged_templates_are_ignored() {
    let src = "const s = `query { nope }`; const t = css`color: red;`;";
    assert!(gql_literals(src).is_empty());
}

#[test]
fn custom_tag() {
    let locator = LiteralLocator::new("graphql");
    let literals: Vec<_> = locator
        .literals("graphql`{ a }` gql`{ b }`")
        .collect();
    assert_eq!(literals, vec!["{ a }".to_string()]);
    assert_eq!(locator.tag(), "graphql");
}

#[test]
fn nested_templates_and_braces_inside_holes_are_skipped() {
    let src = "gql`query { a ${cond ? `x ${y} }` : '}'} b ${ {k: 1}.k } c }`";
    assert_eq!(gql_literals(src), vec!["query { a  b  c }".to_string()]);
}

#[test]
fn fragment_interpolations_at_the_end_are_removed() {
    let src = r#"
        const Q = gql`
          query Q { user { ...UserFields } }
          ${UserFields}
        `;
    "#;
    let literals = gql_literals(src);
    assert_eq!(literals.len(), 1);
    assert!(!literals[0].contains("${"));
    assert!(literals[0].contains("...UserFields"));
}

#[test]
fn escaped_delimiters_are_unescaped() {
    let literals = gql_literals(r"gql`a \` b \${c} d \\ e \n f`");
    assert_eq!(literals, vec![r"a ` b ${c} d \ e \n f".to_string()]);
}

#[test]
fn unterminated_literal_ends_the_sequence() {
    let src = "gql`{ a }` gql`{ b ";
    assert_eq!(gql_literals(src), vec!["{ a }".to_string()]);

    let locator = LiteralLocator::new("gql");
    let mut literals = locator.literals("gql`{ b ");
    assert_eq!(literals.next(), None);
    assert_eq!(literals.next(), None);
}

#[test]
fn tag_inside_a_consumed_literal_is_not_rematched() {
    let src = "gql`{ a } gql` gql`{ b }`";
    assert_eq!(
        gql_literals(src),
        vec!["{ a } gql".to_string(), "{ b }".to_string()],
    );
}

#[test]
fn multibyte_text_is_preserved() {
    let literals = gql_literals("gql`{ a(s: \"héllo ✓\") }`");
    assert_eq!(literals, vec!["{ a(s: \"héllo ✓\") }".to_string()]);
}

#[test]
fn literals_are_produced_lazily() {
    let src = "gql`{ a }` gql`{ b }` gql`{ c }`";
    let locator = LiteralLocator::new("gql");
    let mut literals = locator.literals(src);
    assert_eq!(literals.next().as_deref(), Some("{ a }"));
    assert_eq!(literals.next().as_deref(), Some("{ b }"));
}

proptest! {
    #[test]
    fn any_simple_hole_is_deleted(expr in "[a-zA-Z0-9_. ()]{0,24}") {
        let src = format!("gql`query {{ ${{{expr}}} id }}`");
        prop_assert_eq!(gql_literals(&src), vec!["query {  id }".to_string()]);
    }

    #[test]
    fn bodies_without_delimiters_are_returned_verbatim(body in "[a-zA-Z0-9_ {}():\n]{0,64}") {
        let src = format!("const q = gql`{body}`;");
        prop_assert_eq!(gql_literals(&src), vec![body]);
    }
}
