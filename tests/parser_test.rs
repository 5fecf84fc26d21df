use bumpalo::Bump;
use indoc::indoc;
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use rylisp::{Value, evaluate, parse};

pub struct TestCase {
    pub name: &'static str,
    pub expr: &'static str,
    pub tree: &'static str,
    pub value: Value,
}

static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "flat",
            expr: "+ 1 2",
            tree: indoc! {"
                program
                  begin
                  operator: '+'
                  expr|number: '1'
                  expr|number: '2'
                  EOI
            "},
            value: Value::Number(3),
        },
        TestCase {
            name: "nested",
            expr: "* 2 (- 5 1)",
            tree: indoc! {"
                program
                  begin
                  operator: '*'
                  expr|number: '2'
                  expr
                    open: '('
                    operator: '-'
                    expr|number: '5'
                    expr|number: '1'
                    close: ')'
                  EOI
            "},
            value: Value::Number(8),
        },
        TestCase {
            name: "negative_operand",
            expr: "% -9 4",
            tree: indoc! {"
                program
                  begin
                  operator: '%'
                  expr|number: '-9'
                  expr|number: '4'
                  EOI
            "},
            value: Value::Number(-1),
        },
    ]
});

#[test]
fn test_trees_and_values() {
    for case in TEST_CASES.iter() {
        let arena = Bump::new();
        let tree = parse(&arena, case.expr)
            .unwrap_or_else(|e| panic!("{}: failed to parse {:?}: {}", case.name, case.expr, e));
        assert_eq!(tree.to_string(), case.tree, "tree for case {}", case.name);
        assert_eq!(evaluate(tree), case.value, "value for case {}", case.name);
    }
}

#[test]
fn test_same_tree_evaluates_identically() {
    for case in TEST_CASES.iter() {
        let arena = Bump::new();
        let tree = parse(&arena, case.expr).unwrap();
        assert_eq!(evaluate(tree), evaluate(tree), "case {}", case.name);
    }
}
