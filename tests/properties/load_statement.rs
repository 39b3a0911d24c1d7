//! Property tests for load-statement synthesis.

use proptest::prelude::*;

use mason::config::DEFAULT_KINDS;
use mason::{CallExpr, Expr, LoadStatementBuilder, LoadTable};

/// Mix of recognized and unrecognized kinds.
fn kind() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "repo_prefix",
        "library",
        "binary",
        "test",
        "foreign_library",
        "genrule",
        "filegroup",
        "alias",
    ])
    .prop_map(str::to_string)
}

fn statements(kinds: &[String]) -> Vec<Expr> {
    kinds
        .iter()
        .map(|kind| Expr::Call(CallExpr::new(kind.clone()).kwarg("name", Expr::string("x"))))
        .collect()
}

/// The kinds a load statement names, in listed order.
fn loaded_kinds(load: &Expr) -> Vec<String> {
    match load {
        Expr::Call(call) => call.args[1..]
            .iter()
            .map(|arg| match arg {
                Expr::String(s) => s.clone(),
                other => panic!("load argument is not a string: {}", other),
            })
            .collect(),
        other => panic!("load statement is not a call: {}", other),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The load statement names exactly the recognized subset of
    /// kinds present, each once, sorted lexicographically.
    #[test]
    fn property_load_names_recognized_subset_sorted(
        kinds in proptest::collection::vec(kind(), 0..16),
    ) {
        let table = LoadTable::default();
        let loads = LoadStatementBuilder::new(&table).build(&statements(&kinds));

        let mut expected: Vec<String> = kinds
            .iter()
            .filter(|kind| DEFAULT_KINDS.contains(&kind.as_str()))
            .cloned()
            .collect();
        expected.sort_unstable();
        expected.dedup();

        if expected.is_empty() {
            prop_assert!(loads.is_empty());
        } else {
            prop_assert_eq!(loads.len(), 1);
            prop_assert_eq!(loaded_kinds(&loads[0]), expected);
        }
    }

    /// PROPERTY: The result depends only on the set of kinds present,
    /// never on rule order or multiplicity.
    #[test]
    fn property_load_ignores_order_and_multiplicity(
        kinds in proptest::collection::vec(kind(), 1..12),
    ) {
        let table = LoadTable::default();
        let builder = LoadStatementBuilder::new(&table);

        let baseline = builder.build(&statements(&kinds));

        let mut reversed = kinds.clone();
        reversed.reverse();
        prop_assert_eq!(&builder.build(&statements(&reversed)), &baseline);

        let mut doubled = kinds.clone();
        doubled.extend(kinds.iter().cloned());
        prop_assert_eq!(&builder.build(&statements(&doubled)), &baseline);
    }

    /// PROPERTY: With no recognized kinds, no load statement is emitted.
    #[test]
    fn property_unrecognized_kinds_emit_nothing(
        kinds in proptest::collection::vec(
            prop::sample::select(vec!["genrule", "filegroup", "alias"])
                .prop_map(str::to_string),
            0..12,
        ),
    ) {
        let table = LoadTable::default();
        let loads = LoadStatementBuilder::new(&table).build(&statements(&kinds));
        prop_assert!(loads.is_empty());
    }
}
