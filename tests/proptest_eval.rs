
use discount_rules::{parse, var, CompareOp, EvalError, Rule};
use proptest::prelude::*;
use rust_decimal::Decimal;
use strategies::{arb_condition, arb_context, arb_negated_leaf, arb_unknown_variable};

const VOCABULARY: &[&str] = &[
    "quantidade", "valor", " E ", " OU ", "NÃO ", "ENTAO", ">=", "<=", ">", "<", "=", "\"", "10",
    "true", " ", "(", ")",
];

fn rule_text(condition: &str, discount: u32) -> String {
    format!("{condition} ENTAO {discount}")
}

proptest! {
    /// Parsing arbitrary text returns a result instead of panicking.
    #[test]
    fn parse_never_panics(text in "\\PC*") {
        let _ = parse(&text);
    }

    /// Parsing arbitrary text built from the rule vocabulary never panics.
    #[test]
    fn parse_never_panics_on_rule_like_text(
        parts in prop::collection::vec(prop::sample::select(VOCABULARY), 0..20)
    ) {
        let _ = parse(&parts.concat());
    }

    /// Generated conditions parse to the expected tree and keep their text.
    #[test]
    fn parse_builds_expected_tree(cond in arb_condition(), discount in 0_u32..=100) {
        let text = rule_text(&cond.text, discount);
        let rule = parse(&text).unwrap();
        prop_assert_eq!(rule.condition(), &cond.expr);
        prop_assert_eq!(rule.discount(), Decimal::from(discount));
        prop_assert_eq!(rule.source_text(), text.as_str());
    }

    /// Well-typed conditions over known variables always evaluate.
    #[test]
    fn well_typed_rules_evaluate(cond in arb_condition(), ctx in arb_context()) {
        let rule = parse(&rule_text(&cond.text, 10)).unwrap();
        let result = rule.evaluate(&ctx);
        prop_assert!(result.is_ok(), "{} failed: {:?}", cond.text, result);
    }

    /// A rule and the same rule under NOT always disagree.
    #[test]
    fn negation_flips_result(leaf in arb_negated_leaf(), ctx in arb_context()) {
        let plain = parse(&rule_text(&leaf.text, 5)).unwrap();
        let negated = parse(&rule_text(&format!("NÃO {}", leaf.text), 5)).unwrap();
        let plain = plain.evaluate(&ctx).unwrap();
        let negated = negated.evaluate(&ctx).unwrap();
        prop_assert_ne!(plain.is_some(), negated.is_some());
    }

    /// NOT(NOT(x)) == x.
    #[test]
    fn double_negation(leaf in arb_negated_leaf(), ctx in arb_context()) {
        let single = Rule::new(leaf.expr.clone(), Decimal::ONE, "single");
        let double = Rule::new(!!leaf.expr, Decimal::ONE, "double");
        prop_assert_eq!(single.evaluate(&ctx), double.evaluate(&ctx));
    }

    /// Quantity comparisons agree with integer comparison.
    #[test]
    fn quantity_comparison_matches_integers(n in -5_i64..=40, ctx in arb_context()) {
        let cases = [
            (CompareOp::Gt, ctx.quantity() > n),
            (CompareOp::Lt, ctx.quantity() < n),
            (CompareOp::Eq, ctx.quantity() == n),
            (CompareOp::Gte, ctx.quantity() >= n),
            (CompareOp::Lte, ctx.quantity() <= n),
        ];
        for (op, expected) in cases {
            let rule = parse(&format!("quantidade {op} {n} ENTAO 1")).unwrap();
            prop_assert_eq!(
                rule.evaluate(&ctx).unwrap().is_some(),
                expected,
                "op {}",
                op
            );
        }
    }

    /// The right operand of a decided `E`/`OU` is never evaluated.
    #[test]
    fn connectives_short_circuit(name in arb_unknown_variable(), ctx in arb_context()) {
        let and_rule = parse(&rule_text(&format!("false E {name}"), 5)).unwrap();
        prop_assert_eq!(and_rule.evaluate(&ctx), Ok(None));

        let or_rule = parse(&rule_text(&format!("true OU {name}"), 5)).unwrap();
        prop_assert_eq!(or_rule.evaluate(&ctx), Ok(Some(Decimal::from(5))));

        let undecided = parse(&rule_text(&format!("true E {name}"), 5)).unwrap();
        prop_assert_eq!(
            undecided.evaluate(&ctx),
            Err(EvalError::UnknownVariable(name))
        );
    }

    /// Unknown variables are errors, never defaults.
    #[test]
    fn unknown_variables_fail(name in arb_unknown_variable(), ctx in arb_context()) {
        let rule = Rule::new(var(&name).gt(1_i64), Decimal::ONE, "unknown");
        prop_assert_eq!(rule.evaluate(&ctx), Err(EvalError::UnknownVariable(name)));
    }
}
