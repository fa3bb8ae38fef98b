use std::sync::Arc;
use std::thread;

use discount_rules::{parse, Context, RuleBook};
use rust_decimal::Decimal;

#[test]
fn evaluate_rule_across_threads() {
    let rule = Arc::new(parse("quantidade > 10 E valor > 1000 ENTAO 15").unwrap());

    let contexts = [
        (Context::new(15, 1500, "Regular", false), Some(Decimal::from(15))),
        (Context::new(5, 1500, "Regular", false), None),
        (Context::new(15, 900, "VIP", true), None),
        (Context::new(11, 1001, "VIP", false), Some(Decimal::from(15))),
    ];

    let handles: Vec<_> = contexts
        .into_iter()
        .map(|(ctx, expected)| {
            let rule = Arc::clone(&rule);
            thread::spawn(move || (rule.evaluate(&ctx), expected))
        })
        .collect();

    for handle in handles {
        let (result, expected) = handle.join().unwrap();
        assert_eq!(result, Ok(expected));
    }
}

#[test]
fn share_rulebook_across_threads() {
    let book = Arc::new(RuleBook::from_rules([
        "quantidade > 10 E valor > 1000 ENTAO 15",
        "categoria = \"VIP\" ENTAO 20",
        "primeiraCompra = true ENTAO 10",
    ]));

    let handles: Vec<_> = (0..8_i64)
        .map(|i| {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                let category = if i % 2 == 0 { "VIP" } else { "Regular" };
                let ctx = Context::new(i, 100 * i, category, false);
                book.evaluate(&ctx).best_discount()
            })
        })
        .collect();

    let results: Vec<Decimal> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, best) in results.into_iter().enumerate() {
        let expected = if i % 2 == 0 { 20 } else { 0 };
        assert_eq!(best, Decimal::from(expected), "thread {i}");
    }
}
