use discount_rules::{Context, RuleBook};
use tracing_subscriber::{fmt, EnvFilter};

const RULES: &[&str] = &[
    "quantidade > 10 E valor > 1000 ENTAO 15",
    "categoria = \"VIP\" ENTAO 20",
    "primeiraCompra = true ENTAO 10",
    "(quantidade > 10 OU valor > 500) E categoria = \"VIP\" ENTAO 25",
    "NÃO primeiraCompra E quantidade >= 5 ENTAO 5",
];

fn main() {
    // RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let book = RuleBook::from_rules(RULES);
    println!("{book}\n");

    let carts = [
        Context::new(15, 1500, "Regular", false),
        Context::new(5, 500, "VIP", false),
        Context::new(2, 200, "Regular", true),
    ];

    for (idx, cart) in carts.iter().enumerate() {
        println!("--- Cart {} ---", idx + 1);
        println!(
            "quantity: {}, total: {}, category: {}, first purchase: {}",
            cart.quantity(),
            cart.total(),
            cart.category(),
            cart.first_purchase()
        );
        println!("{}\n", book.evaluate(cart));
    }
}
