use astrule::{Context, RuleService};

fn main() {
    let service = RuleService::in_memory();

    for (name, text) in [
        ("senior_sales", "age > 30 AND department = 'Sales'"),
        ("budget", "salary < 50000 OR experience > 5"),
    ] {
        let stored = service.create_rule(name, text).expect("failed to store rule");
        println!("stored #{}: {} = {}", stored.id, stored.name, stored.rule_text);
    }

    let combined = service.combine_stored().expect("failed to combine stored rules");
    println!("combined: {combined}");

    let ctx = Context::new()
        .set("age", 41_i64)
        .set("department", "Sales")
        .set("experience", 12_i64);
    match service.evaluate_rule(Some("age > 30 AND experience > 10"), Some(&ctx)) {
        Ok(result) => println!("Result: {result}"),
        Err(err) => println!("Rejected: {err}"),
    }
}
