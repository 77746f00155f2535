use astrule::{combine, evaluate, parse, Context};

fn main() {
    let rule = parse("age > 30 AND department = 'Sales'").expect("failed to parse rule");
    println!("{rule}");

    let ctx = Context::new().set("age", 35_i64).set("department", "Sales");
    println!("Eligible: {}", evaluate(&rule, &ctx));

    let combined = combine([
        "age > 30 AND department = 'Sales'",
        "salary < 50000 OR experience > 5",
    ])
    .expect("failed to combine rules");
    println!("{combined}");

    let ctx = ctx.set("salary", 60_000_i64).set("experience", 3_i64);
    println!("Eligible: {}", evaluate(&combined, &ctx));
}
