//! Group a small order log several ways and print JSON reports

use seqkit::{groups_to_json, SeqExt};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Order {
    id: u32,
    customer: &'static str,
    amount_cents: u64,
}

fn main() -> serde_json::Result<()> {
    let orders = vec![
        Order { id: 1, customer: "acme", amount_cents: 12_500 },
        Order { id: 2, customer: "globex", amount_cents: 900 },
        Order { id: 3, customer: "acme", amount_cents: 4_200 },
        Order { id: 4, customer: "initech", amount_cents: 31_000 },
        Order { id: 5, customer: "globex", amount_cents: 15_750 },
    ];

    println!("Grouping {} orders", orders.len());

    let by_customer = orders.group_by(|o| o.customer);
    println!("by customer: {}", groups_to_json(&by_customer)?);

    // Bucket amounts by order of magnitude of whole dollars
    let by_bucket = orders.group_by(|o| (o.amount_cents / 100).to_string().len());
    println!("by size:     {}", groups_to_json(&by_bucket)?);

    let totals = orders
        .map(|o| o.customer)
        .unique()
        .map(|c| (*c, orders.filter(|o| o.customer == *c).reduce(0, |acc, o| acc + o.amount_cents)));
    println!("totals:      {totals:?}");

    let (smallest, largest) = orders.min_max_func(|a, b| a.amount_cents.cmp(&b.amount_cents));
    println!("smallest #{}, largest #{}", smallest.id, largest.id);

    Ok(())
}
