use colored::*;
use ordered_float::OrderedFloat;

use negcycle_apsp::{BellmanFord, DirectedGraph, Edge, Error};

// Exchange rate r becomes edge weight -ln(r): a cycle whose rates multiply
// to more than 1 has negative total weight.
fn rate_edge(from: &'static str, to: &'static str, rate: f64) -> Edge<&'static str, OrderedFloat<f64>> {
    Edge::new(from, to, OrderedFloat(-rate.ln()))
}

fn check_market(name: &str, rates: &[(&'static str, &'static str, f64)]) -> Result<(), Error> {
    let currencies = ["USD", "EUR", "GBP", "JPY"];
    let graph = DirectedGraph::new(
        currencies,
        rates.iter().map(|&(from, to, rate)| rate_edge(from, to, rate)),
    )?;

    println!("{}", format!("Market: {}", name).bold());
    match BellmanFord::new().evaluate(&"USD", &graph) {
        Ok(result) => {
            println!("  {}", "No arbitrage opportunity".green());
            for currency in currencies {
                if let Some(weight) = result.distance_to(&currency).and_then(|d| d.finite()) {
                    println!("  best USD -> {}: {:.4}", currency, (-weight.into_inner()).exp());
                }
            }
        }
        Err(err) if err.is_negative_cycle() => {
            println!("  {} {}", "Arbitrage detected:".red().bold(), err);
        }
        Err(err) => return Err(err),
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    check_market(
        "balanced",
        &[
            ("USD", "EUR", 0.9),
            ("EUR", "USD", 1.1),
            ("EUR", "GBP", 0.85),
            ("GBP", "EUR", 1.17),
            ("USD", "JPY", 150.0),
            ("JPY", "USD", 0.0066),
        ],
    )?;

    check_market(
        "skewed",
        &[
            ("USD", "EUR", 0.9),
            ("EUR", "GBP", 0.9),
            ("GBP", "USD", 1.35),
            ("USD", "JPY", 150.0),
        ],
    )?;

    Ok(())
}
