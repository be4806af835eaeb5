//! Keypad Session
//!
//! This example drives a calculator session the way a browser front end
//! would: load the evaluator, then feed it button annotations.
//!
//! Key concepts:
//! - Input is rejected until the evaluator is loaded
//! - Chained operators compute as you go
//! - Division by zero shows an error and the next press starts fresh
//! - Every computation lands on the tape
//!
//! Run with: RUST_LOG=debug cargo run --example keypad_session

use keycalc::builder::CalculatorBuilder;
use keycalc::core::Event;
use keycalc::effects::EvaluatorRegistry;
use tracing_subscriber::EnvFilter;

/// (data-type, data-value, data-op) as a button grid would annotate them.
const PRESSES: &[(&str, Option<&str>, Option<&str>)] = &[
    ("number", Some("3"), None),
    ("operator", None, Some("+")),
    ("number", Some("4"), None),
    ("operator", None, Some("+")),
    ("number", Some("5"), None),
    ("equals", None, None),
    ("operator", None, Some("/")),
    ("number", Some("0"), None),
    ("equals", None, None),
    ("number", Some("2"), None),
    ("number", Some("."), None),
    ("number", Some("5"), None),
    ("operator", None, Some("*")),
    ("number", Some("2"), None),
    ("equals", None, None),
];

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session Example ===\n");

    let mut calc = CalculatorBuilder::new().build().expect("default config is valid");

    match calc.press(Event::Digit(1)) {
        Ok(_) => println!("unexpected: input accepted before startup"),
        Err(e) => println!("Before startup: {e}"),
    }

    calc.start_from_registry(&EvaluatorRegistry::with_standard())
        .await
        .expect("standard evaluator is registered");
    println!("Lifecycle: {:?}\n", calc.lifecycle());

    for (kind, value, op) in PRESSES {
        let label = value.or(*op).unwrap_or(*kind);
        match calc.press_control(kind, *value, *op) {
            Ok(display) => println!("  [{label:>6}] -> {display}"),
            Err(e) => println!("  [{label:>6}] -> {} ({e})", calc.display()),
        }
    }

    println!("\nTape:");
    for line in calc.tape().lines() {
        println!("  {line}");
    }

    println!("\n=== Example Complete ===");
}
