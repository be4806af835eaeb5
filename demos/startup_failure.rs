//! Startup Failure
//!
//! This example shows what a session does when its evaluator cannot be
//! loaded: the display switches to a distinct error label and every press
//! is refused.
//!
//! Run with: cargo run --example startup_failure

use keycalc::config::CalculatorConfig;
use keycalc::core::Event;
use keycalc::effects::{loader, Calculator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Startup Failure Example ===\n");

    let config = CalculatorConfig::from_json(r#"{ "load_error_label": "Wasm Load Error" }"#)
        .expect("config is valid");
    let mut calc = Calculator::new(config);

    if let Err(e) = calc
        .start(loader::unavailable::<()>("module fetch returned 404"), &())
        .await
    {
        println!("Startup failed: {e}");
    }

    println!("Lifecycle: {:?}", calc.lifecycle());
    println!("Display:   {}", calc.display());

    for event in [Event::Digit(7), Event::Clear] {
        match calc.press(event) {
            Ok(display) => println!("  {event} -> {display}"),
            Err(e) => println!("  {event} refused: {e}"),
        }
    }

    println!("\n=== Example Complete ===");
}
