//! Numeric-integration demo for self-inlining expressions: integrates
//! x ↦ x² over a configurable interval, once through the expression type
//! and once through an ordinary function pointer, and prints both.
use clap::Parser;

use inlam::prelude::*;

mod integrate;

#[derive(Parser)]
#[command(about = "Rectangle-rule integration of x² driven by a self-inlining expression")]
struct Arguments {
    /// Lower integration bound
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Upper integration bound
    #[arg(long, default_value_t = 1.0)]
    to: f64,

    /// Number of rectangle subdivisions
    #[arg(long, default_value_t = 10_000)]
    steps: u32,
}

fn square(v: f64) -> f64 {
    v * v
}

fn main() {
    let args = Arguments::parse();

    let x = arg::<f64>();
    let expr = lambda(x, x * x);

    let inlined = integrate::integrate(expr, args.from, args.to, args.steps);
    let pointer = integrate::integrate_fn(square, args.from, args.to, args.steps);

    match (inlined, pointer) {
        (Ok(inlined), Ok(pointer)) => {
            println!("self-inlined: {inlined:.6}");
            println!("fn pointer:   {pointer:.6}");
        }
        (Err(error), _) | (_, Err(error)) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}
