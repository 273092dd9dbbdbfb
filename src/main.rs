//! bridgesolve - resistive bridge circuit calculator
//!
//! Computes the node voltages of the fixed bridge topology by nodal
//! analysis and prints them to 4 decimal places.
//!
//! # Usage
//!
//! ```bash
//! bridgesolve --source 12 --r1 100 --r2 200 --r3 300 --r4 400 --r5 500 --r6 600
//! ```

use bridge_solver::{report, solve};
use clap::Parser;

/// Resistive bridge circuit solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source voltage E in volts
    #[arg(short = 'e', long = "source", default_value_t = 12.0)]
    source: f64,

    /// Series resistance between the source and node 2, in ohms
    #[arg(long, default_value_t = 100.0)]
    r1: f64,

    /// Bridge arm between nodes 2 and 3, in ohms
    #[arg(long, default_value_t = 200.0)]
    r2: f64,

    /// Return path from node 3 to ground, in ohms
    #[arg(long, default_value_t = 300.0)]
    r3: f64,

    /// Bridge arm between nodes 2 and 4, in ohms
    #[arg(long, default_value_t = 400.0)]
    r4: f64,

    /// Return path from node 4 to ground, in ohms
    #[arg(long, default_value_t = 500.0)]
    r5: f64,

    /// Bridging resistance between nodes 3 and 4, in ohms
    #[arg(long, default_value_t = 600.0)]
    r6: f64,
}

fn main() {
    let args = Args::parse();

    match solve(
        args.source,
        args.r1,
        args.r2,
        args.r3,
        args.r4,
        args.r5,
        args.r6,
    ) {
        Ok(voltages) => println!("{}", report::format_voltages(&voltages)),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
