//! convo - hierarchical discussion comment store CLI
//!
//! A demo front end for the convo-core library.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the sample walkthrough
//! convo demo
//!
//! # Render a saved forest
//! convo show comments_tree.json
//!
//! # Convert between the two exchange formats
//! convo convert comments_tree.json comments_tree.xml
//! ```

mod commands;
mod render;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
