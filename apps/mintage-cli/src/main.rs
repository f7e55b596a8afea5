//! # Mintage CLI Entry Point
//!
//! ## Usage
//! ```bash
//! # Run the built-in samples
//! mintage demo
//!
//! # Normalize amounts from argv
//! mintage parse --json '$1,234.56' '€1.234,56'
//!
//! # One amount per line from stdin
//! mintage interactive
//!
//! # Workflow records (object or array of objects)
//! echo '{"Answers":{"Budget":"USD 1,000.50"}}' | mintage workflow
//! ```
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    mintage_cli::run().await?;
    Ok(())
}
