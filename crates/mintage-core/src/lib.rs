//! # mintage-core: Locale-Ambiguous Amount Normalization
//!
//! Parses money text written in whatever convention the user happened to
//! type (`"$1,234.56"`, `"€1.234,56"`, `"USD 1,000.50"`, `"(£20)"`) into a
//! signed count of minor units.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mintage Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    mintage (CLI)                                │   │
//! │  │    demo ──► parse ──► interactive ──► workflow                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mintage-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌────────────┐ ┌────────────┐ ┌──────────────┐  │   │
//! │  │   │ currency │►│ separators │►│ normalizer │►│ outcome /    │  │   │
//! │  │   │  strip   │ │   infer    │ │ round, sum │ │ workflow     │  │   │
//! │  │   └──────────┘ └────────────┘ └────────────┘ └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`normalizer`] - The parsing pipeline (`normalize`)
//! - [`currency`] - Currency symbol and code stripping
//! - [`separators`] - Decimal / thousands separator inference
//! - [`money`] - Money type with integer minor units
//! - [`outcome`] - JSON-friendly result record
//! - [`workflow`] - Workflow record adapter
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, safe from any thread
//! 2. **No I/O**: reading and printing belong to the CLI
//! 3. **Integer Money**: digits are assembled as integers, never via floats
//! 4. **Explicit Errors**: every failure is a typed `Result`, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use mintage_core::normalize;
//!
//! let us = normalize("$1,234.56").unwrap();
//! let eu = normalize("€1.234,56").unwrap();
//! assert_eq!(us, eu);
//! assert_eq!(us.cents(), 123456);
//!
//! // No decimal mark: whole units
//! assert_eq!(normalize("£1,000").unwrap().cents(), 100000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod money;
pub mod normalizer;
pub mod outcome;
pub mod separators;
pub mod validation;
pub mod workflow;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, NormalizeError, NormalizeResult, WorkflowError, WorkflowResult};
pub use money::Money;
pub use normalizer::normalize;
pub use outcome::NormalizeOutcome;
pub use workflow::{transform_record, BudgetOutcome, WorkflowInput};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minor units in one major unit.
///
/// Fixed at 100 for every currency; zero- and three-decimal currencies are
/// not special-cased.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;
