//! Account Reporting Request
//!
//! Typed model and XML encoding for the ISO 20022 camt.060.001.03
//! "Account Reporting Request" message.
//!
//! # Layout
//!
//! - [`iso20022::codes`]: closed ISO code lists (balance type, entry status,
//!   credit/debit, query type, address type) and the flat [`iso20022::CodeSet`]
//! - [`iso20022::datetime`]: `ISODate`, `ISOTime` and `ISODateTime` leaf values
//! - [`iso20022::identification`]: parties, institutions, branches and addresses
//! - [`iso20022::camt060`]: message entities and the `Document` envelope
//!
//! # Example
//!
//! ```no_run
//! use account_reporting::iso20022::{Camt060Builder, CashAccount};
//!
//! fn main() -> account_reporting::Result<()> {
//!     let document = Camt060Builder::new("MSG001", "camt.052.001.02")
//!         .with_account(CashAccount::new("ACC123"))
//!         .build();
//!
//!     println!("{}", document.to_xml()?);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod iso20022;

// Re-exports
pub use config::{EncoderConfig, IndentConfig};
pub use error::{Error, Result};
pub use iso20022::{generate_message, Document};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
