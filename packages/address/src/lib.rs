//! Address value object for the address book.
//!
//! Turns a free-text address into an immutable [`Address`] after checking
//! that it splits into exactly four space-separated tokens: block, street,
//! unit and postal code.
//!
//! # Example
//!
//! ```
//! use addressbook_address::{is_valid_address, Address};
//!
//! assert!(is_valid_address("10 Ave3 #12-34 120123"));
//!
//! let address = Address::new("10 Ave3 #12-34 120123", true).unwrap();
//! assert_eq!(address.postal_code().map(|p| p.value()), Some("120123"));
//! assert!(address.is_private());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, structural validation and parse policy
//! - [`types`]: Token types (Block, Street, Unit, PostalCode)
//! - [`address`]: The `Address` value object
//! - [`report`]: Injectable diagnostic reporting
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod address;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod types;

pub use address::{Address, ParsedAddress};
pub use config::{is_valid_address, FieldFailurePolicy};
pub use error::{AddressError, CliError, FieldError, Result, TokenRejection};
pub use report::{Diagnostic, RecordingReporter, Reporter, SilentReporter, TracingReporter};
pub use types::{AddressField, Block, PostalCode, Street, Unit};
