//! The address value object.
//!
//! An [`Address`] is built from free text by trimming it, checking its
//! structure and splitting it into four typed tokens.
//!
//! # Examples
//!
//! ```
//! use addressbook_address::Address;
//!
//! let address = Address::new("  10 Ave3 #12-34 120123 ", false).unwrap();
//! assert_eq!(address.value(), "10 Ave3 #12-34 120123");
//! assert_eq!(address.street().map(|s| s.value()), Some("Ave3"));
//! assert_eq!(address.to_string(), "10 Ave3 #12-34 120123");
//!
//! assert!(Address::new("123 Main St Unit5 099999", false).is_err());
//! ```

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::config::{is_valid_address, split_tokens, FieldFailurePolicy};
use crate::error::{AddressError, FieldError, Result};
use crate::report::{Reporter, TracingReporter};
use crate::types::{AddressField, Block, PostalCode, Street, Unit};

/// A person's address in the address book.
///
/// Immutable once built. Equality, hashing and display use only the
/// canonical trimmed text; sub-fields and the privacy flag are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct Address {
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    block: Option<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    street: Option<Street>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<PostalCode>,
    is_private: bool,
}

/// An address together with the field errors tolerated while building it.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedAddress {
    address: Address,
    warnings: Vec<FieldError>,
}

impl ParsedAddress {
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Field errors that left a sub-field unset.
    #[must_use]
    pub fn warnings(&self) -> &[FieldError] {
        &self.warnings
    }

    #[must_use]
    pub fn into_address(self) -> Address {
        self.address
    }

    #[must_use]
    pub fn into_parts(self) -> (Address, Vec<FieldError>) {
        (self.address, self.warnings)
    }
}

#[derive(Default)]
struct Fields {
    block: Option<Block>,
    street: Option<Street>,
    unit: Option<Unit>,
    postal_code: Option<PostalCode>,
}

impl Address {
    /// Build an address, tolerating rejected fields and logging them.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::InvalidAddress` if the trimmed text does not
    /// split into exactly four tokens.
    pub fn new(raw: &str, is_private: bool) -> Result<Self> {
        Self::parse_with(raw, is_private, FieldFailurePolicy::Tolerate, &TracingReporter)
            .map(ParsedAddress::into_address)
    }

    /// Build an address with an explicit field policy and reporter.
    ///
    /// The reporter receives a usage hint before a structural failure is
    /// returned, and every field rejection under either policy.
    ///
    /// # Errors
    ///
    /// - `AddressError::InvalidAddress` if the trimmed text is not
    ///   structurally valid.
    /// - `AddressError::InvalidField` for the first rejected token when the
    ///   policy is [`FieldFailurePolicy::Reject`].
    pub fn parse_with(
        raw: &str,
        is_private: bool,
        policy: FieldFailurePolicy,
        reporter: &dyn Reporter,
    ) -> Result<ParsedAddress> {
        let trimmed = raw.trim();

        if !is_valid_address(trimmed) {
            reporter.usage_hint(raw);
            return Err(AddressError::InvalidAddress {
                input: raw.to_string(),
            });
        }

        let mut fields = Fields::default();
        let mut warnings = Vec::new();

        for (field, token) in AddressField::ALL.into_iter().zip(split_tokens(trimmed)) {
            if let Err(error) = fields.assign(field, token) {
                reporter.field_rejected(&error);
                match policy {
                    FieldFailurePolicy::Tolerate => warnings.push(error),
                    FieldFailurePolicy::Reject => return Err(error.into()),
                }
            }
        }

        tracing::debug!(
            address = trimmed,
            is_private,
            warnings = warnings.len(),
            "Parsed address"
        );

        Ok(ParsedAddress {
            address: Self {
                value: trimmed.to_string(),
                block: fields.block,
                street: fields.street,
                unit: fields.unit,
                postal_code: fields.postal_code,
                is_private,
            },
            warnings,
        })
    }

    /// The canonical trimmed text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }

    #[must_use]
    pub fn street(&self) -> Option<&Street> {
        self.street.as_ref()
    }

    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&PostalCode> {
        self.postal_code.as_ref()
    }

    #[must_use]
    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// True if every sub-field was populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.block.is_some()
            && self.street.is_some()
            && self.unit.is_some()
            && self.postal_code.is_some()
    }
}

impl Fields {
    fn assign(&mut self, field: AddressField, token: &str) -> std::result::Result<(), FieldError> {
        match field {
            AddressField::Block => self.block = Some(Block::new(token)?),
            AddressField::Street => self.street = Some(Street::new(token)?),
            AddressField::Unit => self.unit = Some(Unit::new(token)?),
            AddressField::PostalCode => self.postal_code = Some(PostalCode::new(token)?),
        }
        Ok(())
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parse a public address.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s, false)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value, false)
    }
}
