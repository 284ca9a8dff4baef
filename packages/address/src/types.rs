//! Token types for the four parts of an address.
//!
//! Each type wraps one token of the split address text. Validation is
//! structural only: a token must be non-empty and free of whitespace.

use serde::Serialize;
use std::fmt;

use crate::error::{FieldError, TokenRejection};

/// The four positions of an address, in token order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    Block,
    Street,
    Unit,
    PostalCode,
}

impl AddressField {
    /// All fields in token order.
    pub const ALL: [AddressField; 4] = [Self::Block, Self::Street, Self::Unit, Self::PostalCode];

    /// Human-readable field name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Street => "street",
            Self::Unit => "unit",
            Self::PostalCode => "postal code",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn validate_token(field: AddressField, token: &str) -> Result<(), FieldError> {
    if token.is_empty() {
        return Err(FieldError::new(field, token, TokenRejection::Empty));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(FieldError::new(field, token, TokenRejection::ContainsWhitespace));
    }
    Ok(())
}

/// Declares a token type for one address field.
macro_rules! address_token {
    ($(#[$meta:meta])* $name:ident => $field:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create the token type from its token.
            ///
            /// # Errors
            ///
            /// Returns a `FieldError` if the token is empty or contains whitespace.
            pub fn new(token: impl Into<String>) -> Result<Self, FieldError> {
                let token = token.into();
                validate_token($field, &token)?;
                Ok(Self(token))
            }

            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

address_token!(
    /// Block number, e.g. `123` or `123,`.
    Block => AddressField::Block
);

address_token!(
    /// Street name token.
    Street => AddressField::Street
);

address_token!(
    /// Unit token, e.g. `#12-34`.
    Unit => AddressField::Unit
);

address_token!(
    /// Postal code token. Digits are not enforced.
    PostalCode => AddressField::PostalCode
);
