//! Property tests for structural validation, canonical value and identity.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use addressbook_address::{is_valid_address, Address, AddressError};
use proptest::prelude::*;

const TOKEN: &str = "[A-Za-z0-9,#-]{1,8}";
const PADDING: &str = "[ \t\n]{0,3}";

fn hash_of(address: &Address) -> u64 {
    let mut hasher = DefaultHasher::new();
    address.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn prop_four_tokens_are_valid(
        tokens in prop::collection::vec(TOKEN, 4),
        leading in PADDING,
        trailing in PADDING
    ) {
        let text = format!("{leading}{}{trailing}", tokens.join(" "));
        prop_assert!(is_valid_address(&text));

        let address = Address::new(&text, false).unwrap();
        prop_assert_eq!(address.value(), text.trim());
        prop_assert_eq!(address.value(), address.value().trim());
        prop_assert_eq!(address.block().map(|b| b.value()), Some(tokens[0].as_str()));
        prop_assert_eq!(address.street().map(|s| s.value()), Some(tokens[1].as_str()));
        prop_assert_eq!(address.unit().map(|u| u.value()), Some(tokens[2].as_str()));
        prop_assert_eq!(address.postal_code().map(|p| p.value()), Some(tokens[3].as_str()));
    }

    #[test]
    fn prop_other_token_counts_are_invalid(
        tokens in prop::collection::vec(TOKEN, 0..10).prop_filter("not four", |t| t.len() != 4),
        leading in PADDING
    ) {
        let text = format!("{leading}{}", tokens.join(" "));
        prop_assert!(!is_valid_address(&text));
        let is_invalid_address = matches!(
            Address::new(&text, false),
            Err(AddressError::InvalidAddress { .. })
        );
        prop_assert!(is_invalid_address);
    }

    #[test]
    fn prop_validity_matches_construction(text in "\\PC{0,40}") {
        prop_assert_eq!(is_valid_address(&text), Address::new(&text, false).is_ok());
    }

    #[test]
    fn prop_rebuilding_from_value_is_identity(tokens in prop::collection::vec(TOKEN, 4)) {
        let address = Address::new(&tokens.join(" "), true).unwrap();
        let rebuilt = Address::new(address.value(), true).unwrap();
        prop_assert_eq!(rebuilt.value(), address.value());
    }

    #[test]
    fn prop_equality_ignores_privacy_and_padding(
        tokens in prop::collection::vec(TOKEN, 4),
        padding in PADDING
    ) {
        let text = tokens.join(" ");
        let public = Address::new(&text, false).unwrap();
        let private = Address::new(&format!("{padding}{text}{padding}"), true).unwrap();

        prop_assert_eq!(&public, &private);
        prop_assert_eq!(&private, &public);
        prop_assert_eq!(hash_of(&public), hash_of(&private));
    }

    #[test]
    fn prop_equality_follows_value(
        first in prop::collection::vec(TOKEN, 4),
        second in prop::collection::vec(TOKEN, 4)
    ) {
        let a = Address::new(&first.join(" "), false).unwrap();
        let b = Address::new(&second.join(" "), false).unwrap();
        prop_assert_eq!(a == b, a.value() == b.value());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}
