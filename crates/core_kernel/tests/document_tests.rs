//! Identity document validation tests

use core_kernel::document::validate_identity_document;
use core_kernel::IdentityDocument;
use proptest::prelude::*;

#[test]
fn canonical_form_survives_serde_roundtrip() {
    let doc = IdentityDocument::new("908.630.180-09");
    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, "\"90863018009\"");

    let back: IdentityDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn display_uses_canonical_form() {
    let doc = IdentityDocument::new("289.810.560-05");
    assert_eq!(doc.to_string(), "28981056005");
}

proptest! {
    /// Eleven repeated digits satisfy the checksum formula but are never
    /// issued, so every such sequence must be rejected.
    #[test]
    fn repeated_digit_sequences_are_rejected(digit in 0u32..10) {
        let repeated: String = std::char::from_digit(digit, 10)
            .unwrap()
            .to_string()
            .repeat(11);
        prop_assert!(!validate_identity_document(&repeated));
    }

    /// Validation only looks at digits: interleaving arbitrary punctuation
    /// must not change the verdict.
    #[test]
    fn punctuation_does_not_change_the_verdict(
        digits in proptest::collection::vec(0u32..10, 0..14),
        separator in "[ .\\-/]{1,3}",
    ) {
        let plain: String = digits
            .iter()
            .map(|d| std::char::from_digit(*d, 10).unwrap())
            .collect();
        let decorated: String = plain
            .chars()
            .flat_map(|c| std::iter::once(c).chain(separator.chars()))
            .collect();

        prop_assert_eq!(
            validate_identity_document(&plain),
            validate_identity_document(&decorated)
        );
    }

    /// Stripping is canonical: constructing from an already-canonical form
    /// is a no-op.
    #[test]
    fn construction_is_idempotent(raw in "[0-9.\\- ]{0,20}") {
        let once = IdentityDocument::new(&raw);
        let twice = IdentityDocument::new(once.as_str());
        prop_assert_eq!(once, twice);
    }
}
