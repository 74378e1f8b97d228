//! Known-good and known-bad fixture values

/// Checksum-valid document, formatted as callers usually send it.
pub const VALID_DOCUMENT: &str = "908.630.180-09";

/// Canonical form of [`VALID_DOCUMENT`].
pub const VALID_DOCUMENT_CANONICAL: &str = "90863018009";

/// A second checksum-valid document for multi-proposer scenarios.
pub const SECOND_VALID_DOCUMENT: &str = "289.810.560-05";

/// A third checksum-valid document.
pub const THIRD_VALID_DOCUMENT: &str = "111.444.777-35";

/// Fails the first check digit.
pub const INVALID_DOCUMENT: &str = "123.456.789-10";

/// Checksum-valid but blacklisted placeholder.
pub const BLACKLISTED_DOCUMENT: &str = "123.456.789-09";

/// Birth date that makes an adult proposer for any plausible test date.
pub const ADULT_BIRTH_DATE: &str = "1990-05-10";
