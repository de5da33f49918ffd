//! Shared leaf utilities: URL canonicalization and short code derivation.

pub mod code_generator;
pub mod url_codec;
