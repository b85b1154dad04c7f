//! Indexed signature ("indexer") code registry.
//!
//! Indexed codes carry the signature's position within a multi-signature
//! group in their soft part. The Big variants widen the soft part for
//! larger groups; the Crt variants index into the current (rotation) key
//! list only.

use crate::schema::IndexerSizage;

/// Indexer codes, `(name, code)`, in definition order.
pub const INDEXER_CODES: &[(&str, &str)] = &[
    ("Ed25519_Sig", "A"),
    ("Ed25519_Crt_Sig", "B"),
    ("ECDSA_256k1_Sig", "C"),
    ("ECDSA_256k1_Crt_Sig", "D"),
    ("ECDSA_256r1_Sig", "E"),
    ("ECDSA_256r1_Crt_Sig", "F"),
    ("Ed448_Sig", "0A"),
    ("Ed448_Crt_Sig", "0B"),
    ("Ed25519_Big_Sig", "2A"),
    ("Ed25519_Big_Crt_Sig", "2B"),
    ("ECDSA_256k1_Big_Sig", "2C"),
    ("ECDSA_256k1_Big_Crt_Sig", "2D"),
    ("ECDSA_256r1_Big_Sig", "2E"),
    ("ECDSA_256r1_Big_Crt_Sig", "2F"),
    ("Ed448_Big_Sig", "3A"),
    ("Ed448_Big_Crt_Sig", "3B"),
];

const fn sz(hs: u32, ss: u32, fs: Option<u32>, ls: u32) -> IndexerSizage {
    IndexerSizage { hs, ss, fs, ls }
}

/// Size schemas keyed by indexer code.
pub const INDEXER_SIZES: &[(&str, IndexerSizage)] = &[
    ("A", sz(1, 1, Some(88), 0)),
    ("B", sz(1, 1, Some(88), 0)),
    ("C", sz(1, 1, Some(88), 0)),
    ("D", sz(1, 1, Some(88), 0)),
    ("E", sz(1, 1, Some(88), 0)),
    ("F", sz(1, 1, Some(88), 0)),
    ("0A", sz(2, 2, Some(156), 0)),
    ("0B", sz(2, 2, Some(156), 0)),
    ("2A", sz(2, 4, Some(92), 0)),
    ("2B", sz(2, 4, Some(92), 0)),
    ("2C", sz(2, 4, Some(92), 0)),
    ("2D", sz(2, 4, Some(92), 0)),
    ("2E", sz(2, 4, Some(92), 0)),
    ("2F", sz(2, 4, Some(92), 0)),
    ("3A", sz(2, 6, Some(160), 0)),
    ("3B", sz(2, 6, Some(160), 0)),
];
