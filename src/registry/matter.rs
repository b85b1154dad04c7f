//! Primitive material ("matter") code registry.
//!
//! Codes identify an encoded cryptographic primitive's type and size layout:
//! seeds, public keys, digests, signatures, tags, and the variable-size
//! text/binary families. Table order is the registry's definition order.

use crate::schema::MatterSizage;

/// Matter codes, `(name, code)`, in definition order.
pub const MATTER_CODES: &[(&str, &str)] = &[
    ("Ed25519_Seed", "A"),
    ("Ed25519N", "B"),
    ("X25519", "C"),
    ("Ed25519", "D"),
    ("Blake3_256", "E"),
    ("Blake2b_256", "F"),
    ("Blake2s_256", "G"),
    ("SHA3_256", "H"),
    ("SHA2_256", "I"),
    ("ECDSA_256k1_Seed", "J"),
    ("Ed448_Seed", "K"),
    ("X448", "L"),
    ("Short", "M"),
    ("Big", "N"),
    ("X25519_Private", "O"),
    ("X25519_Cipher_Seed", "P"),
    ("ECDSA_256r1_Seed", "Q"),
    ("Tall", "R"),
    ("Large", "S"),
    ("Great", "T"),
    ("Vast", "U"),
    ("Label1", "V"),
    ("Label2", "W"),
    ("Tag3", "X"),
    ("Tag7", "Y"),
    ("Blind", "Z"),
    ("Salt_128", "0A"),
    ("Ed25519_Sig", "0B"),
    ("ECDSA_256k1_Sig", "0C"),
    ("Blake3_512", "0D"),
    ("Blake2b_512", "0E"),
    ("SHA3_512", "0F"),
    ("SHA2_512", "0G"),
    ("Long", "0H"),
    ("ECDSA_256r1_Sig", "0I"),
    ("Tag1", "0J"),
    ("Tag2", "0K"),
    ("Tag5", "0L"),
    ("Tag6", "0M"),
    ("Tag9", "0N"),
    ("Tag10", "0O"),
    ("ECDSA_256k1N", "1AAA"),
    ("ECDSA_256k1", "1AAB"),
    ("Ed448N", "1AAC"),
    ("Ed448", "1AAD"),
    ("Ed448_Sig", "1AAE"),
    ("Tag4", "1AAF"),
    ("DateTime", "1AAG"),
    ("X25519_Cipher_Salt", "1AAH"),
    ("ECDSA_256r1N", "1AAI"),
    ("ECDSA_256r1", "1AAJ"),
    ("Null", "1AAK"),
    ("No", "1AAL"),
    ("Yes", "1AAM"),
    ("Tag8", "1AAN"),
    ("StrB64_L0", "4A"),
    ("StrB64_L1", "5A"),
    ("StrB64_L2", "6A"),
    ("StrB64_Big_L0", "7AAA"),
    ("StrB64_Big_L1", "8AAA"),
    ("StrB64_Big_L2", "9AAA"),
    ("Bytes_L0", "4B"),
    ("Bytes_L1", "5B"),
    ("Bytes_L2", "6B"),
    ("Bytes_Big_L0", "7AAB"),
    ("Bytes_Big_L1", "8AAB"),
    ("Bytes_Big_L2", "9AAB"),
    ("X25519_Cipher_L0", "4C"),
    ("X25519_Cipher_L1", "5C"),
    ("X25519_Cipher_L2", "6C"),
    ("X25519_Cipher_Big_L0", "7AAC"),
    ("X25519_Cipher_Big_L1", "8AAC"),
    ("X25519_Cipher_Big_L2", "9AAC"),
];

const fn sz(hs: u32, ss: u32, xs: u32, fs: Option<u32>, ls: u32) -> MatterSizage {
    MatterSizage { hs, ss, xs, fs, ls }
}

/// Size schemas keyed by matter code.
pub const MATTER_SIZES: &[(&str, MatterSizage)] = &[
    ("A", sz(1, 0, 0, Some(44), 0)),
    ("B", sz(1, 0, 0, Some(44), 0)),
    ("C", sz(1, 0, 0, Some(44), 0)),
    ("D", sz(1, 0, 0, Some(44), 0)),
    ("E", sz(1, 0, 0, Some(44), 0)),
    ("F", sz(1, 0, 0, Some(44), 0)),
    ("G", sz(1, 0, 0, Some(44), 0)),
    ("H", sz(1, 0, 0, Some(44), 0)),
    ("I", sz(1, 0, 0, Some(44), 0)),
    ("J", sz(1, 0, 0, Some(44), 0)),
    ("K", sz(1, 0, 0, Some(76), 0)),
    ("L", sz(1, 0, 0, Some(76), 0)),
    ("M", sz(1, 0, 0, Some(4), 0)),
    ("N", sz(1, 0, 0, Some(12), 0)),
    ("O", sz(1, 0, 0, Some(44), 0)),
    ("P", sz(1, 0, 0, Some(124), 0)),
    ("Q", sz(1, 0, 0, Some(44), 0)),
    ("R", sz(1, 0, 0, Some(8), 0)),
    ("S", sz(1, 0, 0, Some(16), 0)),
    ("T", sz(1, 0, 0, Some(20), 0)),
    ("U", sz(1, 0, 0, Some(24), 0)),
    ("V", sz(1, 0, 0, Some(4), 1)),
    ("W", sz(1, 0, 0, Some(4), 0)),
    ("X", sz(1, 3, 0, Some(4), 0)),
    ("Y", sz(1, 7, 0, Some(8), 0)),
    ("Z", sz(1, 0, 0, Some(44), 0)),
    ("0A", sz(2, 0, 0, Some(24), 0)),
    ("0B", sz(2, 0, 0, Some(88), 0)),
    ("0C", sz(2, 0, 0, Some(88), 0)),
    ("0D", sz(2, 0, 0, Some(88), 0)),
    ("0E", sz(2, 0, 0, Some(88), 0)),
    ("0F", sz(2, 0, 0, Some(88), 0)),
    ("0G", sz(2, 0, 0, Some(88), 0)),
    ("0H", sz(2, 0, 0, Some(8), 0)),
    ("0I", sz(2, 0, 0, Some(88), 0)),
    ("0J", sz(2, 2, 1, Some(4), 0)),
    ("0K", sz(2, 2, 0, Some(4), 0)),
    ("0L", sz(2, 6, 1, Some(8), 0)),
    ("0M", sz(2, 6, 0, Some(8), 0)),
    ("0N", sz(2, 10, 1, Some(12), 0)),
    ("0O", sz(2, 10, 0, Some(12), 0)),
    ("1AAA", sz(4, 0, 0, Some(48), 0)),
    ("1AAB", sz(4, 0, 0, Some(48), 0)),
    ("1AAC", sz(4, 0, 0, Some(80), 0)),
    ("1AAD", sz(4, 0, 0, Some(80), 0)),
    ("1AAE", sz(4, 0, 0, Some(156), 0)),
    ("1AAF", sz(4, 4, 0, Some(8), 0)),
    ("1AAG", sz(4, 0, 0, Some(36), 0)),
    ("1AAH", sz(4, 0, 0, Some(100), 0)),
    ("1AAI", sz(4, 0, 0, Some(48), 0)),
    ("1AAJ", sz(4, 0, 0, Some(48), 0)),
    ("1AAK", sz(4, 0, 0, Some(4), 0)),
    ("1AAL", sz(4, 0, 0, Some(8), 0)),
    ("1AAM", sz(4, 0, 0, Some(8), 0)),
    ("1AAN", sz(4, 8, 0, Some(12), 0)),
    ("4A", sz(2, 2, 0, None, 0)),
    ("5A", sz(2, 2, 0, None, 1)),
    ("6A", sz(2, 2, 0, None, 2)),
    ("7AAA", sz(4, 4, 0, None, 0)),
    ("8AAA", sz(4, 4, 0, None, 1)),
    ("9AAA", sz(4, 4, 0, None, 2)),
    ("4B", sz(2, 2, 0, None, 0)),
    ("5B", sz(2, 2, 0, None, 1)),
    ("6B", sz(2, 2, 0, None, 2)),
    ("7AAB", sz(4, 4, 0, None, 0)),
    ("8AAB", sz(4, 4, 0, None, 1)),
    ("9AAB", sz(4, 4, 0, None, 2)),
    ("4C", sz(2, 2, 0, None, 0)),
    ("5C", sz(2, 2, 0, None, 1)),
    ("6C", sz(2, 2, 0, None, 2)),
    ("7AAC", sz(4, 4, 0, None, 0)),
    ("8AAC", sz(4, 4, 0, None, 1)),
    ("9AAC", sz(4, 4, 0, None, 2)),
];
