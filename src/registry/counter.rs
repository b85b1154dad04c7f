//! Count ("counter") code registry, genus version 1.0.
//!
//! Count codes delimit and annotate groups of composed-stream elements.
//! Their size tables are version-qualified; this module holds the 1.0
//! tables. New genus versions add further `COUNTER_SIZES_V*` tables without
//! disturbing this one.

use crate::schema::CounterSizage;

/// Counter codes, `(name, code)`, in definition order.
pub const COUNTER_CODES: &[(&str, &str)] = &[
    ("ControllerIdxSigs", "-A"),
    ("WitnessIdxSigs", "-B"),
    ("NonTransReceiptCouples", "-C"),
    ("TransReceiptQuadruples", "-D"),
    ("FirstSeenReplayCouples", "-E"),
    ("TransIdxSigGroups", "-F"),
    ("SealSourceCouples", "-G"),
    ("TransLastIdxSigGroups", "-H"),
    ("SealSourceTriples", "-I"),
    ("SadPathSigGroups", "-J"),
    ("RootSadPathSigGroups", "-K"),
    ("PathedMaterialGroup", "-L"),
    ("BigPathedMaterialGroup", "-0L"),
    ("AttachmentGroup", "-V"),
    ("BigAttachmentGroup", "-0V"),
    ("ESSRPayloadGroup", "-Z"),
    ("BigESSRPayloadGroup", "-0Z"),
    ("KERIACDCGenusVersion", "--AAA"),
];

const fn sz(hs: u32, ss: u32, fs: u32) -> CounterSizage {
    CounterSizage { hs, ss, fs }
}

/// Size schemas keyed by counter code, genus version 1.0.
pub const COUNTER_SIZES_V1_0: &[(&str, CounterSizage)] = &[
    ("-A", sz(2, 2, 4)),
    ("-B", sz(2, 2, 4)),
    ("-C", sz(2, 2, 4)),
    ("-D", sz(2, 2, 4)),
    ("-E", sz(2, 2, 4)),
    ("-F", sz(2, 2, 4)),
    ("-G", sz(2, 2, 4)),
    ("-H", sz(2, 2, 4)),
    ("-I", sz(2, 2, 4)),
    ("-J", sz(2, 2, 4)),
    ("-K", sz(2, 2, 4)),
    ("-L", sz(2, 2, 4)),
    ("-0L", sz(3, 5, 8)),
    ("-V", sz(2, 2, 4)),
    ("-0V", sz(3, 5, 8)),
    ("-Z", sz(2, 2, 4)),
    ("-0Z", sz(3, 5, 8)),
    ("--AAA", sz(5, 3, 8)),
];
