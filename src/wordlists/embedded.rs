//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, one per length.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
