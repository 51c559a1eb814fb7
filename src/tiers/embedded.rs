//! Embedded tier exception table
//!
//! Compiled into the binary at build time from `data/tier_exceptions.txt`.

include!(concat!(env!("OUT_DIR"), "/tier_exceptions.rs"));
