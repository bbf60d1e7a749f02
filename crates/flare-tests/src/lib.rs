//! Integration tests for the lens-flare crates.
//!
//! End-to-end checks that shapes, canvas and color conversion agree with
//! each other when used together.
