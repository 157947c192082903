//! Integration tests for the stoplight crates.
//!
//! End-to-end coverage of the generation contract: byte-identical
//! regeneration, config file round-trips, and the full pipeline from raw
//! log codes to written `.cube` cells.
