//! The tools module provides the helpers around the Shannon-Fano codec.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count and probability model of the input.
//!
pub mod cli;
pub mod freq_count;
