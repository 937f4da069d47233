//! Shared numeric helpers used across indicators and scorers.

pub mod math;
