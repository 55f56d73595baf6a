//! Property-based tests for matching and driving.
