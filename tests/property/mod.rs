//! Property-based tests for listing layout and command applicability

mod applicability;
mod listing;
