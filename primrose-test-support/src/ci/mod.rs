//! Helpers for tuning test suites from CI environment variables.

pub mod property_test_profile;
