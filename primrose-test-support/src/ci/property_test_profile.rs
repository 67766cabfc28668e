//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork
//! setting through this module so that one environment variable tunes them
//! all.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const PRIMROSE_PBT_FORK_ENV_KEY: &str = "PRIMROSE_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment with the given defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use primrose_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile from an arbitrary key lookup.
    ///
    /// Invalid overrides are logged at `warn` and replaced by the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use primrose_test_support::ci::property_test_profile::{
    ///     PROGTEST_CASES_ENV_KEY, ProptestRunProfile,
    /// };
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == PROGTEST_CASES_ENV_KEY).then(|| "8".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 8);
    /// ```
    #[must_use]
    pub fn from_lookup<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cases = Override::new(PROGTEST_CASES_ENV_KEY, parse_cases).resolve(&lookup, default_cases);
        let fork = Override::new(PRIMROSE_PBT_FORK_ENV_KEY, parse_bool).resolve(&lookup, default_fork);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

struct Override<T> {
    key: &'static str,
    parse: fn(&str) -> Result<T, &'static str>,
}

impl<T> Override<T> {
    fn new(key: &'static str, parse: fn(&str) -> Result<T, &'static str>) -> Self {
        Self { key, parse }
    }

    fn resolve(&self, lookup: impl Fn(&str) -> Option<String>, default: T) -> T {
        let Some(raw) = lookup(self.key) else {
            return default;
        };
        (self.parse)(&raw).unwrap_or_else(|reason| {
            tracing::warn!(
                env = self.key,
                raw = %raw,
                reason,
                "invalid property-test profile override; using default",
            );
            default
        })
    }
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("cases must be a positive integer"),
    }
}

fn parse_bool(raw: &str) -> Result<bool, &'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off"),
    }
}
