//! Shared test utilities for `voraz-core`.

use proptest::test_runner::Config as ProptestConfig;
use voraz_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `PROPTEST_CASES` and
/// `VORAZ_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
