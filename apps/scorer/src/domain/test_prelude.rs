//! Shared configuration for property-based tests.

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    ProptestConfig::with_cases(256)
}
