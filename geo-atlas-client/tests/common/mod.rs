//! Shared helpers for the live API tests

#![allow(dead_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use geo_atlas_client::{GeoApiClient, RemoteError};

/// Environment variable naming the API origin used by the live tests.
pub const API_ENV: &str = "GEO_ATLAS_TEST_API";

/// Skips the test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_api {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: {} is not set", $var);
                return;
            }
        )+
    };
}

/// Asserts that a `Result` is `Ok` and unwraps it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client for the API named by [`API_ENV`].
pub fn client() -> Result<GeoApiClient, RemoteError> {
    let origin = std::env::var(API_ENV)
        .map_err(|_| RemoteError::transport(format!("{API_ENV} is not set")))?;
    GeoApiClient::new(origin)
}

/// Name unlikely to collide with existing data.
pub fn unique_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("_test-{prefix}-{:08x}", nanos ^ std::process::id())
}

/// Two-letter code derived from a name, for country fixtures.
pub fn unique_code(name: &str) -> String {
    let sum: u32 = name.bytes().map(u32::from).sum();
    let a = char::from(b'A' + (sum % 26) as u8);
    let b = char::from(b'A' + ((sum / 26) % 26) as u8);
    format!("{a}{b}")
}
