//! Shared constants for test configuration.

/// Signing secret used by tests that issue and verify tokens. Not a real
/// credential.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Plaintext password used for every fixture user.
pub static TEST_PASSWORD: &str = "correct horse battery staple";
