//! End-to-end enrollment and login flow
//!
//! Drives the library the way the CLI does: generate a secret, enroll it
//! through the URI and the user store, then validate codes against the
//! stored copy.

use otpgate_core::enroll::build_uri;
use otpgate_core::otp::secret;
use otpgate_core::otp::totp::{totp, validate, TotpParams};
use otpgate_core::store::{JsonUserStore, User};
use tempfile::tempdir;

#[test]
fn enrollment_round_trips_through_the_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");
    let params = TotpParams::default();

    // Enrollment: fresh secret, persisted in its Base32 form
    let key = secret::generate();
    let encoded = secret::encode(&key);
    let uri = build_uri("Example Corp", "alice@example.com", &key, &params).unwrap();
    assert!(uri.contains(&format!("secret={}", encoded)));

    let mut store = JsonUserStore::open(&path);
    store
        .save(User::new(
            "alice@example.com".to_string(),
            "correct horse",
            encoded,
            true,
        ))
        .unwrap();

    // Login, fresh process: reload the store and decode the stored secret
    let store = JsonUserStore::open(&path);
    let user = store.find_by_email("alice@example.com").unwrap();
    assert!(user.verify_password("correct horse"));

    let stored_key = secret::decode(&user.totp_secret).unwrap();
    assert_eq!(stored_key, key);

    // A code computed from the stored copy verifies against the original
    let now = 1_700_000_000;
    let code = totp(&stored_key, now, &params).unwrap();
    assert!(validate(&key, code.expose(), now, &params, 1).unwrap());
}

#[test]
fn drift_window_tolerates_one_step_of_skew() {
    let params = TotpParams::default();
    let key = secret::generate();
    let now = 1_700_000_000;
    let step = u64::from(params.step_secs);

    let behind = totp(&key, now - step, &params).unwrap();
    let ahead = totp(&key, now + step, &params).unwrap();

    assert!(validate(&key, behind.expose(), now, &params, 1).unwrap());
    assert!(validate(&key, ahead.expose(), now, &params, 1).unwrap());
}

#[test]
fn foreign_secret_formats_still_enroll() {
    // Authenticator apps hand secrets around in mixed case, with spaces,
    // or with trailing padding; all must decode to the same key
    let key = secret::decode("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap();

    for variant in [
        "gezdgnbvgy3tqojqgezdgnbvgy3tqojq",
        "GEZD GNBV GY3T QOJQ GEZD GNBV GY3T QOJQ",
        "GezdGnbvGy3tQojqGezdGnbvGy3tQojq",
    ] {
        assert_eq!(secret::decode(variant).unwrap(), key, "variant {:?}", variant);
    }
}
