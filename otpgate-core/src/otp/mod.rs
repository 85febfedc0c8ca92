//! One-time-password primitive
//!
//! Stateless HOTP/TOTP code derivation plus the Base32 secret codec.
//! Every operation is a pure function of its explicit inputs; time is
//! always passed in by the caller, which keeps the engine deterministic
//! and safe to call from any number of threads.

pub mod hotp;
pub mod secret;
pub mod totp;
