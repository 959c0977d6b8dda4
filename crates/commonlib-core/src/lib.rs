//! # Commonlib Core
//!
//! Foundational types shared by the commonlib crates.
//!
//! - [`errors`]: HTTP-facing error type used by extractors that sit downstream
//!   of the authentication layer

pub mod errors;

pub use errors::AppError;
