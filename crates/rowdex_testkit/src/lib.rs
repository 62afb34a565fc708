//! # Rowdex Testkit
//!
//! Test utilities for rowdex.
//!
//! This crate provides:
//! - Canned datasets and dictionary fixtures
//! - Property-based test generators using proptest
//! - Naive reference implementations used as oracles
//! - Cross-index integration test helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rowdex_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_fixture() {
//!     let index = loaded_dictionary();
//!     assert!(index.contains("government"));
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;
pub mod oracle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
    pub use crate::oracle::*;
}

pub use fixtures::*;
pub use generators::*;
pub use integration::*;
pub use oracle::*;
