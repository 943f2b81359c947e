//! Filesystem utilities for siteutils.
//!
//! Provides the atomic write used by create-mode document generation, so a
//! failed run never leaves a partial file behind.

mod atomic;

pub use atomic::atomic_write;
