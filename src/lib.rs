//! `endftools` is a toolkit of fast and reliable libraries for reading
//! ENDF-6 nuclear data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[cfg(feature = "endf")]
#[cfg_attr(docsrs, doc(cfg(feature = "endf")))]
#[doc(inline)]
pub use endftools_endf as endf;
