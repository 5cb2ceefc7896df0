//! `xstools` is a toolkit of small libraries for working with evaluated
//! nuclear cross section data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use xstools_format as format;

#[cfg(feature = "endf")]
#[cfg_attr(docsrs, doc(cfg(feature = "endf")))]
#[doc(inline)]
pub use xstools_endf as endf;
