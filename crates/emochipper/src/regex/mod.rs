//! # Regex Utilities
//!
//! Word segmentation patterns that need look-around require the
//! [`fancy_regex`] crate; but naturally, this has performance costs.
//! We'd prefer the standard [`regex`] crate when patterns permit this.
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]

pub mod regex_wrapper;

#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, RegexWrapper, RegexWrapperPattern};
