//! # divsubset
//!
//! Brute-force search for a subset of `n` integers whose sum is divisible
//! by `n`.
//!
//! Every non-empty subset is tried as a bitmask; the numerically largest
//! qualifying mask wins and is reported as 1-based element positions.
//!
//! ```
//! use divsubset::{check, Instance};
//!
//! let instance = Instance::parse("3\n1 2 4\n").unwrap();
//! let solution = instance.solve();
//! assert_eq!(solution.to_line(), "2 3 \n");
//! check(&instance, &solution).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`search`]: the exhaustive mask search.
//! - [`instance`]: plain-text and JSON input/output forms.
//! - [`checker`]: validation of a solver's answer.
//!
//! The search is `O(2^n * n)`; inputs are capped at [`search::MAX_LEN`]
//! elements so masks fit in a `u64`, though anything much past 25 elements
//! is impractical.

#![forbid(unsafe_code)]

pub mod checker;
pub mod instance;
pub mod search;

pub use checker::check;
pub use instance::{Instance, Solution};
pub use search::{best_mask, solve, Mask};
