//! Greedy hyper-volume subset selection (gHSS) for two and three objectives.
//!
//! Given a set of points, where all objectives are minimised, and a reference point, the crate
//! selects a subset of `k` points one at a time. At each step the point adding the most
//! hyper-volume to the points already selected is picked. The marginal contributions of the
//! remaining points are updated incrementally after each selection instead of being calculated
//! from scratch.
//!
//! The crate is organised as follows:
//! - [`algorithms`]: the selection ([`algorithms::GreedyHSS`] and [`algorithms::greedy_hss`])
//!   and its result ([`algorithms::SubsetSelection`]).
//! - [`metrics`]: exact hyper-volume calculations used to verify the selection.
//! - [`io`]: reading point sets from files, printing and exporting the selections.
//! - [`core`]: the error type.
//! - [`utils`]: vector utilities.
//!
//! # Example
//! ```
//! use greedy_hss::algorithms::greedy_hss;
//! use greedy_hss::metrics::hyper_volume;
//!
//! let points = vec![
//!     vec![1.0, 1.0, 3.0],
//!     vec![1.0, 3.0, 1.0],
//!     vec![3.0, 1.0, 1.0],
//!     vec![2.0, 2.0, 2.0],
//! ];
//! let reference_point = [4.0, 4.0, 4.0];
//! let selection = greedy_hss(&points, &reference_point, 2).unwrap();
//!
//! let subset = selection.subset(&points).unwrap();
//! let expected = hyper_volume(&subset, &reference_point).unwrap();
//! assert!((selection.hyper_volume - expected).abs() < 1e-12);
//! ```
pub mod algorithms;
pub mod core;
pub mod io;
pub mod metrics;
pub mod utils;
