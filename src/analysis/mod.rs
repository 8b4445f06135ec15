//! Analysis module for extracted datasets
//!
//! - Equal-width histogram binning

pub mod histogram;

pub use histogram::Histogram;
