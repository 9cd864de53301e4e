//! Dense linear algebra on `ndarray`

pub mod svd;

pub use svd::{JacobiSvd, Svd};
