pub mod dv;

// Re-exports so tests and users can import from `approaches::*` directly.
pub use dv::{DvMeasure, DvParams, DvTransferEntropy, Leaf, RootSplit};
