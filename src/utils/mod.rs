//! Utility functions for comparing and generating signals.
//!
//! # Modules
//!
//! - [`comparison`] - Distortion metrics (MSE, SNR) and channel averaging
//! - [`generation`] - Test signal generation

pub mod comparison;
pub mod generation;

pub use comparison::*;
pub use generation::*;
