//! Indexed-domain signal container for discrete-time DSP.
//!
//! A [`Signal`] stores the samples of a discrete-time signal `x[n]` whose
//! logical domain is an arbitrary inclusive range `[n_min, n_max]` of signed
//! indices, not necessarily starting at zero. Logical reads through
//! [`Signal::at`] translate to storage and zero-extend outside the domain;
//! physical writes go through plain indexing, `signal[i]`, with no
//! translation. Everything downstream (convolution, correlation, windowing)
//! relies on that mapping staying consistent, so it lives in one place:
//! [`Domain`].
//!
//! ```
//! use dse_signal::SignalR;
//!
//! let mut x = SignalR::from_domain(-3, 2).unwrap();
//! x[0] = 1.0; // physical slot 0 is x[-3]
//! assert_eq!(x.at(-3), 1.0);
//! assert_eq!(x.at(5), 0.0); // implicitly zero outside the domain
//! ```

mod domain;
mod error;
mod signal;

pub use crate::domain::Domain;
pub use crate::error::{Result, SignalError};
pub use crate::signal::Signal;

use num::Complex;

/// Nominal time of the `n_min` sample when none is given.
pub const DEFAULT_T0: f64 = 0.0;
/// Sampling interval when none is given.
pub const DEFAULT_TS: f64 = 1.0;
/// Comparison tolerance carried per signal when none is given. The container
/// stores it for downstream comparisons and never interprets it itself.
pub const DEFAULT_EPS: f64 = 1e-12;

/// Real-valued signal.
pub type SignalR = Signal<f64>;
/// Complex-valued signal.
pub type SignalC = Signal<Complex<f64>>;
