//! Pricing Module
//!
//! Selection price resolution (bundle discounts) and manual price
//! overrides. Everything here is a pure function of its inputs.

mod bundle;
pub mod money;
mod policy;
mod price_override;

pub use bundle::*;
pub use policy::*;
pub use price_override::*;
