//! Financing Module
//!
//! Monthly payment calculation for installment loans and revolving accounts.

mod amortization;

pub use amortization::*;
