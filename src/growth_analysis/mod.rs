//! Exports the growth rate computations for each algorithm complexity class, as well as the needed types to operate on them. See:
//!   - [growth]
//!   - [demos]
//!   - [types]

pub mod types;
pub mod growth;
pub mod demos;
