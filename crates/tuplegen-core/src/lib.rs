//! Core of tuplegen: turns an arity range into `Split` trait impls for tuples.
//!
//! Each arity gets an ordered list of single-letter type parameters
//! ([`symbol::symbols`]), which is cut at its midpoint ([`split::split`]) and
//! rendered into a fixed impl template ([`emit`]). Generation settings live in
//! [`config::TuplegenConfig`].

pub mod config;
pub mod emit;
pub mod error;
pub mod split;
pub mod symbol;

pub use config::{ArityConfig, OutputConfig, TuplegenConfig};
pub use emit::{ArityRange, EmitOptions, SplitImpl, emit, render_trait_definition};
pub use error::GenError;
