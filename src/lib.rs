#![no_std]

extern crate alloc;

pub mod core;

pub use crate::core::convert::akp;
pub use crate::core::parameter::Parameter;
