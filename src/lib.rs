#![no_std]
#[cfg(feature = "std")]
extern crate std;

pub mod frame;
pub mod transport;

#[cfg(feature = "master")]
pub mod master;
