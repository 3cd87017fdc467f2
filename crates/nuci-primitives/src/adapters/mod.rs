//! Mappings between the crate's value types and host framework types.
//!
//! Each host is behind a cargo feature of the same name. Mappings are
//! componentwise copies: lossless pairs are `From` impls, anything that
//! truncates or clamps is a named function.

#[cfg(feature = "mint")]
pub mod mint;
#[cfg(feature = "wgpu")]
pub mod wgpu;
#[cfg(feature = "winit")]
pub mod winit;
