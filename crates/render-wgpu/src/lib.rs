//! wgpu backend for the stripe demo.
//!
//! One pipeline built from one embedded WGSL module, and one uniform
//! buffer, shared by every drawable; per-object model matrices travel as
//! instance vertex data.
//!
//! # Invariants
//! - The renderer never mutates controller state.
//! - Exactly one shader pipeline and uniform buffer exist.
//! - Meshes are uploaded lazily the first time their object key appears.

mod gpu;
mod shaders;

pub use gpu::StripeRenderer;
