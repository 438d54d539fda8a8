//! # Rayon Parallelism
//!
//! Batch-level parallel wrappers, enabled by the ``rayon`` feature.

mod rayon_assembler;

#[doc(inline)]
pub use rayon_assembler::ParallelRayonAssembler;
