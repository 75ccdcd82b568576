//! # nttcalc-ntt
//!
//! Number-theoretic transform over NTT-friendly primes: modular kernel,
//! in-place Cooley-Tukey transform, cyclic convolution and a reusable
//! buffer pool.

pub mod error;
pub mod memory_est;
pub mod modular;
pub mod modulus;
pub mod poly;
pub mod pool;
pub mod transform;

// Re-exports
pub use error::NttError;
pub use memory_est::{estimate_hybrid_memory, estimate_simple_memory};
pub use modular::{inv_mod, mul_mod, pow_mod};
pub use modulus::Modulus;
pub use poly::{cyclic_convolution, pointwise_multiply};
pub use pool::{BufferPool, PoolStats};
pub use transform::{forward, inverse, transform, Direction};
