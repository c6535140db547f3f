//! Math Library Core
//!
//! Numeric primitives shared by the physics, rendering and movement-prediction code
//! of a real-time simulation: generic scalar helpers, component-wise operations on
//! `float[3]` vectors, and the fixed-layout value types native consumers exchange.
//!
//! ## Contracts
//!
//! - Every operation is total: NaN and infinity propagate by IEEE-754 rules
//! - No state, no allocation, no I/O; safe to call from any thread
//! - Output vectors are written in full; inputs are never mutated
//! - Zero tests use exact equality, never an epsilon

// Generic min/max/clamp and byte-order reversal
pub mod scalar;

// float[3] / float[4] vector operations
pub mod vector;

// Fixed16 and the DLong reinterpretation cell
pub mod layout;

// nalgebra conversions for simulation code
pub mod interop;

pub use interop::{from_vector3, from_vector4, to_vector3, to_vector4};
pub use layout::{DLong, Fixed16};
pub use scalar::{byte_swap, clamp, max, min};
pub use vector::{
    added, averaged, multiply_added, negated, scaled, subtracted, vector_add, vector_average,
    vector_clear, vector_copy, vector_inverse, vector_is_zero, vector_ma, vector_negate,
    vector_scale, vector_subtract, Vec3, Vec4, VecT,
};

/// Pi as a double, exported for downstream angle code.
pub const M_PI: f64 = std::f64::consts::PI;
