//! Array backends
//!
//! An array carries redshifts in and physical quantities out. The layer never
//! looks inside one: it only multiplies two arrays of the same backend
//! elementwise (density parameter × critical density).
//!
//! Every Rust type implementing [`Array`] is a member of exactly one backend,
//! named by [`Array::BACKEND`]. Broadcasting and dtype rules belong to the
//! backend.

use std::fmt;

/// Backend name shared by the scalar and fixed-size array impls of this crate.
pub const CORE_BACKEND: &str = "core";

/// Numeric container bound to one array backend
pub trait Array: Clone + fmt::Debug + Send + Sync + 'static {
    /// Name of the backend this array type belongs to.
    const BACKEND: &'static str;

    /// Elementwise product of two arrays of the same backend.
    fn product(&self, rhs: &Self) -> Self;
}

impl Array for f64 {
    const BACKEND: &'static str = CORE_BACKEND;

    #[inline]
    fn product(&self, rhs: &Self) -> Self {
        self * rhs
    }
}

impl Array for f32 {
    const BACKEND: &'static str = CORE_BACKEND;

    #[inline]
    fn product(&self, rhs: &Self) -> Self {
        self * rhs
    }
}

impl<const N: usize> Array for [f64; N] {
    const BACKEND: &'static str = CORE_BACKEND;

    #[inline]
    fn product(&self, rhs: &Self) -> Self {
        std::array::from_fn(|i| self[i] * rhs[i])
    }
}

impl<const N: usize> Array for [f32; N] {
    const BACKEND: &'static str = CORE_BACKEND;

    #[inline]
    fn product(&self, rhs: &Self) -> Self {
        std::array::from_fn(|i| self[i] * rhs[i])
    }
}
