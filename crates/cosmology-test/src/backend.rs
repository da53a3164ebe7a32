//! Fixture array backends
//!
//! Fixtures compute in f64 and need to build, map and inspect arrays of any
//! backend they run over. `Lanes<N>` is a fixed-width backend distinct from the
//! core one, so two cosmologies can disagree on their namespace.

use cosmology_api::Array;

/// Backend name of [`Lanes`]
pub const LANES_BACKEND: &str = "lanes";

/// Elementwise access a fixture needs from its array type
pub trait Elementwise: Array {
    /// Array with every element set to `value`
    fn splat(value: f64) -> Self;

    /// Apply `f` to every element
    fn map(&self, f: impl Fn(f64) -> f64) -> Self;

    /// Combine two arrays of the same shape element by element
    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self;

    /// Elements as f64, in order
    fn values(&self) -> Vec<f64>;
}

impl Elementwise for f64 {
    #[inline]
    fn splat(value: f64) -> Self {
        value
    }

    #[inline]
    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        f(*self)
    }

    #[inline]
    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        f(*self, *other)
    }

    fn values(&self) -> Vec<f64> {
        vec![*self]
    }
}

impl Elementwise for f32 {
    #[inline]
    fn splat(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        f(f64::from(*self)) as f32
    }

    #[inline]
    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        f(f64::from(*self), f64::from(*other)) as f32
    }

    fn values(&self) -> Vec<f64> {
        vec![f64::from(*self)]
    }
}

impl<const N: usize> Elementwise for [f64; N] {
    #[inline]
    fn splat(value: f64) -> Self {
        [value; N]
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        std::array::from_fn(|i| f(self[i]))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        std::array::from_fn(|i| f(self[i], other[i]))
    }

    fn values(&self) -> Vec<f64> {
        self.to_vec()
    }
}

/// Fixed-width f64 array of the `lanes` backend
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lanes<const N: usize>(pub [f64; N]);

impl<const N: usize> From<[f64; N]> for Lanes<N> {
    fn from(values: [f64; N]) -> Self {
        Lanes(values)
    }
}

impl<const N: usize> Array for Lanes<N> {
    const BACKEND: &'static str = LANES_BACKEND;

    #[inline]
    fn product(&self, rhs: &Self) -> Self {
        Lanes(std::array::from_fn(|i| self.0[i] * rhs.0[i]))
    }
}

impl<const N: usize> Elementwise for Lanes<N> {
    #[inline]
    fn splat(value: f64) -> Self {
        Lanes([value; N])
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Lanes(std::array::from_fn(|i| f(self.0[i])))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Lanes(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    fn values(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}
