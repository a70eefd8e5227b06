//! The vector space underlying an algebra
//!
//! A [VectorSpace] fixes the number of basis vectors, how they are numbered and named,
//! and what each of them squares to.
//! It is immutable once built and is shared (through an [Arc](std::sync::Arc))
//! by every blade, basis and table derived from it.

use core::fmt;

use crate::error::{Error, Result};
use crate::scalar::Ring;

/// The largest supported number of basis vectors.
///
/// The algebra has `2^dimension` basis blades and the product tables hold the square of that,
/// so this keeps signed table entries well inside `i32`.
pub const MAX_DIMENSION: usize = 16;

/// Provides the metric square of each basis vector.
///
/// `offset` counts from zero regardless of the space's [first index](VectorSpace::first_index).
/// Typical values are `1`, `-1`, and `0` (a null direction, as used by projective
/// and conformal algebras).
///
/// Any `Fn(usize) -> T` closure is a `Signature`:
///
/// ```
/// use cayley::VectorSpace;
///
/// // Minkowski space with the time axis last
/// let space = VectorSpace::<f64>::new(4, |offset: usize| if offset == 3 { -1. } else { 1. }).unwrap();
/// assert_eq!(space.signature(4), -1.);
/// ```
pub trait Signature<T>: Send + Sync {
    fn square(&self, offset: usize) -> T;
}

impl<T, F> Signature<T> for F
where
    F: Fn(usize) -> T + Send + Sync,
{
    fn square(&self, offset: usize) -> T {
        self(offset)
    }
}

/// A diagonal metric given as a list of squares, one per basis vector
#[derive(Clone, Debug, PartialEq)]
pub struct Diagonal<T>(pub Vec<T>);

impl<T: Ring + Send + Sync> Signature<T> for Diagonal<T> {
    fn square(&self, offset: usize) -> T {
        self.0.get(offset).copied().unwrap_or_default()
    }
}

/// A vector space of fixed dimension with a diagonal metric
pub struct VectorSpace<T> {
    id: u32,
    dimension: usize,
    first_index: usize,
    name: String,
    signature: Box<dyn Signature<T>>,
}

impl<T: Ring> VectorSpace<T> {
    /// A space of the given dimension whose basis vectors are numbered from 1 and named `e`
    pub fn new(dimension: usize, signature: impl Signature<T> + 'static) -> Result<Self> {
        if dimension == 0 || dimension > MAX_DIMENSION {
            return Err(Error::InvalidDimension { dimension });
        }
        Ok(VectorSpace {
            id: 0,
            dimension,
            first_index: 1,
            name: "e".to_owned(),
            signature: Box::new(signature),
        })
    }

    /// A space with one basis vector per entry of `squares`
    pub fn diagonal(squares: Vec<T>) -> Result<Self>
    where
        T: Send + Sync + 'static,
    {
        Self::new(squares.len(), Diagonal(squares))
    }

    /// The metric square of basis vector `index`.
    ///
    /// Indices outside of `first_index..first_index + dimension` square to zero.
    pub fn signature(&self, index: usize) -> T {
        match index.checked_sub(self.first_index) {
            Some(offset) if offset < self.dimension => self.signature.square(offset),
            _ => T::zero(),
        }
    }
}

impl<T> VectorSpace<T> {
    /// Number the basis vectors from `first_index` instead of 1.
    ///
    /// Fails if the last index would not fit in a `usize`.
    pub fn with_first_index(mut self, first_index: usize) -> Result<Self> {
        if first_index.checked_add(self.dimension).is_none() {
            return Err(Error::InvalidFirstIndex { first_index });
        }
        self.first_index = first_index;
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Tag the space with an id, e.g. to key it in a [Registry](crate::Registry)
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of basis vectors
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of basis blades in the algebra, `2^dimension`
    pub fn algebra_dimension(&self) -> usize {
        1 << self.dimension
    }

    pub fn first_index(&self) -> usize {
        self.first_index
    }

    /// The last valid basis vector index
    pub fn last_index(&self) -> usize {
        self.first_index + self.dimension - 1
    }

    /// Prefix used when naming basis vectors and blades
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.first_index..=self.last_index()).contains(&index)
    }
}

impl<T> fmt::Debug for VectorSpace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorSpace")
            .field("id", &self.id)
            .field("dimension", &self.dimension)
            .field("first_index", &self.first_index)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            VectorSpace::<f64>::diagonal(vec![]).unwrap_err(),
            Error::InvalidDimension { dimension: 0 }
        );
        assert!(VectorSpace::<f64>::new(MAX_DIMENSION + 1, |_: usize| 1.).is_err());
    }

    #[test]
    fn signature_follows_first_index() {
        let space = VectorSpace::diagonal(vec![0, 1, 1])
            .unwrap()
            .with_first_index(0)
            .unwrap();
        assert_eq!(space.signature(0), 0);
        assert_eq!(space.signature(2), 1);
        assert_eq!(space.signature(3), 0);
        assert_eq!(space.last_index(), 2);
        assert_eq!(space.algebra_dimension(), 8);
    }

    #[test]
    fn rejects_overflowing_first_index() {
        let space = VectorSpace::diagonal(vec![1., 1.]).unwrap();
        assert_eq!(
            space.with_first_index(usize::MAX).unwrap_err(),
            Error::InvalidFirstIndex {
                first_index: usize::MAX
            }
        );
        let space = VectorSpace::diagonal(vec![1., 1.]).unwrap();
        let space = space.with_first_index(usize::MAX - 2).unwrap();
        assert_eq!(space.last_index(), usize::MAX - 1);
        assert!(space.contains(usize::MAX - 1));
        assert!(!space.contains(usize::MAX));
    }
}
