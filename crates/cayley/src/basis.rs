//! Ordered sets of basis blades
//!
//! The position of a blade in a [BladeBasis] is its index in every table built from it,
//! so insertion order is significant.

use core::ops::Index;
use std::sync::Arc;

use crate::blade::Blade;
use crate::combinations::combinations;
use crate::error::{Error, Result};
use crate::scalar::Ring;
use crate::space::VectorSpace;

#[derive(Clone, Debug)]
pub struct BladeBasis<T> {
    space: Arc<VectorSpace<T>>,
    blades: Vec<Blade<T>>,
}

impl<T: Ring> BladeBasis<T> {
    pub fn new(space: &Arc<VectorSpace<T>>) -> Self {
        BladeBasis {
            space: space.clone(),
            blades: vec![],
        }
    }

    /// Build a basis from a hand-written list, e.g. with named bivectors `e23, e31, e12`
    pub fn from_blades(
        space: &Arc<VectorSpace<T>>,
        blades: impl IntoIterator<Item = Blade<T>>,
    ) -> Result<Self> {
        let mut basis = Self::new(space);
        for blade in blades {
            basis.push(blade)?;
        }
        Ok(basis)
    }

    /// The canonical basis of `space`: grade by grade,
    /// lexicographic within each grade, every blade with factor 1.
    ///
    /// Blades are named after their indices, e.g. `e13`; the scalar gets the bare prefix.
    pub fn generate(space: &Arc<VectorSpace<T>>) -> Result<Self> {
        let mut basis = Self::new(space);
        for grade in 0..=space.dimension() {
            for components in combinations(space.dimension(), grade, space.first_index())? {
                let name: String = components.iter().map(|e| e.to_string()).collect();
                let blade = Blade::new(space, T::one(), components)
                    .with_name(format!("{}{}", space.name(), name));
                basis.blades.push(blade);
            }
        }
        log::trace!("generated {} basis blades", basis.len());
        Ok(basis)
    }

    /// Append a blade.
    ///
    /// Fails on the zero blade, or on a blade already present up to sign.
    pub fn push(&mut self, blade: Blade<T>) -> Result<()> {
        debug_assert!(Arc::ptr_eq(&self.space, blade.space()));
        if blade.is_zero() {
            return Err(Error::ZeroBlade);
        }
        match self.find(&blade) {
            0 => {
                self.blades.push(blade);
                Ok(())
            }
            r => Err(Error::DuplicateBlade {
                position: r.unsigned_abs() as usize - 1,
            }),
        }
    }

    /// The signed, 1-based position of `blade` in the basis.
    ///
    /// The sign tells whether `blade` is an even or odd permutation of the basis entry.
    /// Returns `0` if the blade is not in the basis. Any grade-zero blade,
    /// including the zero blade, is found at the position of the scalar.
    pub fn find(&self, blade: &Blade<T>) -> i32 {
        self.blades
            .iter()
            .enumerate()
            .find_map(|(i, entry)| match entry.signed_eq(blade) {
                0 => None,
                sign => Some((i as i32 + 1) * sign),
            })
            .unwrap_or(0)
    }

    /// The entries of grade `grade`, in basis order
    pub fn of_grade(&self, grade: usize) -> impl Iterator<Item = &Blade<T>> {
        self.blades.iter().filter(move |b| b.grade() == grade)
    }

    /// The sum of the factors of all grade-zero entries
    pub fn scalar(&self) -> T {
        self.of_grade(0).fold(T::zero(), |acc, b| acc + b.factor())
    }

    /// Whether the basis spans the whole algebra of its space
    pub fn is_complete(&self) -> bool {
        self.len() == self.space.algebra_dimension()
    }

    /// Check the preconditions for building tables:
    /// `2^dimension` entries with the scalar first.
    ///
    /// Entries are distinct by construction.
    pub fn validate(&self) -> Result<()> {
        if !self.is_complete() {
            return Err(Error::IncompleteBasis {
                expected: self.space.algebra_dimension(),
                found: self.len(),
            });
        }
        match self.blades.first() {
            Some(first) if first.grade() != 0 => Err(Error::ScalarNotFirst {
                grade: first.grade(),
            }),
            _ => Ok(()),
        }
    }
}

impl<T> BladeBasis<T> {
    pub fn space(&self) -> &Arc<VectorSpace<T>> {
        &self.space
    }

    pub fn len(&self) -> usize {
        self.blades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blades.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Blade<T>> {
        self.blades.get(position)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Blade<T>> {
        self.blades.iter()
    }
}

impl<T> Index<usize> for BladeBasis<T> {
    type Output = Blade<T>;
    fn index(&self, position: usize) -> &Blade<T> {
        &self.blades[position]
    }
}

impl<'a, T> IntoIterator for &'a BladeBasis<T> {
    type Item = &'a Blade<T>;
    type IntoIter = core::slice::Iter<'a, Blade<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.blades.iter()
    }
}
