//! Single basis blades and their algebra
//!
//! A [Blade] is a scalar factor times an ordered list of distinct basis vectors,
//! e.g. `-2 e3^e1`. The order matters only up to sign:
//! `e3^e1` and `e1^e3` are the same blade with opposite orientation,
//! which [signed_eq](Blade::signed_eq) reports.
//!
//! Blades are kept normalized: a zero factor always comes with grade zero,
//! and a component list with repeated or out-of-range indices collapses to the zero blade.
//! Use [Blade::checked] to be told about malformed input instead.

use core::fmt;
use core::ops::{Mul, Neg};
use std::sync::Arc;

use crate::algebraic_ops::*;
use crate::error::{Error, Result};
use crate::scalar::{Recip, Ring};
use crate::space::VectorSpace;

#[derive(Clone, Debug)]
pub struct Blade<T> {
    space: Arc<VectorSpace<T>>,
    factor: T,
    components: Vec<usize>,
    name: Option<String>,
}

impl<T> Blade<T> {
    /// Check that `components` are distinct basis vector indices of `space`
    pub fn validate(space: &VectorSpace<T>, components: &[usize]) -> Result<()> {
        for (i, &index) in components.iter().enumerate() {
            if !space.contains(index) {
                return Err(Error::ComponentOutOfRange {
                    index,
                    first: space.first_index(),
                    last: space.last_index(),
                });
            }
            if components[..i].contains(&index) {
                return Err(Error::RepeatedComponent { index });
            }
        }
        Ok(())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn grade(&self) -> usize {
        self.components.len()
    }

    /// The basis vector indices, in multiplication order
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    pub fn space(&self) -> &Arc<VectorSpace<T>> {
        &self.space
    }

    /// Whether the other blade lives in the same vector space.
    ///
    /// Binary operations between blades of different spaces are meaningless.
    pub fn same_space(&self, other: &Blade<T>) -> bool {
        Arc::ptr_eq(&self.space, &other.space)
    }

    /// Compare the basis vectors of two blades, ignoring their factors.
    ///
    /// Returns `1` if one is an even permutation of the other,
    /// `-1` if it is an odd permutation, and `0` if they are different blades.
    /// Any two grade-zero blades compare as `1`.
    pub fn signed_eq(&self, other: &Blade<T>) -> i32 {
        if self.grade() != other.grade() {
            return 0;
        }

        let mut a = self.components.clone();
        let mut b = other.components.clone();
        let mut sign = 1;
        while let Some(&first) = a.first() {
            let Some(j) = b.iter().position(|&e| e == first) else {
                return 0;
            };
            // Bringing b[j] to the front takes j transpositions
            if j % 2 == 1 {
                sign = -sign;
            }
            a.remove(0);
            b.remove(j);
        }
        sign
    }
}

impl<T: Ring> Blade<T> {
    /// Construct a blade, silently normalizing malformed components to the zero blade
    pub fn new(space: &Arc<VectorSpace<T>>, factor: T, components: impl Into<Vec<usize>>) -> Self {
        let components = components.into();
        let mut blade = Blade {
            space: space.clone(),
            factor,
            components: components.clone(),
            name: None,
        };
        if blade.check() {
            log::trace!("normalized blade {:?} to zero", components);
        }
        blade
    }

    /// Construct a blade, failing if the components are repeated or out of range.
    ///
    /// A well-formed blade with a zero factor is still returned;
    /// see [is_zero](Blade::is_zero).
    pub fn checked(
        space: &Arc<VectorSpace<T>>,
        factor: T,
        components: impl Into<Vec<usize>>,
    ) -> Result<Self> {
        let components = components.into();
        Self::validate(space, &components)?;
        Ok(Self::new(space, factor, components))
    }

    pub fn scalar(space: &Arc<VectorSpace<T>>, factor: T) -> Self {
        Self::new(space, factor, vec![])
    }

    pub fn zero(space: &Arc<VectorSpace<T>>) -> Self {
        Self::scalar(space, T::zero())
    }

    /// The unit blade spanning every basis vector in index order
    pub fn pseudoscalar(space: &Arc<VectorSpace<T>>) -> Self {
        Self::new(
            space,
            T::one(),
            (space.first_index()..=space.last_index()).collect::<Vec<_>>(),
        )
    }

    pub fn factor(&self) -> T {
        self.factor
    }

    pub fn is_zero(&self) -> bool {
        self.factor == T::zero()
    }

    /// Sum of two blades that are equal up to sign, or `None` if they differ
    pub fn checked_add(&self, other: &Blade<T>) -> Option<Blade<T>> {
        self.accumulate(other, 1)
    }

    /// Difference of two blades that are equal up to sign, or `None` if they differ
    pub fn checked_sub(&self, other: &Blade<T>) -> Option<Blade<T>> {
        self.accumulate(other, -1)
    }

    fn accumulate(&self, other: &Blade<T>, direction: isize) -> Option<Blade<T>> {
        let sign = self.signed_eq(other);
        if sign == 0 {
            return None;
        }
        let mut sum = self.clone();
        sum.factor = self.factor + T::from_integer(direction * sign as isize) * other.factor;
        sum.check();
        Some(sum)
    }

    /// Restore the blade invariants, returning whether anything changed
    fn check(&mut self) -> bool {
        if self.factor == T::zero() {
            if self.components.is_empty() {
                return false;
            }
            self.components.clear();
            return true;
        }
        if Self::validate(&self.space, &self.components).is_err() {
            self.factor = T::zero();
            self.components.clear();
            return true;
        }
        false
    }

    fn derived(&self, factor: T, components: Vec<usize>) -> Blade<T> {
        Blade::new(&self.space, factor, components)
    }
}

fn parity_sign<T: Ring>(swaps: usize) -> T {
    match swaps % 2 {
        0 => T::one(),
        _ => -T::one(),
    }
}

/// Cancel the basis vectors shared by `a` and `b`,
/// returning the product of their squares and the reordering signs.
///
/// Matches are taken left-major: the first component of `a` that appears in `b`,
/// then the scan starts over.
fn contract<T: Ring>(space: &VectorSpace<T>, a: &mut Vec<usize>, b: &mut Vec<usize>) -> T {
    let mut factor = T::one();
    while let Some((i, j)) = a
        .iter()
        .enumerate()
        .find_map(|(i, e)| b.iter().position(|f| f == e).map(|j| (i, j)))
    {
        // Move a[i] to the back of a and b[j] to the front of b
        let swaps = a.len() - i - 1 + j;
        factor = factor * parity_sign::<T>(swaps) * space.signature(a[i]);
        a.remove(i);
        b.remove(j);
    }
    factor
}

impl<'a, T: Ring> GeometricProduct<&'a Blade<T>> for &'a Blade<T> {
    type Output = Blade<T>;
    fn geometric_product(self, r: &'a Blade<T>) -> Blade<T> {
        debug_assert!(self.same_space(r));
        let mut a = self.components.clone();
        let mut b = r.components.clone();
        let factor = self.factor * r.factor * contract(&self.space, &mut a, &mut b);
        a.append(&mut b);
        self.derived(factor, a)
    }
}

impl<'a, T: Ring> Dot<&'a Blade<T>> for &'a Blade<T> {
    type Output = Blade<T>;
    fn dot(self, r: &'a Blade<T>) -> Blade<T> {
        debug_assert!(self.same_space(r));
        match (self.grade(), r.grade()) {
            (0, 0) => return self.derived(self.factor * r.factor, vec![]),
            (0, _) | (_, 0) => return Blade::zero(&self.space),
            _ => {}
        }

        let mut a = self.components.clone();
        let mut b = r.components.clone();
        let sign = contract(&self.space, &mut a, &mut b);
        if !a.is_empty() && !b.is_empty() {
            // Neither operand was absorbed into the other
            return Blade::zero(&self.space);
        }
        a.append(&mut b);
        self.derived(self.factor * r.factor * sign, a)
    }
}

impl<'a, T: Ring> Wedge<&'a Blade<T>> for &'a Blade<T> {
    type Output = Blade<T>;
    fn wedge(self, r: &'a Blade<T>) -> Blade<T> {
        debug_assert!(self.same_space(r));
        if self.components.iter().any(|e| r.components.contains(e)) {
            return Blade::zero(&self.space);
        }
        let components = self
            .components
            .iter()
            .chain(r.components.iter())
            .copied()
            .collect();
        self.derived(self.factor * r.factor, components)
    }
}

impl<T: Ring> Reverse for &Blade<T> {
    type Output = Blade<T>;
    fn reverse(self) -> Blade<T> {
        let components = self.components.iter().rev().copied().collect();
        self.derived(self.factor, components)
    }
}

impl<T: Ring + Recip<Output = T>> Inverse for &Blade<T> {
    type Output = Result<Blade<T>>;
    fn inverse(self) -> Result<Blade<T>> {
        if self.is_zero() {
            return Err(Error::NotInvertible);
        }
        let components: Vec<usize> = self.components.iter().rev().copied().collect();
        let squares = components
            .iter()
            .fold(T::one(), |f, &e| f * self.space.signature(e));
        Ok(self.derived(squares * self.factor.recip(), components))
    }
}

impl<'a, T: Ring> Commutator<&'a Blade<T>> for &'a Blade<T> {
    type Output = Blade<T>;
    fn commutator(self, r: &'a Blade<T>) -> Blade<T> {
        let ab = self.geometric_product(r);
        let ba = r.geometric_product(self);
        match ab.checked_sub(&ba) {
            Some(c) => c,
            None => ab,
        }
    }
}

impl<'a, T: Ring> AntiCommutator<&'a Blade<T>> for &'a Blade<T> {
    type Output = Blade<T>;
    fn anti_commutator(self, r: &'a Blade<T>) -> Blade<T> {
        let ab = self.geometric_product(r);
        let ba = r.geometric_product(self);
        match ab.checked_add(&ba) {
            Some(c) => c,
            None => ab,
        }
    }
}

impl<'a, T: Ring> Join<&'a Blade<T>> for &'a Blade<T> {
    type Output = Blade<T>;
    fn join(self, r: &'a Blade<T>) -> Blade<T> {
        debug_assert!(self.same_space(r));
        let mut components = self.components.clone();
        components.extend(r.components.iter().filter(|e| !self.components.contains(e)));
        // The join only describes a subspace, so its magnitude is fixed to 1
        let factor = if components.is_empty() {
            T::zero()
        } else {
            T::one()
        };
        self.derived(factor, components)
    }
}

impl<'a, T: Ring + Recip<Output = T>> Meet<&'a Blade<T>> for &'a Blade<T> {
    type Output = Result<Blade<T>>;
    fn meet(self, r: &'a Blade<T>) -> Result<Blade<T>> {
        let join = self.join(r);
        let join_inverse = join.inverse()?;
        let a = self.geometric_product(&join_inverse);
        let b = r.geometric_product(&join_inverse);
        let meet = a.wedge(&b).geometric_product(&join);
        if meet.grade() == 0 {
            return Ok(Blade::zero(&self.space));
        }
        Ok(meet)
    }
}

impl<T: Ring> Neg for Blade<T> {
    type Output = Blade<T>;
    fn neg(mut self) -> Blade<T> {
        self.factor = -self.factor;
        self
    }
}

impl<T: Ring> Neg for &Blade<T> {
    type Output = Blade<T>;
    fn neg(self) -> Blade<T> {
        -self.clone()
    }
}

/// Scaling a blade by a number.
impl<T: Ring> Mul<T> for Blade<T> {
    type Output = Blade<T>;
    fn mul(mut self, r: T) -> Blade<T> {
        self.factor = self.factor * r;
        self.check();
        self
    }
}

impl<T: Ring> Mul<T> for &Blade<T> {
    type Output = Blade<T>;
    fn mul(self, r: T) -> Blade<T> {
        self.clone() * r
    }
}

macro_rules! impl_scalar_mul {
    ($type:ident) => {
        impl Mul<Blade<$type>> for $type {
            type Output = Blade<$type>;
            fn mul(self, r: Blade<$type>) -> Blade<$type> {
                r * self
            }
        }
    };
}

impl_scalar_mul!(f32);
impl_scalar_mul!(f64);
impl_scalar_mul!(i8);
impl_scalar_mul!(i16);
impl_scalar_mul!(i32);
impl_scalar_mul!(i64);
impl_scalar_mul!(i128);

/// Renders `factor(e1^e2)`, or `factor^name` for a named blade.
///
/// The alternate flag (`{:#}`) always spells out the basis vectors.
impl<T: fmt::Display> fmt::Display for Blade<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.factor)?;
        match self.name() {
            Some(name) if !f.alternate() => write!(f, "^{}", name),
            _ => {
                write!(f, "(")?;
                for (count, e) in self.components.iter().enumerate() {
                    if count > 0 {
                        write!(f, "^")?;
                    }
                    write!(f, "{}{}", self.space.name(), e)?;
                }
                write!(f, ")")
            }
        }
    }
}
