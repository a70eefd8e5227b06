//! Blade-level geometric algebra operations
//!
//! These are implemented on `&Blade<T>` so that operands are never consumed,
//! e.g. `a.wedge(&b)`.
//!
//! The products follow the conventions of the Cayley tables built from them:
//! `dot` is a contraction that vanishes whenever exactly one operand is a scalar,
//! and the commutators are not halved.

/// The reverse operator Ã
///
/// Reverses the order of the basis vectors in a blade.
/// Equivalent to a sign flip of `(-1)^(g(g-1)/2)` for a blade of grade `g`.
pub trait Reverse {
    type Output;
    fn reverse(self) -> Self::Output;
}

/// The inverse A⁻¹ under the geometric product
///
/// Fails with [NotInvertible](crate::Error::NotInvertible) on the zero blade.
pub trait Inverse {
    type Output;
    fn inverse(self) -> Self::Output;
}

/// The geometric product AB
///
/// Shared basis vectors contract to their metric square,
/// with a sign for each transposition needed to bring them together.
pub trait GeometricProduct<T> {
    type Output;
    fn geometric_product(self, r: T) -> Self::Output;
}

/// The wedge product from exterior algebra, A ∧ B
///
/// Zero when the operands share a basis vector.
pub trait Wedge<T> {
    type Output;
    fn wedge(self, r: T) -> Self::Output;
}

/// The inner product (contraction) A · B
///
/// Keeps only the part of the geometric product of grade `|grade(A) - grade(B)|`.
pub trait Dot<T> {
    type Output;
    fn dot(self, r: T) -> Self::Output;
}

/// The commutator product AB - BA
pub trait Commutator<T> {
    type Output;
    fn commutator(self, r: T) -> Self::Output;
}

/// The anti-commutator product AB + BA
pub trait AntiCommutator<T> {
    type Output;
    fn anti_commutator(self, r: T) -> Self::Output;
}

/// The join A ∪ B: the smallest subspace containing both operands
pub trait Join<T> {
    type Output;
    fn join(self, r: T) -> Self::Output;
}

/// The meet A ∩ B: the largest subspace common to both operands,
/// computed as `((A J⁻¹) ∧ (B J⁻¹)) J` where `J` is their [join](Join)
pub trait Meet<T> {
    type Output;
    fn meet(self, r: T) -> Self::Output;
}
