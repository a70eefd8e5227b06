//! cayley builds the multiplication tables of geometric (Clifford) algebras.
//!
//! Describe an algebra by its [VectorSpace]: a number of basis vectors and what each squares to
//! (`1`, `-1`, or `0` for a null direction).
//! Pick a [BladeBasis], either generated in canonical order or listed by hand,
//! and [MultiplicationTables] will work out the geometric, inner and outer products
//! of every pair of basis blades, along with reverse, dual, and involution tables.
//! A runtime multivector type can then multiply by table lookup
//! instead of repeating the [blade algebra](algebraic_ops) at every call.
//!
//! ```
//! use std::sync::Arc;
//! use cayley::{Blade, BladeBasis, MultiplicationTables, VectorSpace};
//!
//! let space = Arc::new(VectorSpace::diagonal(vec![1., 1., 1.]).unwrap());
//!
//! // Bivectors listed cyclically, as is customary in 3D
//! let basis = BladeBasis::from_blades(
//!     &space,
//!     [
//!         Blade::scalar(&space, 1.),
//!         Blade::new(&space, 1., [1]),
//!         Blade::new(&space, 1., [2]),
//!         Blade::new(&space, 1., [3]),
//!         Blade::new(&space, 1., [2, 3]).with_name("e23"),
//!         Blade::new(&space, 1., [3, 1]).with_name("e31"),
//!         Blade::new(&space, 1., [1, 2]).with_name("e12"),
//!         Blade::new(&space, 1., [1, 2, 3]).with_name("I"),
//!     ],
//! )
//! .unwrap();
//!
//! let tables = MultiplicationTables::build(basis).unwrap();
//!
//! // e1 e2 = e12, the 7th basis blade
//! assert_eq!(tables.geometric_product()[(1, 2)], 7);
//! // e2 e1 = -e12
//! assert_eq!(tables.geometric_product()[(2, 1)], -7);
//! // e12 e12 = -1
//! assert_eq!(tables.geometric_product()[(6, 6)], -1);
//! ```
//!
//! cayley is generic over the [scalar] datatype of blade factors,
//! and can be used with `f32`, `f64`, or the signed integers.
//!
//! The `registry` feature (on by default) provides a [Registry]
//! for sharing built tables across threads.

pub mod algebraic_ops;
pub mod scalar;

mod basis;
mod blade;
mod combinations;
mod error;
#[cfg(feature = "registry")]
mod registry;
mod space;
mod table;


pub use basis::BladeBasis;
pub use blade::Blade;
pub use combinations::{binomial, combinations};
pub use error::{Error, Result};
#[cfg(feature = "registry")]
pub use registry::Registry;
pub use space::{Diagonal, Signature, VectorSpace, MAX_DIMENSION};
pub use table::{MultiplicationTables, Precomputed};
