//! Cayley tables
//!
//! [MultiplicationTables] runs the blade algebra over every pair of basis blades once
//! and records where each product lands. An entry `r` in a product table means
//! "the product is `sign(r)` times basis blade `|r| - 1`", and `0` means the product vanishes.
//! Runtime multivector code can then multiply by table lookup.
//!
//! Square tables are indexed `[(left, right)]` with 0-based basis positions.

use core::fmt;

use nalgebra::{DMatrix, DVector};

use crate::algebraic_ops::*;
use crate::basis::BladeBasis;
use crate::blade::Blade;
use crate::error::{Error, Result};
use crate::scalar::{Recip, Ring};

/// Tables computed elsewhere, e.g. by [cayley_tables!](https://docs.rs/cayley-macros)
/// at compile time or shipped with an application.
///
/// Square tables are row-major: entry `(i, j)` is at `i * n + j`.
/// Missing tables are computed from the basis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Precomputed<'a> {
    pub grades: Option<&'a [usize]>,
    pub geometric_product: Option<&'a [i32]>,
    pub inner_product: Option<&'a [i32]>,
    pub outer_product: Option<&'a [i32]>,
    pub vector_inverse: Option<&'a [i32]>,
    pub dual: Option<&'a [i32]>,
    pub involution: Option<&'a [i32]>,
}

#[derive(Clone, Debug)]
pub struct MultiplicationTables<T> {
    basis: BladeBasis<T>,
    grades: DVector<usize>,
    geometric_product: DMatrix<i32>,
    inner_product: DMatrix<i32>,
    outer_product: DMatrix<i32>,
    reverse: DVector<i32>,
    involution: DVector<i32>,
    dual: DVector<i32>,
    vector_inverse: DVector<i32>,
}

/// Turns product blades into signed basis positions,
/// counting the products that cannot be represented exactly
struct Encoder<'a, T> {
    basis: &'a BladeBasis<T>,
    non_unit: usize,
    missing: usize,
}

impl<'a, T: Ring> Encoder<'a, T> {
    fn new(basis: &'a BladeBasis<T>) -> Self {
        Encoder {
            basis,
            non_unit: 0,
            missing: 0,
        }
    }

    fn encode(&mut self, product: &Blade<T>) -> i32 {
        if product.is_zero() {
            return 0;
        }
        let r = self.basis.find(product);
        if r == 0 {
            self.missing += 1;
            return 0;
        }
        let matched = self.basis[r.unsigned_abs() as usize - 1].factor();
        if matched.abs() != T::one() || product.factor().abs() != T::one() {
            self.non_unit += 1;
        }
        r * matched.sign() * product.factor().sign()
    }

    /// Log what went wrong while filling `table` and start counting afresh
    fn finish(&mut self, table: &str) {
        if self.non_unit > 0 {
            log::warn!(
                "{} table: {} products have a non-unit factor, only their sign is recorded",
                table,
                self.non_unit
            );
        }
        if self.missing > 0 {
            log::warn!(
                "{} table: {} products are not in the basis",
                table,
                self.missing
            );
        }
        self.non_unit = 0;
        self.missing = 0;
    }
}

fn check_len<'a, U>(
    table: &'static str,
    slice: Option<&'a [U]>,
    expected: usize,
) -> Result<Option<&'a [U]>> {
    match slice {
        Some(s) if s.len() != expected => Err(Error::TableSize {
            table,
            expected,
            found: s.len(),
        }),
        _ => Ok(slice),
    }
}

/// Reject the first given entry that `valid` refuses
fn check_entries(
    table: &'static str,
    slice: Option<&[i32]>,
    valid: impl Fn(i32) -> bool,
) -> Result<()> {
    match slice
        .into_iter()
        .flatten()
        .enumerate()
        .find(|&(_, &value)| !valid(value))
    {
        Some((position, &value)) => Err(Error::TableEntry {
            table,
            position,
            value: value.into(),
        }),
        None => Ok(()),
    }
}

fn product_table<T: Ring>(
    encoder: &mut Encoder<'_, T>,
    name: &str,
    given: Option<&[i32]>,
    op: impl Fn(&Blade<T>, &Blade<T>) -> Blade<T>,
) -> DMatrix<i32> {
    let basis = encoder.basis;
    let n = basis.len();
    if let Some(given) = given {
        log::trace!("{} table is precomputed", name);
        return DMatrix::from_row_slice(n, n, given);
    }
    let table = DMatrix::from_fn(n, n, |i, j| encoder.encode(&op(&basis[i], &basis[j])));
    encoder.finish(name);
    log::trace!("{} table:{}", name, table);
    table
}

impl<T: Ring + Recip<Output = T>> MultiplicationTables<T> {
    /// Compute every table from a complete basis
    pub fn build(basis: BladeBasis<T>) -> Result<Self> {
        Self::from_precomputed(basis, &Precomputed::default())
    }

    /// Take the tables that are given and compute the rest.
    ///
    /// The reverse table is always computed.
    pub fn from_precomputed(basis: BladeBasis<T>, tables: &Precomputed<'_>) -> Result<Self> {
        basis.validate()?;
        let n = basis.len();

        let grades = check_len("grades", tables.grades, n)?;
        let geometric_product = check_len("geometric product", tables.geometric_product, n * n)?;
        let inner_product = check_len("inner product", tables.inner_product, n * n)?;
        let outer_product = check_len("outer product", tables.outer_product, n * n)?;
        let vector_inverse = check_len("vector inverse", tables.vector_inverse, n)?;
        let dual = check_len("dual", tables.dual, n)?;
        let involution = check_len("involution", tables.involution, n)?;

        // Entries are signed 1-based positions, or 0
        let in_basis = |value: i32| value.unsigned_abs() as usize <= n;
        check_entries("geometric product", geometric_product, in_basis)?;
        check_entries("inner product", inner_product, in_basis)?;
        check_entries("outer product", outer_product, in_basis)?;
        check_entries("dual", dual, in_basis)?;
        check_entries("involution", involution, |value| value == 0 || value == 1)?;
        if let Some((position, &value)) = grades
            .into_iter()
            .flatten()
            .enumerate()
            .find(|&(i, &g)| g != basis[i].grade())
        {
            return Err(Error::TableEntry {
                table: "grades",
                position,
                value: value as i64,
            });
        }

        log::debug!(
            "building Cayley tables for {} basis blades of {:?}",
            n,
            basis.space()
        );

        let mut encoder = Encoder::new(&basis);

        let grades = match grades {
            Some(g) => DVector::from_column_slice(g),
            None => DVector::from_iterator(n, basis.iter().map(|b| b.grade())),
        };

        let geometric_product =
            product_table(&mut encoder, "geometric product", geometric_product, |a, b| {
                a.geometric_product(b)
            });
        let inner_product =
            product_table(&mut encoder, "inner product", inner_product, |a, b| a.dot(b));
        let outer_product =
            product_table(&mut encoder, "outer product", outer_product, |a, b| a.wedge(b));

        let reverse = DVector::from_iterator(
            n,
            grades.iter().enumerate().map(|(i, &g)| {
                let position = i as i32 + 1;
                if (g * g.saturating_sub(1) / 2) % 2 == 0 {
                    position
                } else {
                    -position
                }
            }),
        );

        let involution = match involution {
            Some(given) => DVector::from_column_slice(given),
            None => DVector::from_iterator(
                n,
                basis.iter().map(|b| {
                    let square = b.geometric_product(&b.reverse());
                    i32::from(square.factor() < T::zero())
                }),
            ),
        };

        let dual = match dual {
            Some(given) => DVector::from_column_slice(given),
            None => {
                let pseudoscalar_inverse = Blade::pseudoscalar(basis.space()).inverse()?;
                if pseudoscalar_inverse.is_zero() {
                    log::warn!("degenerate metric: every dual is zero");
                }
                let dual = DVector::from_iterator(
                    n,
                    basis
                        .iter()
                        .map(|b| encoder.encode(&b.geometric_product(&pseudoscalar_inverse))),
                );
                encoder.finish("dual");
                dual
            }
        };

        let vector_inverse = match vector_inverse {
            Some(given) => DVector::from_column_slice(given),
            None => DVector::from_iterator(
                n,
                basis
                    .iter()
                    .map(|b| b.dot(&b.reverse()).factor().to_integer() as i32),
            ),
        };

        Ok(MultiplicationTables {
            basis,
            grades,
            geometric_product,
            inner_product,
            outer_product,
            reverse,
            involution,
            dual,
            vector_inverse,
        })
    }
}

impl<T> MultiplicationTables<T> {
    pub fn basis(&self) -> &BladeBasis<T> {
        &self.basis
    }

    /// Number of basis blades, i.e. the side length of the square tables
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }

    pub fn grades(&self) -> &DVector<usize> {
        &self.grades
    }

    pub fn geometric_product(&self) -> &DMatrix<i32> {
        &self.geometric_product
    }

    pub fn inner_product(&self) -> &DMatrix<i32> {
        &self.inner_product
    }

    pub fn outer_product(&self) -> &DMatrix<i32> {
        &self.outer_product
    }

    /// `±(i + 1)`: the sign of reversing basis blade `i`
    pub fn reverse(&self) -> &DVector<i32> {
        &self.reverse
    }

    /// `1` where a basis blade times its reverse is negative, else `0`
    pub fn involution(&self) -> &DVector<i32> {
        &self.involution
    }

    /// Position and sign of each basis blade times the inverse pseudoscalar
    pub fn dual(&self) -> &DVector<i32> {
        &self.dual
    }

    /// The scalar `b · ~b` of each basis blade `b`, truncated to an integer.
    ///
    /// Unlike the other tables this holds values, not positions.
    pub fn vector_inverse(&self) -> &DVector<i32> {
        &self.vector_inverse
    }

    /// Split a signed 1-based table entry into a 0-based basis position and a sign.
    ///
    /// Returns `None` for `0` (a vanishing product) and for positions outside the basis.
    pub fn decode(&self, entry: i32) -> Option<(usize, i32)> {
        if entry == 0 {
            return None;
        }
        let position = entry.unsigned_abs() as usize - 1;
        (position < self.len()).then_some((position, entry.signum()))
    }
}

impl<T: fmt::Display> MultiplicationTables<T> {
    /// The rendered basis blade at `position`
    pub fn blade_name(&self, position: usize) -> Option<String> {
        self.basis.get(position).map(|b| b.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::VectorSpace;
    use std::sync::Arc;

    fn tables(squares: Vec<f64>) -> MultiplicationTables<f64> {
        let space = Arc::new(VectorSpace::diagonal(squares).unwrap());
        MultiplicationTables::build(BladeBasis::generate(&space).unwrap()).unwrap()
    }

    #[test]
    fn rejects_incomplete_basis() {
        let space = Arc::new(VectorSpace::diagonal(vec![1., 1.]).unwrap());
        let basis = BladeBasis::from_blades(
            &space,
            [Blade::scalar(&space, 1.), Blade::new(&space, 1., [1])],
        )
        .unwrap();
        assert_eq!(
            MultiplicationTables::build(basis).unwrap_err(),
            Error::IncompleteBasis {
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_misshapen_precomputed_tables() {
        let space = Arc::new(VectorSpace::diagonal(vec![1., 1.]).unwrap());
        let basis = BladeBasis::generate(&space).unwrap();
        let precomputed = Precomputed {
            geometric_product: Some(&[1, 2, 3]),
            ..Default::default()
        };
        assert_eq!(
            MultiplicationTables::from_precomputed(basis, &precomputed).unwrap_err(),
            Error::TableSize {
                table: "geometric product",
                expected: 16,
                found: 3
            }
        );
    }

    #[test]
    fn rejects_precomputed_entries_outside_the_basis() {
        let space = Arc::new(VectorSpace::diagonal(vec![1., 1.]).unwrap());
        let generate = || BladeBasis::generate(&space).unwrap();

        let precomputed = Precomputed {
            geometric_product: Some(&[1000; 16]),
            dual: Some(&[99, -42, 0, 7]),
            ..Default::default()
        };
        assert_eq!(
            MultiplicationTables::from_precomputed(generate(), &precomputed).unwrap_err(),
            Error::TableEntry {
                table: "geometric product",
                position: 0,
                value: 1000
            }
        );

        let precomputed = Precomputed {
            dual: Some(&[4, -3, 2, -5]),
            ..Default::default()
        };
        assert_eq!(
            MultiplicationTables::from_precomputed(generate(), &precomputed).unwrap_err(),
            Error::TableEntry {
                table: "dual",
                position: 3,
                value: -5
            }
        );

        let precomputed = Precomputed {
            involution: Some(&[0, 1, 2, 0]),
            ..Default::default()
        };
        assert_eq!(
            MultiplicationTables::from_precomputed(generate(), &precomputed).unwrap_err(),
            Error::TableEntry {
                table: "involution",
                position: 2,
                value: 2
            }
        );
    }

    #[test]
    fn rejects_precomputed_grades_that_disagree_with_the_basis() {
        let space = Arc::new(VectorSpace::diagonal(vec![1., 1.]).unwrap());
        let precomputed = Precomputed {
            grades: Some(&[0, 1, 1, 1]),
            ..Default::default()
        };
        assert_eq!(
            MultiplicationTables::from_precomputed(
                BladeBasis::generate(&space).unwrap(),
                &precomputed
            )
            .unwrap_err(),
            Error::TableEntry {
                table: "grades",
                position: 3,
                value: 1
            }
        );
    }

    #[test]
    fn precomputed_tables_are_used() {
        let space = Arc::new(VectorSpace::diagonal(vec![1., 1.]).unwrap());
        let basis = BladeBasis::generate(&space).unwrap();
        // Deliberately wrong, to tell it apart from a computed table
        let dual = [4, 3, 2, 1];
        let precomputed = Precomputed {
            dual: Some(&dual),
            ..Default::default()
        };
        let t = MultiplicationTables::from_precomputed(basis, &precomputed).unwrap();
        assert_eq!(t.dual().as_slice(), &dual);
        assert_eq!(t.reverse().as_slice(), &[1, 2, 3, -4]);
    }

    #[test]
    fn plane() {
        let t = tables(vec![1., 1.]);
        // Basis: 1, e1, e2, e12
        assert_eq!(t.grades().as_slice(), &[0, 1, 1, 2]);
        assert_eq!(t.geometric_product()[(1, 2)], 4);
        assert_eq!(t.geometric_product()[(2, 1)], -4);
        assert_eq!(t.geometric_product()[(3, 3)], -1);
        assert_eq!(t.outer_product()[(1, 1)], 0);
        assert_eq!(t.inner_product()[(1, 3)], 3);
        assert_eq!(t.inner_product()[(3, 1)], -3);
        assert_eq!(t.involution().as_slice(), &[0, 0, 0, 0]);
        assert_eq!(t.vector_inverse().as_slice(), &[1, 1, 1, 1]);
    }

    #[test]
    fn decode() {
        let t = tables(vec![1., 1.]);
        assert_eq!(t.decode(0), None);
        assert_eq!(t.decode(4), Some((3, 1)));
        assert_eq!(t.decode(-1), Some((0, -1)));
        assert_eq!(t.decode(5), None);
    }

    #[test]
    fn blade_names() {
        let t = tables(vec![1., 1.]);
        assert_eq!(t.blade_name(3).as_deref(), Some("1^e12"));
        assert_eq!(t.blade_name(4), None);
    }

    #[test]
    fn non_unit_factors_keep_their_sign() {
        let space = Arc::new(VectorSpace::diagonal(vec![2., -3.]).unwrap());
        let t = MultiplicationTables::build(BladeBasis::generate(&space).unwrap()).unwrap();
        assert_eq!(t.geometric_product()[(1, 1)], 1);
        assert_eq!(t.geometric_product()[(2, 2)], -1);
        assert_eq!(t.vector_inverse().as_slice(), &[1, 2, -3, -6]);
    }
}
