use std::sync::Arc;

use cayley::{BladeBasis, MultiplicationTables, Precomputed, VectorSpace};
use cayley_macros::cayley_tables;

const PGA3: Precomputed<'static> = cayley_tables!(1, 1, 1, 0);
const SPACETIME: Precomputed<'static> = cayley_tables!(1, 1, 1, -1);

fn computed(squares: Vec<f64>) -> MultiplicationTables<f64> {
    let space = Arc::new(VectorSpace::diagonal(squares).unwrap());
    MultiplicationTables::build(BladeBasis::generate(&space).unwrap()).unwrap()
}

fn row_major(m: &nalgebra::DMatrix<i32>) -> Vec<i32> {
    m.transpose().iter().copied().collect()
}

fn assert_same(precomputed: &Precomputed<'_>, tables: &MultiplicationTables<f64>) {
    assert_eq!(precomputed.grades.unwrap(), tables.grades().as_slice());
    assert_eq!(
        precomputed.geometric_product.unwrap(),
        row_major(tables.geometric_product())
    );
    assert_eq!(
        precomputed.inner_product.unwrap(),
        row_major(tables.inner_product())
    );
    assert_eq!(
        precomputed.outer_product.unwrap(),
        row_major(tables.outer_product())
    );
    assert_eq!(
        precomputed.vector_inverse.unwrap(),
        tables.vector_inverse().as_slice()
    );
    assert_eq!(precomputed.dual.unwrap(), tables.dual().as_slice());
    assert_eq!(
        precomputed.involution.unwrap(),
        tables.involution().as_slice()
    );
}

#[test]
fn test_pga() {
    assert_same(&PGA3, &computed(vec![1., 1., 1., 0.]));

    // e4 is null
    let gp = PGA3.geometric_product.unwrap();
    assert_eq!(gp[4 * 16 + 4], 0);
    assert!(PGA3.dual.unwrap().iter().all(|&d| d == 0));
}

#[test]
fn test_spacetime() {
    assert_same(&SPACETIME, &computed(vec![1., 1., 1., -1.]));
    assert_eq!(SPACETIME.involution.unwrap()[4], 1);
}

#[test]
fn test_from_precomputed() {
    let space = Arc::new(VectorSpace::diagonal(vec![1., 1., 1., 0.]).unwrap());
    let tables =
        MultiplicationTables::from_precomputed(BladeBasis::generate(&space).unwrap(), &PGA3)
            .unwrap();
    let expected = computed(vec![1., 1., 1., 0.]);
    assert_eq!(tables.geometric_product(), expected.geometric_product());
    assert_eq!(tables.reverse(), expected.reverse());
}
