//! Enumeration of the canonical basis blades
//!
//! A basis blade of grade `k` is a strictly increasing selection of `k` basis vector indices.
//! Walking `k` from `0` to `n` and listing the selections lexicographically gives
//! `sum_k C(n, k) = 2^n` blades, which is the canonical basis order
//! used by [BladeBasis::generate](crate::BladeBasis::generate).

use crate::error::{Error, Result};
use crate::space::MAX_DIMENSION;

/// All strictly increasing selections of `grade` indices
/// from `first_index..first_index + dimension`, in lexicographic order.
///
/// ```
/// use cayley::combinations;
///
/// assert_eq!(
///     combinations(3, 2, 1).unwrap(),
///     vec![vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// assert_eq!(combinations(3, 0, 1).unwrap(), vec![Vec::<usize>::new()]);
/// ```
pub fn combinations(dimension: usize, grade: usize, first_index: usize) -> Result<Vec<Vec<usize>>> {
    if dimension == 0 || dimension > MAX_DIMENSION {
        return Err(Error::InvalidDimension { dimension });
    }
    if grade > dimension {
        return Err(Error::InvalidGrade { grade, dimension });
    }
    let end = match first_index.checked_add(dimension) {
        Some(end) if first_index >= 1 => end,
        _ => return Err(Error::InvalidFirstIndex { first_index }),
    };

    let mut out = vec![];
    let mut selection = Vec::with_capacity(grade);
    descend(first_index, end, grade, &mut selection, &mut out);
    Ok(out)
}

/// Fix the next index at every candidate from `start` on, then recurse past it
fn descend(
    start: usize,
    end: usize,
    remaining: usize,
    selection: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        out.push(selection.clone());
        return;
    }
    // Leave room for the indices still to be picked
    for index in start..=(end - remaining) {
        selection.push(index);
        descend(index + 1, end, remaining - 1, selection, out);
        selection.pop();
    }
}

/// Binomial coefficient `C(n, k)`, the number of basis blades of grade `k`
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_binomials() {
        for dimension in 1..=8 {
            let mut total = 0;
            for grade in 0..=dimension {
                let c = combinations(dimension, grade, 1).unwrap();
                assert_eq!(c.len(), binomial(dimension, grade));
                total += c.len();
            }
            assert_eq!(total, 1 << dimension);
        }
    }

    #[test]
    fn lexicographic_and_increasing() {
        let c = combinations(5, 3, 1).unwrap();
        for w in c.windows(2) {
            assert!(w[0] < w[1]);
        }
        for sel in &c {
            assert!(sel.windows(2).all(|p| p[0] < p[1]));
        }
        assert_eq!(c.first().unwrap(), &vec![1, 2, 3]);
        assert_eq!(c.last().unwrap(), &vec![3, 4, 5]);
    }

    #[test]
    fn respects_first_index() {
        assert_eq!(
            combinations(3, 1, 4).unwrap(),
            vec![vec![4], vec![5], vec![6]]
        );
        assert_eq!(combinations(2, 2, 2).unwrap(), vec![vec![2, 3]]);
    }

    #[test]
    fn rejects_bad_requests() {
        assert_eq!(
            combinations(3, 4, 1).unwrap_err(),
            Error::InvalidGrade {
                grade: 4,
                dimension: 3
            }
        );
        assert_eq!(
            combinations(3, 1, 0).unwrap_err(),
            Error::InvalidFirstIndex { first_index: 0 }
        );
        assert_eq!(
            combinations(2, 1, usize::MAX).unwrap_err(),
            Error::InvalidFirstIndex {
                first_index: usize::MAX
            }
        );
        assert_eq!(
            combinations(0, 0, 1).unwrap_err(),
            Error::InvalidDimension { dimension: 0 }
        );
    }
}
