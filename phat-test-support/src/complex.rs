//! Boundary matrices of small filtered simplicial complexes.

use std::collections::HashMap;

/// One column: the cell dimension and its strictly increasing face indices.
pub type Column = (u8, Vec<usize>);

/// A filled triangle: three vertices, three edges, one face.
///
/// Reduction yields the pairs `(1, 3)`, `(2, 4)` and `(5, 6)`.
#[must_use]
pub fn single_triangle() -> Vec<Column> {
    vec![
        (0, vec![]),
        (0, vec![]),
        (0, vec![]),
        (1, vec![0, 1]),
        (1, vec![1, 2]),
        (1, vec![0, 2]),
        (2, vec![3, 4, 5]),
    ]
}

/// Persistence pairs of [`single_triangle`], sorted.
#[must_use]
pub fn single_triangle_pairs() -> Vec<(usize, usize)> {
    vec![(1, 3), (2, 4), (5, 6)]
}

/// Boundary matrix of the lower-star filtration of the full simplex on
/// `heights.len()` vertices, truncated above `max_dim`.
///
/// A simplex enters at the largest height among its vertices; ties are broken
/// by dimension and then lexicographically, so faces always precede cofaces.
///
/// # Examples
/// ```
/// use phat_test_support::complex::lower_star_complex;
///
/// let columns = lower_star_complex(&[0, 2, 1], 2);
/// assert_eq!(columns.len(), 7);
/// assert!(columns.iter().all(|(dim, rows)| rows.len() == usize::from(*dim) + 1 || *dim == 0));
/// ```
#[must_use]
pub fn lower_star_complex(heights: &[u32], max_dim: u8) -> Vec<Column> {
    let mut simplices: Vec<(u32, Vec<usize>)> = Vec::new();
    for size in 1..=usize::from(max_dim) + 1 {
        for vertices in combinations(heights.len(), size) {
            let value = vertices
                .iter()
                .filter_map(|&vertex| heights.get(vertex).copied())
                .max()
                .unwrap_or(0);
            simplices.push((value, vertices));
        }
    }
    simplices.sort_by(|(left_value, left), (right_value, right)| {
        left_value
            .cmp(right_value)
            .then(left.len().cmp(&right.len()))
            .then(left.cmp(right))
    });

    let position: HashMap<&[usize], usize> = simplices
        .iter()
        .enumerate()
        .map(|(idx, (_, vertices))| (vertices.as_slice(), idx))
        .collect();

    simplices
        .iter()
        .map(|(_, vertices)| {
            let mut faces: Vec<usize> = (0..vertices.len())
                .filter(|_| vertices.len() > 1)
                .filter_map(|skip| {
                    let face: Vec<usize> = vertices
                        .iter()
                        .enumerate()
                        .filter(|&(idx, _)| idx != skip)
                        .map(|(_, &vertex)| vertex)
                        .collect();
                    position.get(face.as_slice()).copied()
                })
                .collect();
            faces.sort_unstable();
            let dim = u8::try_from(vertices.len() - 1).unwrap_or(u8::MAX);
            (dim, faces)
        })
        .collect()
}

fn combinations(n: usize, size: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(size);
    extend_combinations(n, size, 0, &mut current, &mut out);
    out
}

fn extend_combinations(
    n: usize,
    size: usize,
    next: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == size {
        out.push(current.clone());
        return;
    }
    for vertex in next..n {
        current.push(vertex);
        extend_combinations(n, size, vertex + 1, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(4, 2, 6)]
    #[case(5, 3, 10)]
    #[case(3, 4, 0)]
    fn combinations_counts_match_binomials(
        #[case] n: usize,
        #[case] size: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(combinations(n, size).len(), expected);
    }

    #[test]
    fn faces_precede_cofaces() {
        let columns = lower_star_complex(&[3, 1, 4, 1, 5], 3);
        assert_eq!(columns.len(), 5 + 10 + 10 + 5);
        for (idx, (dim, rows)) in columns.iter().enumerate() {
            assert!(rows.iter().all(|&row| row < idx));
            let expected_faces = if *dim == 0 { 0 } else { usize::from(*dim) + 1 };
            assert_eq!(rows.len(), expected_faces);
            assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
