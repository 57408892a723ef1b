use crate::errors::ProblemError;
use std::path::Path;

/// A QBF instance: the coefficient matrix A of f(x) = xᵀ·A·x.
///
/// The on-disk format is whitespace-separated: the dimension `n` first, then
/// the `n(n+1)/2` upper-triangular entries row by row (`A[i][j]` for
/// `j >= i`). Entries below the diagonal are stored as zero, so the matrix
/// is strictly upper triangular in memory.
#[derive(Debug, Clone)]
pub struct QbfInstance {
    n: usize,
    a: Vec<Vec<f64>>,
}

impl QbfInstance {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProblemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    pub fn parse(text: &str, path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let path = path.as_ref();
        let mut tokens = text.split_whitespace();

        let n: usize = tokens
            .next()
            .ok_or_else(|| ProblemError::format(path, "empty instance"))?
            .parse()
            .map_err(|_| ProblemError::format(path, "dimension is not a non-negative integer"))?;
        if n == 0 {
            return Err(ProblemError::format(path, "instance has no variables"));
        }

        let mut a = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let tok = tokens.next().ok_or_else(|| {
                    ProblemError::format(
                        path,
                        format!("truncated matrix: missing entry A[{i}][{j}]"),
                    )
                })?;
                a[i][j] = tok.parse().map_err(|_| {
                    ProblemError::format(path, format!("entry A[{i}][{j}] is not a number: {tok}"))
                })?;
            }
        }
        if tokens.next().is_some() {
            return Err(ProblemError::format(path, "trailing tokens after matrix"));
        }

        Ok(Self { n, a })
    }

    /// Number of binary variables.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn coeff(&self, i: usize, j: usize) -> f64 {
        self.a[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upper_triangular_matrix() {
        let inst = QbfInstance::parse("3\n1 2 0\n-3 4\n5\n", "test").unwrap();
        assert_eq!(inst.size(), 3);
        assert_eq!(inst.coeff(0, 1), 2.0);
        assert_eq!(inst.coeff(1, 2), 4.0);
        assert_eq!(inst.coeff(2, 2), 5.0);
        // below-diagonal entries are zero, never mirrored
        assert_eq!(inst.coeff(1, 0), 0.0);
        assert_eq!(inst.coeff(2, 0), 0.0);
    }

    #[test]
    fn rejects_truncated_matrix() {
        let err = QbfInstance::parse("3\n1 2 0\n-3 4\n", "test").unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn rejects_trailing_tokens() {
        let err = QbfInstance::parse("2\n1 2 3 99\n", "test").unwrap_err();
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn rejects_empty_and_zero_dimension() {
        assert!(QbfInstance::parse("", "test").is_err());
        assert!(QbfInstance::parse("0", "test").is_err());
    }

    #[test]
    fn rejects_non_numeric_entries() {
        assert!(QbfInstance::parse("2\n1 x 3\n", "test").is_err());
    }
}
