use serde::{Deserialize, Serialize};

/// A dense text-embedding vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Embedding {
    data: Vec<f32>,
}

impl Embedding {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Compute cosine similarity with another embedding
    ///
    /// Degenerate inputs never raise: mismatched dimensions and zero-norm
    /// vectors both yield 0.0.
    #[inline]
    pub fn cosine(&self, other: &Embedding) -> f32 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let dot: f32 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum();

        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a * norm_b)
    }

    #[inline]
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(data: Vec<f32>) -> Self {
        Embedding::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical() {
        let v1 = Embedding::new(vec![1.0, 2.0, 3.0]);
        let v2 = Embedding::new(vec![1.0, 2.0, 3.0]);
        assert!((v1.cosine(&v2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let v1 = Embedding::new(vec![1.0, 0.0]);
        let v2 = Embedding::new(vec![0.0, 1.0]);
        assert!((v1.cosine(&v2) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_dimension_mismatch_is_zero() {
        let v1 = Embedding::new(vec![1.0, 0.0]);
        let v2 = Embedding::new(vec![1.0, 0.0, 0.0]);
        assert_eq!(v1.cosine(&v2), 0.0);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let v1 = Embedding::new(vec![0.0, 0.0]);
        let v2 = Embedding::new(vec![1.0, 1.0]);
        assert_eq!(v1.cosine(&v2), 0.0);
        assert_eq!(v2.cosine(&v1), 0.0);
        assert_eq!(v1.cosine(&v1), 0.0);
    }

    #[test]
    fn test_cosine_opposite_is_negative() {
        let v1 = Embedding::new(vec![1.0, 0.0]);
        let v2 = Embedding::new(vec![-1.0, 0.0]);
        assert!((v1.cosine(&v2) + 1.0).abs() < 1e-6);
    }
}
