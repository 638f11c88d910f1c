//! Benchmark parameter labels.

use std::fmt;

/// Identifies one representation and algorithm cell at one input size.
#[derive(Clone, Debug)]
pub struct ReductionBenchParams {
    /// Representation label.
    pub representation: &'static str,
    /// Algorithm label.
    pub algorithm: &'static str,
    /// Number of vertices in the synthetic complex.
    pub vertex_count: usize,
}

impl fmt::Display for ReductionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/n={}",
            self.representation, self.algorithm, self.vertex_count
        )
    }
}

/// Identifies one ansatz at one input size.
#[derive(Clone, Debug)]
pub struct AnsatzBenchParams {
    /// `primal` or `dual`.
    pub ansatz: &'static str,
    /// Number of vertices in the synthetic complex.
    pub vertex_count: usize,
}

impl fmt::Display for AnsatzBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/n={}", self.ansatz, self.vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_params_render_as_path() {
        let params = ReductionBenchParams {
            representation: "vector_set",
            algorithm: "row_reduction",
            vertex_count: 12,
        };
        assert_eq!(params.to_string(), "vector_set/row_reduction/n=12");
    }

    #[test]
    fn ansatz_params_render_as_path() {
        let params = AnsatzBenchParams {
            ansatz: "dual",
            vertex_count: 8,
        };
        assert_eq!(params.to_string(), "dual/n=8");
    }
}
