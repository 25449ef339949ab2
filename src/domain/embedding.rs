#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// All-zero vector standing in for "no signal".
    pub fn zeroed(dimensions: usize) -> Self {
        Self {
            values: vec![0.0; dimensions],
        }
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Cosine similarity; mismatched lengths and zero vectors score 0.
    pub fn cosine_similarity(&self, other: &Self) -> f32 {
        if self.values.len() != other.values.len() {
            return 0.0;
        }

        let (dot, norm_a, norm_b) = self.values.iter().zip(other.values.iter()).fold(
            (0.0f32, 0.0f32, 0.0f32),
            |(dot, na, nb), (a, b)| (dot + a * b, na + a * a, nb + b * b),
        );

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}
