/// A fixed-dimension embedding vector
pub type Embedding = Vec<f32>;

/// One search result: a stored chunk and its squared Euclidean distance to
/// the query vector. Smaller distance means more relevant.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub text: String,
    pub distance: f32,
}
