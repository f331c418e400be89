//! Randomized comparison of `VectorStore::search` against a brute-force
//! oracle.

use docqa_vector_store::VectorStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vector(rng: &mut StdRng, dimension: usize) -> Vec<f32> {
    (0..dimension).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn oracle(vectors: &[Vec<f32>], query: &[f32], k: usize) -> Vec<(usize, f32)> {
    let mut distances: Vec<(usize, f32)> = vectors
        .iter()
        .enumerate()
        .map(|(idx, v)| {
            let d: f32 = v
                .iter()
                .zip(query.iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            (idx, d)
        })
        .collect();
    distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
    distances.truncate(k);
    distances
}

#[test]
fn search_matches_brute_force_oracle() {
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..20 {
        let dimension = rng.gen_range(2..16);
        let count = rng.gen_range(1..40);
        let k = rng.gen_range(1..10);

        let vectors: Vec<Vec<f32>> = (0..count)
            .map(|_| random_vector(&mut rng, dimension))
            .collect();
        let chunks: Vec<String> = (0..count).map(|i| format!("chunk-{i}")).collect();

        let mut store = VectorStore::new();
        store.add(chunks.clone(), vectors.clone()).unwrap();

        let query = random_vector(&mut rng, dimension);
        let hits = store.search(&query, k).unwrap();
        let expected = oracle(&vectors, &query, k);

        assert_eq!(hits.len(), expected.len(), "round {round}");
        for (hit, (idx, distance)) in hits.iter().zip(expected.iter()) {
            assert_eq!(hit.text, chunks[*idx], "round {round}");
            assert_eq!(hit.distance, *distance, "round {round}");
        }
    }
}

#[test]
fn duplicate_vectors_resolve_by_insertion_order() {
    let mut store = VectorStore::new();
    let same = vec![0.5_f32, 0.5, 0.5];
    store
        .add(
            vec!["first".into(), "second".into(), "third".into()],
            vec![same.clone(), same.clone(), same],
        )
        .unwrap();

    let hits = store.search(&[0.0, 0.0, 0.0], 3).unwrap();
    let order: Vec<&str> = hits.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}
