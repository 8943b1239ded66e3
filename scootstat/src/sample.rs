//! reproducible subsampling of tables meant for map rendering.
use rand::rngs::StdRng;
use rand::SeedableRng;

/// draws at most `max_rows` rows with a seeded generator, keeping their input order.
/// the same seed always selects the same rows.
pub fn seeded_sample<T: Clone>(rows: &[T], max_rows: usize, seed: u64) -> Vec<T> {
    if rows.len() <= max_rows {
        return rows.to_vec();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices = rand::seq::index::sample(&mut rng, rows.len(), max_rows).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| rows[i].clone()).collect()
}
