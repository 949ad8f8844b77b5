// THEORY:
// The `Clusterer` is the engine of the extraction pipeline. It partitions the sampled
// `ColorVector`s into exactly k groups with Lloyd's k-means in RGB space.
//
// Algorithm steps:
// 1.  **Seeding (k-means++)**: The first centroid is a uniformly random vector; each
//     following centroid is drawn with probability proportional to its squared
//     distance from the nearest centroid chosen so far. A seeded `ChaCha8Rng` makes
//     the draw reproducible. When every vector already sits on a chosen centroid
//     (fewer distinct colors than k), the first centroid is repeated.
// 2.  **Assignment**: Every vector joins the centroid with the smallest squared
//     Euclidean distance. Ties go to the lowest cluster index.
// 3.  **Update**: Each centroid moves to the mean of its members. A cluster with no
//     members keeps its previous centroid and reports a size of 0.
// 4.  **Convergence**: Steps 2-3 repeat until no assignment changes or the iteration
//     cap is reached.
//
// Every input vector ends up in exactly one cluster, so the cluster sizes always sum
// to the number of input vectors.

use crate::core_modules::color_vector::color_vector::{ColorVector, Component};
use crate::error::{ColorError, Result};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub type Centroid = [Component; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: u32,
    /// Mean position of the members, as real-valued (R, G, B).
    pub centroid: Centroid,
    /// Number of vectors assigned to this cluster.
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult {
    pub clusters: Vec<Cluster>,
    pub iterations: usize,
}

impl ClusterResult {
    /// Total number of vectors across all clusters.
    pub fn total(&self) -> usize {
        self.clusters.iter().map(|c| c.size).sum()
    }
}

pub fn kmeans(
    vectors: &[ColorVector],
    k: usize,
    max_iters: usize,
    seed: u64,
) -> Result<ClusterResult> {
    if k == 0 {
        return Err(ColorError::InvalidColorCount {
            requested: k,
            max: crate::config::MAX_COLORS,
        });
    }
    if vectors.is_empty() {
        return Err(ColorError::EmptyInput);
    }

    let n = vectors.len();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // 1. Seed centers
    let mut centroids = seed_centroids(vectors, k, &mut rng);

    let mut assignments = vec![usize::MAX; n];
    let mut iterations = 0;

    for _ in 0..max_iters.max(1) {
        iterations += 1;

        // 2. Assign each vector to nearest centroid
        let mut changed = false;
        for (i, vector) in vectors.iter().enumerate() {
            let best = nearest(vector, &centroids).0;
            if assignments[i] != best {
                changed = true;
                assignments[i] = best;
            }
        }

        if !changed {
            break; // converged
        }

        // 3. Recompute centroids
        let mut sums = vec![[0.0; 3]; k];
        let mut counts = vec![0usize; k];
        for (vector, &cluster) in vectors.iter().zip(assignments.iter()) {
            let components = vector.components();
            for channel in 0..3 {
                sums[cluster][channel] += components[channel];
            }
            counts[cluster] += 1;
        }

        for c in 0..k {
            if counts[c] > 0 {
                let count = counts[c] as Component;
                centroids[c] = [sums[c][0] / count, sums[c][1] / count, sums[c][2] / count];
            }
        }
    }

    // The loop can stop on the iteration cap right after an update, so sizes are
    // counted from the final assignments.
    let mut sizes = vec![0usize; k];
    for &cluster in &assignments {
        sizes[cluster] += 1;
    }

    debug!("k-means finished after {} iterations (k={}, n={})", iterations, k, n);

    // 4. Build result clusters
    let clusters = centroids
        .into_iter()
        .zip(sizes)
        .enumerate()
        .map(|(id, (centroid, size))| Cluster {
            id: id as u32,
            centroid,
            size,
        })
        .collect();

    Ok(ClusterResult {
        clusters,
        iterations,
    })
}

/// Index of and squared distance to the closest centroid; ties keep the lowest index.
fn nearest(vector: &ColorVector, centroids: &[Centroid]) -> (usize, Component) {
    let mut best = (0, Component::INFINITY);
    for (c, center) in centroids.iter().enumerate() {
        let distance = vector.distance_squared(center);
        if distance < best.1 {
            best = (c, distance);
        }
    }
    best
}

fn seed_centroids(vectors: &[ColorVector], k: usize, rng: &mut ChaCha8Rng) -> Vec<Centroid> {
    let first = vectors[rng.gen_range(0..vectors.len())].components();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(first);

    let mut distances: Vec<Component> = vectors
        .iter()
        .map(|v| v.distance_squared(&first))
        .collect();

    while centroids.len() < k {
        let total: Component = distances.iter().sum();
        if total <= 0.0 {
            centroids.push(first);
            continue;
        }

        let mut target = rng.gen_range(0.0..total);
        let mut chosen = vectors.len() - 1;
        for (i, &d) in distances.iter().enumerate() {
            if d > 0.0 && target < d {
                chosen = i;
                break;
            }
            target -= d;
        }
        // Floating point drift can run past the end; fall back to the farthest vector.
        if distances[chosen] <= 0.0 {
            chosen = distances
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
                .unwrap_or(0);
        }

        let next = vectors[chosen].components();
        centroids.push(next);
        for (d, v) in distances.iter_mut().zip(vectors) {
            *d = d.min(v.distance_squared(&next));
        }
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: &Centroid, b: &Centroid) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn separates_three_pure_colors() {
        let vectors = vec![
            ColorVector::new(255, 0, 0),
            ColorVector::new(255, 0, 0),
            ColorVector::new(0, 255, 0),
            ColorVector::new(0, 0, 255),
        ];

        let res = kmeans(&vectors, 3, 100, 42).unwrap();
        assert_eq!(res.clusters.len(), 3);
        assert_eq!(res.total(), 4);

        let mut sizes: Vec<usize> = res.clusters.iter().map(|c| c.size).collect();
        sizes.sort();
        assert_eq!(sizes, vec![1, 1, 2]);

        for expected in [[255.0, 0.0, 0.0], [0.0, 255.0, 0.0], [0.0, 0.0, 255.0]] {
            assert!(res.clusters.iter().any(|c| approx(&c.centroid, &expected)));
        }
        let red = res
            .clusters
            .iter()
            .find(|c| approx(&c.centroid, &[255.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(red.size, 2);
    }

    #[test]
    fn single_cluster_is_the_mean() {
        let vectors = vec![
            ColorVector::new(0, 0, 0),
            ColorVector::new(10, 20, 30),
            ColorVector::new(20, 40, 61),
        ];

        let res = kmeans(&vectors, 1, 100, 7).unwrap();
        assert_eq!(res.clusters.len(), 1);
        assert_eq!(res.clusters[0].size, 3);
        assert!(approx(
            &res.clusters[0].centroid,
            &[10.0, 20.0, 91.0 / 3.0]
        ));
    }

    #[test]
    fn more_clusters_than_distinct_colors() {
        let vectors = vec![ColorVector::new(12, 34, 56); 16];

        let res = kmeans(&vectors, 5, 100, 42).unwrap();
        assert_eq!(res.clusters.len(), 5);
        assert_eq!(res.total(), 16);
        assert_eq!(res.clusters[0].size, 16);
        for cluster in &res.clusters[1..] {
            assert_eq!(cluster.size, 0);
            assert!(approx(&cluster.centroid, &[12.0, 34.0, 56.0]));
        }
    }

    #[test]
    fn more_clusters_than_vectors() {
        let vectors = vec![ColorVector::new(0, 0, 0), ColorVector::new(255, 255, 255)];
        let res = kmeans(&vectors, 10, 100, 1).unwrap();
        assert_eq!(res.clusters.len(), 10);
        assert_eq!(res.total(), 2);
        assert_eq!(res.clusters.iter().filter(|c| c.size == 1).count(), 2);
    }

    #[test]
    fn sizes_sum_to_input_for_every_k() {
        let vectors: Vec<ColorVector> = (0..300u32)
            .map(|i| ColorVector::new((i * 7 % 256) as u8, (i * 13 % 256) as u8, (i % 256) as u8))
            .collect();

        for k in 1..=10 {
            let res = kmeans(&vectors, k, 50, 42).unwrap();
            assert_eq!(res.clusters.len(), k);
            assert_eq!(res.total(), vectors.len());
        }
    }

    #[test]
    fn same_seed_same_result() {
        let vectors: Vec<ColorVector> = (0..200u32)
            .map(|i| ColorVector::new((i % 256) as u8, (255 - i % 256) as u8, (i * 3 % 256) as u8))
            .collect();

        let a = kmeans(&vectors, 4, 100, 99).unwrap();
        let b = kmeans(&vectors, 4, 100, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn iteration_cap_still_accounts_for_every_vector() {
        let vectors: Vec<ColorVector> = (0..100u32)
            .map(|i| ColorVector::new((i * 5 % 256) as u8, 0, (i * 11 % 256) as u8))
            .collect();

        let res = kmeans(&vectors, 6, 1, 3).unwrap();
        assert_eq!(res.iterations, 1);
        assert_eq!(res.total(), 100);
    }

    #[test]
    fn rejects_zero_k_and_empty_input() {
        let vectors = vec![ColorVector::new(1, 2, 3)];
        assert!(matches!(
            kmeans(&vectors, 0, 10, 0),
            Err(ColorError::InvalidColorCount { .. })
        ));
        assert!(matches!(kmeans(&[], 3, 10, 0), Err(ColorError::EmptyInput)));
    }
}
