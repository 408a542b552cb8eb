#![allow(unused)]
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use phom_homology::{Simplex, SimplicialComplex};

/// The 2-skeleton of the full simplex on `n` vertices, filtered like a
/// Vietoris-Rips complex: vertices at 0, edges at random weights, and
/// triangles at the largest weight among their edges.
pub fn random_rips(n: u32, seed: u64) -> SimplicialComplex<f64> { 
    let mut rng = StdRng::seed_from_u64(seed);

    let vertices = (0..n).map(|v| Simplex::new([v], 0.0)).collect_vec();
    let edges = (0..n).tuple_combinations().map(|(u, v)| 
        Simplex::new([u, v], rng.gen_range(1..20) as f64)
    ).collect_vec();
    let weight = |u: u32, v: u32| edges.iter().find(|e| e.vertices() == [u, v]).map(|e| e.value()).unwrap();
    let triangles = (0..n).tuple_combinations().map(|(u, v, w)| { 
        let x = [weight(u, v), weight(u, w), weight(v, w)].into_iter().fold(0.0, f64::max);
        Simplex::new([u, v, w], x)
    }).collect_vec();

    let simplices = vertices.into_iter().chain(edges.clone()).chain(triangles).sorted_by(|s, t| 
        s.value().partial_cmp(&t.value()).unwrap()
            .then(s.dimension().cmp(&t.dimension()))
            .then(s.vertices().cmp(t.vertices()))
    );

    SimplicialComplex::new(simplices).unwrap()
}

/// The boundary of a filled triangle: vertices at 0, edges at 1 and
/// the triangle at 2.
pub fn triangle() -> SimplicialComplex<f64> { 
    SimplicialComplex::new([
        Simplex::new([0], 0.0),
        Simplex::new([1], 0.0),
        Simplex::new([2], 0.0),
        Simplex::new([0, 1], 1.0),
        Simplex::new([0, 2], 1.0),
        Simplex::new([1, 2], 1.0),
        Simplex::new([0, 1, 2], 2.0),
    ]).unwrap()
}

pub fn binom(n: usize, k: usize) -> usize { 
    if k > n { return 0 }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
