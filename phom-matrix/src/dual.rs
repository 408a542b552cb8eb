use log::trace;
use phom::Index;
use crate::{BoundaryMatrix, ColumnStore};

/// The anti-transpose of `m`: entry `r` of column `c` becomes entry
/// `n - 1 - c` of column `n - 1 - r`. The `dualized` flag of the result
/// is the negation of that of `m`, so dualizing twice gives back `m`.
pub fn dualize<S>(m: &BoundaryMatrix<S>) -> BoundaryMatrix<S>
where S: ColumnStore { 
    let n = m.num_columns();

    trace!("dualize: {n} columns, {} entries.", m.num_entries());

    // visiting columns from right to left keeps each new column sorted.
    let mut cols = vec![vec![]; n];
    for c in m.indices().rev() { 
        let c_dual = c.reversed(n);
        for r in m.column(c) { 
            cols[r.reversed(n).as_usize()].push(c_dual);
        }
    }

    let mut res = BoundaryMatrix::new(n);
    for (j, col) in cols.into_iter().enumerate() { 
        res.set_sorted_column(S::Index::from_usize(j), col);
    }
    res.set_dualized(!m.is_dualized());
    res
}

#[cfg(test)]
mod tests { 
    use rand::Rng;
    use super::*;
    use crate::sparse::VecStore;

    type M = BoundaryMatrix<VecStore<u32>>;

    fn triangle() -> M { 
        M::from_columns(vec![
            vec![], vec![], vec![],
            vec![0, 1], vec![0, 2], vec![1, 2],
            vec![3, 4, 5]
        ]).unwrap()
    }

    fn random_triangular(n: usize, density: f64) -> M { 
        let mut rng = rand::thread_rng();
        M::from_columns((0..n).map(|j| 
            (0..j as u32).filter(|_| rng.gen_bool(density)).collect::<Vec<_>>()
        ).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn dualize_triangle() { 
        let m = triangle();
        let d = dualize(&m);

        assert!(d.is_dualized());
        assert_eq!(d.num_columns(), 7);
        assert_eq!(d.column(0), Vec::<u32>::new());
        assert_eq!(d.column(1), vec![0]);
        assert_eq!(d.column(2), vec![0]);
        assert_eq!(d.column(3), vec![0]);
        assert_eq!(d.column(4), vec![1, 2]);
        assert_eq!(d.column(5), vec![1, 3]);
        assert_eq!(d.column(6), vec![2, 3]);
    }

    #[test]
    fn involution() { 
        let m = triangle();
        let dd = dualize(&dualize(&m));
        assert_eq!(dd, m);
        assert!(!dd.is_dualized());
    }

    #[test]
    fn involution_random() { 
        for _ in 0..20 { 
            let m = random_triangular(30, 0.2);
            let d = dualize(&m);
            assert_eq!(d.num_entries(), m.num_entries());
            assert_eq!(dualize(&d), m);
        }
    }

    #[test]
    fn dual_is_triangular() { 
        let m = random_triangular(40, 0.3);
        let d = dualize(&m);
        for j in d.indices() { 
            assert!(d.column(j).iter().all(|&i| i < j));
        }
    }

    #[test]
    fn toggles_flag() { 
        let mut m = triangle();
        m.set_dualized(true);
        let d = dualize(&m);
        assert!(!d.is_dualized());
    }

    #[test]
    fn empty() { 
        let m = M::new(0);
        let d = dualize(&m);
        assert_eq!(d.num_columns(), 0);
        assert!(d.is_dualized());
    }
}
