use itertools::Itertools;
use log::{debug, info, trace};
use phom::{err, Index, Result};
use phom_matrix::{BoundaryMatrix, ColumnStore};
use super::{reduce_column, PivotLookup, Reduction, Stats};

/// Reduction with clearing.
/// 
/// Columns are reduced in bands of decreasing degree. Once `(p, j)` is
/// found, column `p` is known to reduce to zero, so it is cleared right
/// away and skipped when its own band is reached.
/// 
/// The degree of a column is the dimension of its simplex, or the
/// codimension for a dualized matrix. The matrix must be graded: all
/// entries of a column of degree `d` have degree `d - 1`. The simplices
/// of one dimension need not be contiguous in the filtration.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwistReduction;

impl Reduction for TwistReduction {
    fn name(&self) -> &'static str {
        "twist"
    }

    fn reduce<S>(&self, m: &mut BoundaryMatrix<S>) -> Result<Vec<(S::Index, S::Index)>>
    where S: ColumnStore {
        let n = m.num_columns();

        info!("reduce (twist): {n} columns ..");

        let degs = degrees(m);
        check_graded(m, &degs)?;

        let bands = m.indices().into_group_map_by(|j| degs[j.as_usize()]);

        let mut lookup = PivotLookup::new(n);
        let mut resolved = vec![false; n];
        let mut stats = Stats::default();
        let mut pairs = vec![];

        for d in bands.keys().copied().sorted().rev() { 
            if d == 0 { 
                continue
            }

            trace!("  band {d}: {} columns.", bands[&d].len());

            for &j in bands[&d].iter() { 
                if resolved[j.as_usize()] { 
                    stats.skipped += 1;
                    continue
                }

                if let Some(p) = reduce_column(m, j, &lookup, &mut stats) { 
                    lookup.set(p, j);
                    pairs.push((p, j));

                    m.clear_column(p);
                    resolved[p.as_usize()] = true;
                    stats.cleared += 1;
                }
            }
        }

        debug!(
            "reduce (twist): {} pairs, {} column additions, {} cleared, {} skipped.", 
            pairs.len(), stats.additions, stats.cleared, stats.skipped
        );

        debug_assert_eq!(lookup.count(), pairs.len());

        Ok(pairs)
    }
}

// Degrees are read before any column is modified.
fn degrees<S>(m: &BoundaryMatrix<S>) -> Vec<usize>
where S: ColumnStore { 
    if !m.is_dualized() { 
        m.indices().map(|j| m.dimension_of(j)).collect()
    } else { 
        // column j of the dual is the coboundary of the simplex whose
        // boundary is row j.
        let dims = m.row_counts().into_iter().map(|c| c.saturating_sub(1)).collect_vec();
        let top = dims.iter().max().copied().unwrap_or(0);
        dims.into_iter().map(|d| top - d).collect()
    }
}

fn check_graded<S>(m: &BoundaryMatrix<S>, degs: &[usize]) -> Result<()>
where S: ColumnStore { 
    for j in m.indices() { 
        let d = degs[j.as_usize()];
        for i in m.column(j) { 
            let e = degs[i.as_usize()];
            if e + 1 != d { 
                return err!(
                    Precondition, 
                    "twist reduction needs a graded matrix: column {j} has degree {d}, its row {i} has degree {e}"
                );
            }
        }
    }
    Ok(())
}
