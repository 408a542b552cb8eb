use log::{debug, info};
use phom::Result;
use phom_matrix::{BoundaryMatrix, ColumnStore};
use super::{reduce_column, PivotLookup, Reduction, Stats};

/// Reduces columns from left to right.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardReduction;

impl Reduction for StandardReduction {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn reduce<S>(&self, m: &mut BoundaryMatrix<S>) -> Result<Vec<(S::Index, S::Index)>>
    where S: ColumnStore {
        let n = m.num_columns();

        info!("reduce (standard): {n} columns ..");

        let mut lookup = PivotLookup::new(n);
        let mut stats = Stats::default();
        let mut pairs = vec![];

        for j in m.indices() { 
            if let Some(p) = reduce_column(m, j, &lookup, &mut stats) { 
                lookup.set(p, j);
                pairs.push((p, j));
            }
        }

        debug!("reduce (standard): {} pairs, {} column additions.", pairs.len(), stats.additions);

        debug_assert_eq!(lookup.count(), pairs.len());

        Ok(pairs)
    }
}
