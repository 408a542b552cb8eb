//! Column reduction of boundary matrices over F₂.
//! 
//! A reduction adds columns into later ones until no two non-empty
//! columns share a pivot. Every column `j` that ends with a pivot `p`
//! gives a raw pair `(p, j)`. The matrix is reduced in place; clone it
//! beforehand if the original is still needed.

mod lookup;
mod standard;
mod twist;

pub use standard::StandardReduction;
pub use twist::TwistReduction;

use log::trace;
use phom::{Index, Result};
use phom_matrix::{BoundaryMatrix, ColumnStore};
use lookup::PivotLookup;

pub trait Reduction: Send + Sync { 
    fn name(&self) -> &'static str;

    /// Reduces `m` in place and returns the pairs `(pivot, column)` in
    /// the order they were found.
    fn reduce<S>(&self, m: &mut BoundaryMatrix<S>) -> Result<Vec<(S::Index, S::Index)>>
    where S: ColumnStore;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Stats { 
    pub additions: usize,
    pub cleared: usize,
    pub skipped: usize,
}

// Adds the current owners of the pivot of column `j` into it, until
// the pivot is either absent or unowned.
fn reduce_column<S>(m: &mut BoundaryMatrix<S>, j: S::Index, lookup: &PivotLookup<S::Index>, stats: &mut Stats) -> Option<S::Index>
where S: ColumnStore { 
    let mut pivot = m.max_index(j);

    while let Some(p) = pivot { 
        let Some(k) = lookup.owner(p) else { break };

        debug_assert!(k < j);
        trace!("  col {j}: pivot {p} owned by {k}.");

        m.add_columns(k, j);
        stats.additions += 1;
        pivot = m.max_index(j);
    }

    pivot
}
