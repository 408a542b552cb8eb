use phom::{ensure, Index, Result};
use crate::ColumnStore;
use super::SpCol;

/// Stores every column as a sorted vector of row indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecStore<I> { 
    cols: Vec<SpCol<I>>
}

impl<I> VecStore<I>
where I: Index { 
    pub fn col(&self, j: I) -> &SpCol<I> { 
        &self.cols[j.as_usize()]
    }
}

impl<I> ColumnStore for VecStore<I>
where I: Index {
    type Index = I;

    fn set_num_columns(&mut self, n: usize) {
        self.cols.clear();
        self.cols.resize_with(n, SpCol::new);
    }

    fn num_columns(&self) -> usize {
        self.cols.len()
    }

    fn set_column<Itr>(&mut self, j: I, indices: Itr) -> Result<()>
    where Itr: IntoIterator<Item = I> {
        let n = self.num_columns();
        ensure!(j.as_usize() < n, Precondition, "column {j} out of range (num columns: {n})");

        let col = SpCol::from_entries(indices)?;
        if let Some(p) = col.pivot() { 
            ensure!(p < j, Precondition, "column {j} refers to row {p}, which is not smaller than {j}");
        }

        self.cols[j.as_usize()] = col;
        Ok(())
    }

    fn set_sorted_column(&mut self, j: I, entries: Vec<I>) {
        debug_assert!(entries.last().map(|&p| p < j).unwrap_or(true));
        self.cols[j.as_usize()] = SpCol::from_sorted(entries);
    }

    fn column(&self, j: I) -> Vec<I> {
        self.col(j).entries().to_vec()
    }

    fn column_len(&self, j: I) -> usize {
        self.col(j).len()
    }

    fn max_index(&self, j: I) -> Option<I> {
        self.col(j).pivot()
    }

    fn add_columns(&mut self, source: I, target: I) {
        let (s, t) = (source.as_usize(), target.as_usize());
        let res = self.cols[t].sym_diff(&self.cols[s]);
        self.cols[t] = res;
    }

    fn clear_column(&mut self, j: I) {
        self.cols[j.as_usize()].clear()
    }
}
