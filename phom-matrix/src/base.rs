use phom::{Index, Result};

/// Column-wise storage of a matrix over F₂.
/// 
/// Column `j` is a set of row indices. Every operation addresses
/// columns by index; out of range columns are a programming error
/// and panic, as slice indexing does.
pub trait ColumnStore: Default + Clone + Send + Sync {
    type Index: Index;

    /// Reinitializes the store with `n` empty columns.
    fn set_num_columns(&mut self, n: usize);
    fn num_columns(&self) -> usize;

    /// Replaces column `j`. Entries may come in any order; they must be
    /// distinct and strictly smaller than `j`.
    fn set_column<Itr>(&mut self, j: Self::Index, indices: Itr) -> Result<()>
    where Itr: IntoIterator<Item = Self::Index>;

    /// Replaces column `j` with entries that are already sorted,
    /// distinct and in range. Only checked in debug builds.
    fn set_sorted_column(&mut self, j: Self::Index, entries: Vec<Self::Index>);

    fn column(&self, j: Self::Index) -> Vec<Self::Index>;
    fn column_len(&self, j: Self::Index) -> usize;

    /// The pivot (maximum row index) of column `j`, `None` if the column
    /// is empty.
    fn max_index(&self, j: Self::Index) -> Option<Self::Index>;

    /// `col[target] += col[source]` over F₂.
    fn add_columns(&mut self, source: Self::Index, target: Self::Index);

    fn clear_column(&mut self, j: Self::Index);

    /// Dimension of the simplex whose boundary is column `j`.
    /// An empty column is a vertex.
    fn dimension_of(&self, j: Self::Index) -> usize { 
        self.column_len(j).saturating_sub(1)
    }

    fn dimension(&self) -> usize { 
        (0..self.num_columns()).map(|j| 
            self.dimension_of(Self::Index::from_usize(j))
        ).max().unwrap_or(0)
    }

    fn is_empty_column(&self, j: Self::Index) -> bool { 
        self.column_len(j) == 0
    }
}
