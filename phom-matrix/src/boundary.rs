use delegate::delegate;
use itertools::Itertools;
use phom::{ensure, Index, Result};
use crate::ColumnStore;
use crate::sparse::VecStore;

/// A boundary matrix over F₂, one column per simplex in filtration
/// order.
/// 
/// Column `j` holds the indices of the faces of simplex `j`, each
/// strictly smaller than `j`. The `dualized` flag marks a matrix that
/// represents the anti-transposed (coboundary) problem; it only affects
/// how pairs are read off after reduction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryMatrix<S = VecStore<u32>> { 
    store: S,
    dualized: bool
}

impl<S> BoundaryMatrix<S>
where S: ColumnStore { 
    /// Panics if `num_columns` exceeds the range of `S::Index`, see
    /// [`BoundaryMatrix::check_num_columns`].
    pub fn new(num_columns: usize) -> Self { 
        assert!(
            S::Index::can_address(num_columns), 
            "{num_columns} columns exceed the range of {}", std::any::type_name::<S::Index>()
        );
        let mut store = S::default();
        store.set_num_columns(num_columns);
        Self { store, dualized: false }
    }

    pub fn from_columns<Itr, C>(cols: Itr) -> Result<Self>
    where 
        Itr: IntoIterator<Item = C>, 
        C: IntoIterator<Item = S::Index>
    {
        let cols = cols.into_iter().collect_vec();
        Self::check_num_columns(cols.len())?;

        let mut m = Self::new(cols.len());

        for (j, c) in cols.into_iter().enumerate() { 
            m.set_column(S::Index::from_usize(j), c)?;
        }

        Ok(m)
    }

    pub fn check_num_columns(n: usize) -> Result<()> { 
        ensure!(
            S::Index::can_address(n), 
            Precondition, "{n} columns exceed the range of {}", std::any::type_name::<S::Index>()
        );
        Ok(())
    }

    delegate! { 
        to self.store { 
            pub fn set_num_columns(&mut self, n: usize);
            pub fn num_columns(&self) -> usize;
            pub fn set_sorted_column(&mut self, j: S::Index, entries: Vec<S::Index>);
            pub fn column(&self, j: S::Index) -> Vec<S::Index>;
            pub fn column_len(&self, j: S::Index) -> usize;
            pub fn max_index(&self, j: S::Index) -> Option<S::Index>;
            pub fn add_columns(&mut self, source: S::Index, target: S::Index);
            pub fn clear_column(&mut self, j: S::Index);
            pub fn dimension_of(&self, j: S::Index) -> usize;
            pub fn dimension(&self) -> usize;
            pub fn is_empty_column(&self, j: S::Index) -> bool;
        }
    }

    pub fn set_column<Itr>(&mut self, j: S::Index, indices: Itr) -> Result<()>
    where Itr: IntoIterator<Item = S::Index> {
        self.store.set_column(j, indices)
    }

    pub fn is_dualized(&self) -> bool { 
        self.dualized
    }

    pub fn set_dualized(&mut self, value: bool) { 
        self.dualized = value
    }

    pub fn indices(&self) -> impl DoubleEndedIterator<Item = S::Index> { 
        (0..self.num_columns()).map(S::Index::from_usize)
    }

    pub fn num_entries(&self) -> usize { 
        self.indices().map(|j| self.column_len(j)).sum()
    }

    pub fn is_zero(&self) -> bool { 
        self.indices().all(|j| self.is_empty_column(j))
    }

    /// Number of entries in each row.
    pub fn row_counts(&self) -> Vec<usize> { 
        let mut counts = vec![0; self.num_columns()];
        for j in self.indices() { 
            for i in self.column(j) { 
                counts[i.as_usize()] += 1;
            }
        }
        counts
    }

    /// Whether every non-empty column has a pivot no other column has.
    pub fn is_reduced(&self) -> bool { 
        self.indices().filter_map(|j| self.max_index(j)).all_unique()
    }
}
