use std::ops::{Add, AddAssign};
use itertools::{EitherOrBoth, Itertools};
use phom::{err, Index, Result};

/// A sparse column over F₂: the sorted set of its non-zero rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpCol<I> { 
    entries: Vec<I>
}

impl<I> SpCol<I>
where I: Index { 
    pub fn new() -> Self { 
        Self { entries: vec![] }
    }

    pub fn from_sorted(entries: Vec<I>) -> Self { 
        debug_assert!(entries.windows(2).all(|w| w[0] < w[1]), "entries not strictly sorted: {entries:?}");
        Self { entries }
    }

    /// Sorts the given rows. Repeated rows are rejected.
    pub fn from_entries<Itr>(entries: Itr) -> Result<Self>
    where Itr: IntoIterator<Item = I> {
        let entries = entries.into_iter().sorted().collect_vec();
        if let Some(w) = entries.windows(2).find(|w| w[0] == w[1]) { 
            return err!(Precondition, "duplicate row index {}", w[0]);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[I] { 
        &self.entries
    }

    pub fn into_vec(self) -> Vec<I> { 
        self.entries
    }

    pub fn len(&self) -> usize { 
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.entries.is_empty()
    }

    pub fn pivot(&self) -> Option<I> { 
        self.entries.last().copied()
    }

    pub fn contains(&self, i: I) -> bool { 
        self.entries.binary_search(&i).is_ok()
    }

    pub fn clear(&mut self) { 
        self.entries.clear()
    }

    pub fn iter(&self) -> impl Iterator<Item = I> + '_ { 
        self.entries.iter().copied()
    }

    /// Symmetric difference of the two row sets, computed by a single
    /// merge pass.
    pub fn sym_diff(&self, other: &SpCol<I>) -> SpCol<I> { 
        let entries = self.entries.iter().merge_join_by(other.entries.iter(), |a, b| a.cmp(b)).filter_map(|e| 
            match e { 
                EitherOrBoth::Left(&i) | EitherOrBoth::Right(&i) => Some(i),
                EitherOrBoth::Both(_, _) => None
            }
        ).collect();
        Self { entries }
    }
}

impl<'a, I> AddAssign<&'a SpCol<I>> for SpCol<I>
where I: Index {
    fn add_assign(&mut self, rhs: &'a SpCol<I>) {
        *self = self.sym_diff(rhs)
    }
}

impl<'a, 'b, I> Add<&'b SpCol<I>> for &'a SpCol<I>
where I: Index {
    type Output = SpCol<I>;
    fn add(self, rhs: &'b SpCol<I>) -> Self::Output {
        self.sym_diff(rhs)
    }
}

impl<I> FromIterator<I> for SpCol<I>
where I: Index {
    /// Repeated rows cancel, as they would in F₂.
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let entries = iter.into_iter().counts().into_iter().filter_map(|(i, c)| 
            (c % 2 == 1).then_some(i)
        ).sorted().collect();
        Self { entries }
    }
}
