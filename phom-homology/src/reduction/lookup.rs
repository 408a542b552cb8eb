use phom::Index;

/// Owner of each pivot row: the column whose reduced form currently
/// ends at that row.
#[derive(Clone, Debug)]
pub(crate) struct PivotLookup<I> { 
    owners: Vec<Option<I>>
}

impl<I> PivotLookup<I>
where I: Index { 
    pub fn new(n: usize) -> Self { 
        Self { owners: vec![None; n] }
    }

    pub fn owner(&self, pivot: I) -> Option<I> { 
        self.owners[pivot.as_usize()]
    }

    pub fn set(&mut self, pivot: I, col: I) { 
        debug_assert!(self.owners[pivot.as_usize()].is_none(), "pivot {pivot} is already owned");
        self.owners[pivot.as_usize()] = Some(col);
    }

    pub fn count(&self) -> usize { 
        self.owners.iter().filter(|o| o.is_some()).count()
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn set_and_get() { 
        let mut l = PivotLookup::<u32>::new(4);
        assert_eq!(l.owner(2), None);

        l.set(2, 3);
        assert_eq!(l.owner(2), Some(3));
        assert_eq!(l.count(), 1);
    }
}
