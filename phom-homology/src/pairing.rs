use std::fmt::Display;
use log::info;
use phom::{ensure, Index, Result};
use phom_matrix::{BoundaryMatrix, ColumnStore};
use crate::reduction::Reduction;

/// A (birth, death) pair of simplex indices. An essential feature
/// never dies and has no death index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    try_from = "PairRepr<I>",
    bound(deserialize = "I: Index + serde::Deserialize<'de>")
))]
pub struct PersistencePair<I> { 
    birth: I,
    death: Option<I>
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PairRepr<I> { 
    birth: I,
    death: Option<I>
}

#[cfg(feature = "serde")]
impl<I> TryFrom<PairRepr<I>> for PersistencePair<I>
where I: Index {
    type Error = phom::Error;

    fn try_from(p: PairRepr<I>) -> Result<Self> {
        PersistencePair::try_new(p.birth, p.death)
    }
}

impl<I> PersistencePair<I>
where I: Index { 
    pub fn new(birth: I, death: I) -> Self { 
        assert!(birth < death, "birth {birth} must precede death {death}");
        Self { birth, death: Some(death) }
    }

    pub fn try_new(birth: I, death: Option<I>) -> Result<Self> { 
        if let Some(d) = death { 
            ensure!(birth < d, Precondition, "birth {birth} must precede death {d}");
        }
        Ok(Self { birth, death })
    }

    pub fn essential(birth: I) -> Self { 
        Self { birth, death: None }
    }

    pub fn birth(&self) -> I { 
        self.birth
    }

    pub fn death(&self) -> Option<I> { 
        self.death
    }

    pub fn is_essential(&self) -> bool { 
        self.death.is_none()
    }
}

impl<I> Display for PersistencePair<I>
where I: Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.death { 
            Some(d) => write!(f, "{}\t{}", self.birth, d),
            None    => write!(f, "{}\tinf", self.birth)
        }
    }
}

/// All persistence pairs of a filtration, sorted by birth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    from = "PairingRepr<I>",
    bound(deserialize = "I: Index + serde::Deserialize<'de>")
))]
pub struct PersistencePairing<I> { 
    pairs: Vec<PersistencePair<I>>
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "I: Index + serde::Deserialize<'de>"))]
struct PairingRepr<I> { 
    pairs: Vec<PersistencePair<I>>
}

#[cfg(feature = "serde")]
impl<I> From<PairingRepr<I>> for PersistencePairing<I>
where I: Index {
    fn from(p: PairingRepr<I>) -> Self {
        PersistencePairing::new(p.pairs)
    }
}

impl<I> PersistencePairing<I>
where I: Index { 
    pub fn new<Itr>(pairs: Itr) -> Self
    where Itr: IntoIterator<Item = PersistencePair<I>> { 
        let mut pairs: Vec<_> = pairs.into_iter().collect();
        pairs.sort();
        Self { pairs }
    }

    pub fn len(&self) -> usize { 
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersistencePair<I>> { 
        self.pairs.iter()
    }

    pub fn contains(&self, birth: I, death: Option<I>) -> bool { 
        self.pairs.contains(&PersistencePair { birth, death })
    }

    pub fn paired(&self) -> impl Iterator<Item = (I, I)> + '_ { 
        self.pairs.iter().filter_map(|p| p.death.map(|d| (p.birth, d)))
    }

    pub fn essentials(&self) -> impl Iterator<Item = I> + '_ { 
        self.pairs.iter().filter(|p| p.is_essential()).map(|p| p.birth)
    }
}

impl<I> IntoIterator for PersistencePairing<I> {
    type Item = PersistencePair<I>;
    type IntoIter = std::vec::IntoIter<PersistencePair<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a, I> IntoIterator for &'a PersistencePairing<I> {
    type Item = &'a PersistencePair<I>;
    type IntoIter = std::slice::Iter<'a, PersistencePair<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl<I> Display for PersistencePairing<I>
where I: Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in self.pairs.iter() { 
            writeln!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Reduces `m` in place and reads off its persistence pairs.
/// 
/// Pairs of a dualized matrix are mapped back to the indices of the
/// original filtration: `(p, j)` becomes `(n - 1 - j, n - 1 - p)`.
/// Every index that is neither a birth nor a death of some pair is an
/// essential feature.
pub fn compute_persistence_pairs<R, S>(reduction: &R, m: &mut BoundaryMatrix<S>) -> Result<PersistencePairing<S::Index>>
where R: Reduction, S: ColumnStore { 
    let n = m.num_columns();
    let raw = reduction.reduce(m)?;
    let dualized = m.is_dualized();

    let mut claimed = vec![false; n];
    let mut pairs = Vec::with_capacity(n - raw.len());

    for (p, j) in raw { 
        let (b, d) = if dualized { 
            (j.reversed(n), p.reversed(n))
        } else { 
            (p, j)
        };
        claimed[b.as_usize()] = true;
        claimed[d.as_usize()] = true;
        pairs.push(PersistencePair::new(b, d));
    }

    let essentials = claimed.iter().enumerate().filter(|&(_, &c)| !c).map(|(i, _)| 
        PersistencePair::essential(S::Index::from_usize(i))
    );
    pairs.extend(essentials);

    let pairing = PersistencePairing::new(pairs);

    info!(
        "pairs ({}{}): {} finite, {} essential.", 
        reduction.name(), if dualized { ", dualized" } else { "" },
        pairing.paired().count(), pairing.essentials().count()
    );

    Ok(pairing)
}
