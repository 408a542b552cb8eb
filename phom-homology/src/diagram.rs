use std::cmp::Ordering;
use std::fmt::Display;
use log::info;
use phom::{err, ensure, FiltrationValue, Index, Result};
use crate::{PersistencePairing, SimplexData};

/// A point `(x, y)` of a persistence diagram: the values at which a
/// feature is born and dies. Unpaired points die at infinity.
/// 
/// Serialized as `{"x": .., "y": ..}` with `y = null` for an unpaired
/// point, since JSON has no infinity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    from = "PointRepr<T>", into = "PointRepr<T>",
    bound(
        serialize = "T: FiltrationValue + serde::Serialize", 
        deserialize = "T: FiltrationValue + serde::Deserialize<'de>"
    )
))]
pub struct Point<T> { 
    x: T,
    y: T
}

impl<T> Point<T>
where T: FiltrationValue { 
    pub fn new(x: T, y: T) -> Self { 
        Self { x, y }
    }

    pub fn unpaired(x: T) -> Self { 
        Self { x, y: T::infinity() }
    }

    pub fn x(&self) -> T { 
        self.x
    }

    pub fn y(&self) -> T { 
        self.y
    }

    pub fn persistence(&self) -> T { 
        if self.is_unpaired() { 
            T::infinity()
        } else { 
            self.y - self.x
        }
    }

    pub fn is_unpaired(&self) -> bool { 
        self.y.is_infinite()
    }

    pub fn is_diagonal(&self) -> bool { 
        self.x == self.y
    }

    fn cmp_xy(&self, other: &Self) -> Ordering { 
        let cmp = |a: T, b: T| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        cmp(self.x, other.x).then_with(|| cmp(self.y, other.y))
    }
}

impl<T> Display for Point<T>
where T: FiltrationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unpaired() { 
            write!(f, "{}\tinf", self.x)
        } else { 
            write!(f, "{}\t{}", self.x, self.y)
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PointRepr<T> { 
    x: T,
    y: Option<T>
}

#[cfg(feature = "serde")]
impl<T> From<Point<T>> for PointRepr<T>
where T: FiltrationValue {
    fn from(p: Point<T>) -> Self {
        let y = if p.is_unpaired() { None } else { Some(p.y) };
        Self { x: p.x, y }
    }
}

#[cfg(feature = "serde")]
impl<T> From<PointRepr<T>> for Point<T>
where T: FiltrationValue {
    fn from(p: PointRepr<T>) -> Self {
        match p.y { 
            Some(y) => Point::new(p.x, y),
            None    => Point::unpaired(p.x)
        }
    }
}

/// The points of one homological dimension.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "T: FiltrationValue + serde::Serialize", 
    deserialize = "T: FiltrationValue + serde::Deserialize<'de>"
)))]
pub struct PersistenceDiagram<T> { 
    dimension: usize,
    points: Vec<Point<T>>
}

impl<T> PersistenceDiagram<T>
where T: FiltrationValue { 
    pub fn new(dimension: usize) -> Self { 
        Self { dimension, points: vec![] }
    }

    pub fn dimension(&self) -> usize { 
        self.dimension
    }

    pub fn add(&mut self, x: T, y: T) { 
        self.points.push(Point::new(x, y))
    }

    pub fn add_unpaired(&mut self, x: T) { 
        self.points.push(Point::unpaired(x))
    }

    pub fn points(&self) -> &[Point<T>] { 
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> { 
        self.points.iter()
    }

    pub fn len(&self) -> usize { 
        self.points.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.points.is_empty()
    }

    /// Number of unpaired points.
    pub fn betti(&self) -> usize { 
        self.points.iter().filter(|p| p.is_unpaired()).count()
    }

    pub fn remove_diagonal(&mut self) { 
        self.points.retain(|p| !p.is_diagonal())
    }

    pub fn remove_unpaired(&mut self) { 
        self.points.retain(|p| !p.is_unpaired())
    }

    /// Keeps one copy of each point. Points end up sorted by `(x, y)`.
    pub fn remove_duplicates(&mut self) { 
        self.points.sort_by(|p, q| p.cmp_xy(q));
        self.points.dedup();
    }

    /// Appends the points of `other`, duplicates included.
    pub fn merge(&mut self, other: &PersistenceDiagram<T>) { 
        self.points.extend_from_slice(&other.points)
    }
}

impl<'a, T> IntoIterator for &'a PersistenceDiagram<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> Display for PersistenceDiagram<T>
where T: FiltrationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in self.points.iter() { 
            writeln!(f, "{p}")?;
        }
        Ok(())
    }
}

/// One diagram for every dimension `0 ..= source.max_dimension()`.
/// 
/// The dimension of a pair is that of its birth simplex. Values must
/// not decrease from birth to death.
pub fn make_persistence_diagrams<I, T, D>(pairing: &PersistencePairing<I>, source: &D) -> Result<Vec<PersistenceDiagram<T>>>
where I: Index, T: FiltrationValue, D: SimplexData<T> { 
    let n = source.len();
    let top = source.max_dimension();
    let mut diagrams = (0..=top).map(PersistenceDiagram::new).collect::<Vec<_>>();

    for pair in pairing.iter() { 
        let b = pair.birth().as_usize();
        ensure!(b < n, Precondition, "index {b} out of range (num simplices: {n})");

        let dim = source.dimension(b);
        let x = source.value(b);
        ensure!(dim <= top, Precondition, "simplex {b} has dimension {dim} > {top}");

        match pair.death() { 
            Some(d) => { 
                let d = d.as_usize();
                ensure!(d < n, Precondition, "index {d} out of range (num simplices: {n})");

                let y = source.value(d);
                match x.partial_cmp(&y) { 
                    Some(Ordering::Less | Ordering::Equal) => diagrams[dim].add(x, y),
                    _ => return err!(Precondition, "value {y} of simplex {d} is smaller than value {x} of simplex {b}")
                }
            },
            None => diagrams[dim].add_unpaired(x)
        }
    }

    info!(
        "diagrams: {}", 
        diagrams.iter().map(|d| format!("dim {}: {} points", d.dimension(), d.len())).collect::<Vec<_>>().join(", ")
    );

    Ok(diagrams)
}
