use std::fmt::Display;
use ahash::AHashMap;
use itertools::Itertools;
use phom::{err, ensure, FiltrationValue, Index, Result};
use phom_matrix::{BoundaryMatrix, ColumnStore};
use crate::SimplexData;

pub type Vertex = u32;

/// A simplex given by its (sorted, distinct) vertices, carrying a
/// filtration value.
#[derive(Clone, Debug, PartialEq)]
pub struct Simplex<T> { 
    vertices: Vec<Vertex>,
    value: T
}

impl<T> Simplex<T>
where T: FiltrationValue { 
    pub fn new<Itr>(vertices: Itr, value: T) -> Self
    where Itr: IntoIterator<Item = Vertex> { 
        let vertices = vertices.into_iter().sorted().dedup().collect();
        Self { vertices, value }
    }

    pub fn vertices(&self) -> &[Vertex] { 
        &self.vertices
    }

    pub fn value(&self) -> T { 
        self.value
    }

    pub fn dimension(&self) -> usize { 
        self.vertices.len().saturating_sub(1)
    }

    /// The faces of codimension one. A vertex has none.
    pub fn faces(&self) -> impl Iterator<Item = Vec<Vertex>> + '_ { 
        let k = if self.vertices.len() > 1 { self.vertices.len() } else { 0 };
        (0..k).map(move |i| 
            self.vertices.iter().enumerate().filter(|&(j, _)| j != i).map(|(_, &v)| v).collect()
        )
    }
}

impl<T> From<Vec<Vertex>> for Simplex<T>
where T: FiltrationValue {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices, T::default())
    }
}

impl<T> Display for Simplex<T>
where T: FiltrationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.vertices.iter().join(", "))
    }
}

/// Simplices in filtration order.
/// 
/// Every face of a simplex comes before it and has a value not
/// larger than its own. The complex does not sort its input.
#[derive(Clone, Debug, Default)]
pub struct SimplicialComplex<T> { 
    simplices: Vec<Simplex<T>>,
    index: AHashMap<Vec<Vertex>, usize>
}

impl<T> SimplicialComplex<T>
where T: FiltrationValue { 
    pub fn new<Itr>(simplices: Itr) -> Result<Self>
    where Itr: IntoIterator<Item = Simplex<T>> { 
        let mut res = Self { simplices: vec![], index: AHashMap::new() };
        for s in simplices { 
            res.push(s)?;
        }
        Ok(res)
    }

    /// Appends a simplex after checking that its faces are present.
    pub fn push(&mut self, s: Simplex<T>) -> Result<()> { 
        ensure!(!s.vertices.is_empty(), Precondition, "empty simplex");
        ensure!(!self.index.contains_key(&s.vertices), Precondition, "duplicate simplex {s}");

        for face in s.faces() { 
            let Some(&i) = self.index.get(&face) else { 
                return err!(Precondition, "face {{{}}} of {s} does not precede it", face.iter().join(", "))
            };

            let v = self.simplices[i].value;
            if !matches!(v.partial_cmp(&s.value), Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)) { 
                return err!(Precondition, "face {} of {s} has value {v} > {}", self.simplices[i], s.value)
            }
        }

        self.index.insert(s.vertices.clone(), self.simplices.len());
        self.simplices.push(s);
        Ok(())
    }

    pub fn len(&self) -> usize { 
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.simplices.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Simplex<T>> { 
        self.simplices.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Simplex<T>> { 
        self.simplices.iter()
    }

    pub fn index_of(&self, vertices: &[Vertex]) -> Option<usize> { 
        self.index.get(vertices).copied()
    }

    pub fn max_dimension(&self) -> usize { 
        self.simplices.iter().map(|s| s.dimension()).max().unwrap_or(0)
    }
}

impl<T> SimplexData<T> for SimplicialComplex<T>
where T: FiltrationValue {
    fn len(&self) -> usize {
        self.simplices.len()
    }

    fn dimension(&self, i: usize) -> usize {
        self.simplices[i].dimension()
    }

    fn value(&self, i: usize) -> T {
        self.simplices[i].value
    }
}

impl<T> Display for SimplicialComplex<T>
where T: FiltrationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in self.simplices.iter() { 
            writeln!(f, "{s} ({})", s.value)?;
        }
        Ok(())
    }
}

/// Column `j` holds the indices of the faces of the `j`-th simplex.
pub fn make_boundary_matrix<S, T>(k: &SimplicialComplex<T>) -> Result<BoundaryMatrix<S>>
where S: ColumnStore, T: FiltrationValue { 
    BoundaryMatrix::<S>::check_num_columns(k.len())?;

    let mut m = BoundaryMatrix::new(k.len());

    for (j, s) in k.iter().enumerate() { 
        let faces = s.faces().map(|face| 
            k.index_of(&face).map(S::Index::from_usize).ok_or_else(|| 
                phom::Error::Precondition(format!("face of {s} is missing"))
            )
        ).collect::<Result<Vec<_>>>()?;

        m.set_column(S::Index::from_usize(j), faces)?;
    }

    Ok(m)
}

#[cfg(test)]
mod tests { 
    use phom_matrix::sparse::VecStore;
    use super::*;

    type M = BoundaryMatrix<VecStore<u32>>;

    fn triangle() -> SimplicialComplex<f64> { 
        SimplicialComplex::new(
            [vec![0], vec![1], vec![2], vec![0, 1], vec![0, 2], vec![1, 2], vec![0, 1, 2]].map(Simplex::from)
        ).unwrap()
    }

    #[test]
    fn simplex() { 
        let s = Simplex::new([2, 0, 1, 0], 1.5);
        assert_eq!(s.vertices(), &[0, 1, 2]);
        assert_eq!(s.dimension(), 2);
        assert_eq!(s.value(), 1.5);
        assert_eq!(s.to_string(), "{0, 1, 2}");
    }

    #[test]
    fn faces() { 
        let s = Simplex::new([0, 1, 2], 0.0);
        assert_eq!(s.faces().collect::<Vec<_>>(), vec![vec![1, 2], vec![0, 2], vec![0, 1]]);

        let v = Simplex::new([3], 0.0);
        assert_eq!(v.faces().count(), 0);
    }

    #[test]
    fn complex() { 
        let k = triangle();
        assert_eq!(k.len(), 7);
        assert_eq!(k.max_dimension(), 2);
        assert_eq!(k.index_of(&[0, 2]), Some(4));
        assert_eq!(k.index_of(&[0, 3]), None);
    }

    #[test]
    fn missing_face() { 
        let e = SimplicialComplex::<f64>::new(
            [vec![0], vec![1], vec![0, 1, 2]].map(Simplex::from)
        ).unwrap_err();
        assert!(e.is_precondition());
    }

    #[test]
    fn face_after_simplex() { 
        let e = SimplicialComplex::<f64>::new(
            [vec![0], vec![0, 1], vec![1]].map(Simplex::from)
        ).unwrap_err();
        assert!(e.is_precondition());
    }

    #[test]
    fn duplicate_simplex() { 
        let e = SimplicialComplex::<f64>::new(
            [vec![0], vec![0]].map(Simplex::from)
        ).unwrap_err();
        assert!(e.is_precondition());
    }

    #[test]
    fn decreasing_value() { 
        let e = SimplicialComplex::new([
            Simplex::new([0], 1.0),
            Simplex::new([1], 0.0),
            Simplex::new([0, 1], 0.5),
        ]).unwrap_err();
        assert!(e.is_precondition());
    }

    #[test]
    fn boundary_matrix() { 
        let k = triangle();
        let m: M = make_boundary_matrix(&k).unwrap();

        assert_eq!(m.num_columns(), 7);
        assert_eq!(m.column(3), vec![0, 1]);
        assert_eq!(m.column(5), vec![1, 2]);
        assert_eq!(m.column(6), vec![3, 4, 5]);
        assert_eq!(m.dimension(), 2);
    }

    #[test]
    fn boundary_matrix_narrow_index() { 
        let k = SimplicialComplex::new((0..65_537).map(|v| Simplex::new([v], 0.0))).unwrap();
        let e = make_boundary_matrix::<VecStore<u16>, f64>(&k).unwrap_err();
        assert!(e.is_precondition());

        let m: M = make_boundary_matrix(&k).unwrap();
        assert_eq!(m.num_columns(), 65_537);
    }

    #[test]
    fn display() { 
        let k = SimplicialComplex::new([
            Simplex::new([0], 0.0),
            Simplex::new([1], 0.0),
            Simplex::new([0, 1], 1.0),
        ]).unwrap();
        assert_eq!(k.to_string(), "{0} (0)\n{1} (0)\n{0, 1} (1)\n");
    }
}
