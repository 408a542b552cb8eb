use std::path::Path;
use std::str::FromStr;
use itertools::Itertools;
use log::info;
use phom::{err, ensure, FiltrationValue, Index, Result};
use phom_matrix::{BoundaryMatrix, ColumnStore};

/// Dimension and filtration value of the simplex behind each index of
/// a boundary matrix.
pub trait SimplexData<T> { 
    fn len(&self) -> usize;
    fn dimension(&self, i: usize) -> usize;
    fn value(&self, i: usize) -> T;

    fn is_empty(&self) -> bool { 
        self.len() == 0
    }

    fn max_dimension(&self) -> usize { 
        (0..self.len()).map(|i| self.dimension(i)).max().unwrap_or(0)
    }
}

/// A plain table of dimensions and values, indexed like the columns of
/// a boundary matrix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filtration<T> { 
    dims: Vec<usize>,
    values: Vec<T>
}

impl<T> Filtration<T>
where T: FiltrationValue { 
    pub fn new(dims: Vec<usize>, values: Vec<T>) -> Result<Self> { 
        ensure!(
            dims.len() == values.len(), 
            Precondition, "{} values given for {} dimensions", values.len(), dims.len()
        );
        Ok(Self { dims, values })
    }

    /// Takes the dimensions from the column sizes of `m`.
    pub fn from_matrix<S>(m: &BoundaryMatrix<S>, values: Vec<T>) -> Result<Self>
    where S: ColumnStore { 
        ensure!(!m.is_dualized(), Precondition, "dimensions cannot be read from a dualized matrix");
        ensure!(
            values.len() == m.num_columns(), 
            Precondition, "{} values given for {} columns", values.len(), m.num_columns()
        );

        let dims = m.indices().map(|j| m.dimension_of(j)).collect();
        Ok(Self { dims, values })
    }

    pub fn values(&self) -> &[T] { 
        &self.values
    }

    pub fn push(&mut self, dim: usize, value: T) { 
        self.dims.push(dim);
        self.values.push(value);
    }
}

impl<T> SimplexData<T> for Filtration<T>
where T: FiltrationValue {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn dimension(&self, i: usize) -> usize {
        self.dims[i]
    }

    fn value(&self, i: usize) -> T {
        self.values[i]
    }
}

/// Parses whitespace separated values.
pub fn parse_values<T>(input: &str) -> Result<Vec<T>>
where T: FiltrationValue + FromStr { 
    let values = input.split_whitespace().map(|s| 
        s.parse::<T>().or_else(|_| err!(Format, "invalid value '{s}'"))
    ).collect::<Result<Vec<_>>>()?;

    ensure!(!values.is_empty(), Format, "no values in input");
    ensure!(
        values.iter().all(|v| v.partial_cmp(v).is_some()), 
        Format, "values must be comparable"
    );

    Ok(values)
}

/// Lower-star filtration of a function on a path.
/// 
/// `f_0, .., f_{n-1}` are the values on the vertices of a path graph.
/// The edge `{k, k+1}` gets `max(f_k, f_{k+1})`. All `2n - 1` simplices
/// are sorted stably by value, so that at equal values vertices come
/// before edges and lower indices first.
pub fn function_filtration<S, T>(f: &[T]) -> Result<(BoundaryMatrix<S>, Filtration<T>)>
where S: ColumnStore, T: FiltrationValue { 
    ensure!(!f.is_empty(), Format, "no function values");

    let n = f.len();
    let weight = |i: usize| if i < n { 
        f[i]
    } else { 
        let (l, r) = (f[i - n], f[i - n + 1]);
        if l < r { r } else { l }
    };

    let order = (0 .. 2 * n - 1).sorted_by(|&i, &j| 
        weight(i).partial_cmp(&weight(j)).unwrap_or(std::cmp::Ordering::Equal)
    ).collect_vec();

    let mut pos = vec![0; order.len()];
    for (j, &i) in order.iter().enumerate() { 
        pos[i] = j;
    }

    BoundaryMatrix::<S>::check_num_columns(order.len())?;

    let mut m = BoundaryMatrix::new(order.len());
    let mut filt = Filtration::default();

    for (j, &i) in order.iter().enumerate() { 
        if i < n { 
            filt.push(0, weight(i));
        } else { 
            let k = i - n;
            let (a, b) = (pos[k], pos[k + 1]);
            let col = vec![a.min(b), a.max(b)].into_iter().map(S::Index::from_usize).collect();
            m.set_sorted_column(S::Index::from_usize(j), col);
            filt.push(1, weight(i));
        }
    }

    Ok((m, filt))
}

pub fn parse_function<S, T>(input: &str) -> Result<(BoundaryMatrix<S>, Filtration<T>)>
where S: ColumnStore, T: FiltrationValue + FromStr { 
    let f = parse_values(input)?;
    function_filtration(&f)
}

pub fn load_function<S, T, P>(path: P) -> Result<(BoundaryMatrix<S>, Filtration<T>)>
where S: ColumnStore, T: FiltrationValue + FromStr, P: AsRef<Path> { 
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)?;
    let res = parse_function(&input)?;

    info!("loaded function {}: {} values.", path.display(), (res.0.num_columns() + 1) / 2);

    Ok(res)
}

#[cfg(test)]
mod tests { 
    use phom_matrix::sparse::VecStore;
    use super::*;

    type M = BoundaryMatrix<VecStore<u32>>;

    #[test]
    fn from_matrix() { 
        let m = M::from_columns(vec![vec![], vec![], vec![0, 1]]).unwrap();
        let f = Filtration::from_matrix(&m, vec![0.0, 0.0, 1.0]).unwrap();
        assert_eq!(f.len(), 3);
        assert_eq!(f.dimension(2), 1);
        assert_eq!(f.max_dimension(), 1);
    }

    #[test]
    fn from_matrix_wrong_len() { 
        let m = M::from_columns(vec![vec![], vec![], vec![0, 1]]).unwrap();
        assert!(Filtration::from_matrix(&m, vec![0.0]).is_err());
    }

    #[test]
    fn new_wrong_len() { 
        let f = Filtration::new(vec![0, 0, 1], vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(f.len(), 3);

        let e = Filtration::new(vec![0, 0], vec![0.0]).unwrap_err();
        assert!(e.is_precondition());
    }

    #[test]
    fn parse_values_err() { 
        assert!(parse_values::<f64>("1 2 x").unwrap_err().is_format());
        assert!(parse_values::<f64>("  ").unwrap_err().is_format());
        assert!(parse_values::<f64>("1 NaN").unwrap_err().is_format());
    }

    #[test]
    fn function() { 
        // f = (1, 3, 2): the order is v0, v2, v1, e01, e12
        let (m, f): (M, Filtration<f64>) = parse_function("1 3 2").unwrap();

        assert_eq!(m.num_columns(), 5);
        assert_eq!(f.values(), &[1.0, 2.0, 3.0, 3.0, 3.0]);
        assert_eq!(f.dimension(3), 1);
        assert_eq!(m.column(3), vec![0, 2]);
        assert_eq!(m.column(4), vec![1, 2]);
        assert!(m.is_empty_column(1));
    }

    #[test]
    fn function_single_value() { 
        let (m, f): (M, Filtration<f64>) = parse_function("4.5").unwrap();
        assert_eq!(m.num_columns(), 1);
        assert_eq!(f.values(), &[4.5]);
    }

    #[test]
    fn function_narrow_index() { 
        // 2n - 1 columns
        let f = vec![0.0; 32_768];
        let (m, _) = function_filtration::<VecStore<u16>, f64>(&f).unwrap();
        assert_eq!(m.num_columns(), 65_535);

        let f = vec![0.0; 32_769];
        let e = function_filtration::<VecStore<u16>, f64>(&f).unwrap_err();
        assert!(e.is_precondition());
    }

    #[test]
    fn function_empty() { 
        let e = parse_function::<VecStore<u32>, f64>("").unwrap_err();
        assert!(e.is_format());
    }
}
