// Text format of a boundary matrix: one line per column, holding the
// row indices in ascending order separated by spaces, or a single `-`
// for an empty column. An edge between two vertices:
//
//   -
//   -
//   0 1

use std::fmt::Display;
use std::path::Path;
use itertools::Itertools;
use log::info;
use phom::{err, ensure, Index, Result};
use crate::{BoundaryMatrix, ColumnStore};

const EMPTY_COLUMN: &str = "-";

impl<S> Display for BoundaryMatrix<S>
where S: ColumnStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for j in self.indices() { 
            let col = self.column(j);
            if col.is_empty() { 
                writeln!(f, "{EMPTY_COLUMN}")?;
            } else { 
                writeln!(f, "{}", col.iter().join(" "))?;
            }
        }
        Ok(())
    }
}

pub fn parse_matrix<S>(input: &str) -> Result<BoundaryMatrix<S>>
where S: ColumnStore { 
    let cols = input.lines().enumerate().map(|(j, line)| 
        parse_column::<S::Index>(j, line)
    ).collect::<Result<Vec<_>>>()?;

    ensure!(!cols.is_empty(), Format, "empty input");
    ensure!(
        S::Index::can_address(cols.len()), 
        Format, "{} columns exceed the range of {}", cols.len(), std::any::type_name::<S::Index>()
    );

    let mut m = BoundaryMatrix::new(cols.len());
    for (j, col) in cols.into_iter().enumerate() { 
        m.set_sorted_column(S::Index::from_usize(j), col);
    }
    Ok(m)
}

fn parse_column<I>(j: usize, line: &str) -> Result<Vec<I>>
where I: Index { 
    let line_no = j + 1;
    let line = line.trim();

    ensure!(!line.is_empty(), Format, "line {line_no}: empty line, use '{EMPTY_COLUMN}' for an empty column");

    if line == EMPTY_COLUMN { 
        return Ok(vec![])
    }

    let mut col = line.split_whitespace().map(|s| 
        s.parse::<I>().or_else(|_| err!(Format, "line {line_no}: invalid index '{s}'"))
    ).collect::<Result<Vec<_>>>()?;

    col.sort();

    if let Some(w) = col.windows(2).find(|w| w[0] == w[1]) { 
        return err!(Format, "line {line_no}: duplicate index {}", w[0]);
    }
    if let Some(&p) = col.last() { 
        ensure!(p.as_usize() < j, Format, "line {line_no}: index {p} must be smaller than the column index {j}");
    }

    Ok(col)
}

pub fn load_matrix<S, P>(path: P) -> Result<BoundaryMatrix<S>>
where S: ColumnStore, P: AsRef<Path> { 
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)?;
    let m = parse_matrix(&input)?;

    info!("loaded {}: {} columns, {} entries.", path.display(), m.num_columns(), m.num_entries());

    Ok(m)
}

pub fn save_matrix<S, P>(m: &BoundaryMatrix<S>, path: P) -> Result<()>
where S: ColumnStore, P: AsRef<Path> { 
    std::fs::write(path, m.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests { 
    use super::*;
    use crate::sparse::VecStore;

    type M = BoundaryMatrix<VecStore<u32>>;

    const TRIANGLE: &str = "-\n-\n-\n0 1\n0 2\n1 2\n3 4 5\n";

    #[test]
    fn display() { 
        let m = M::from_columns(vec![
            vec![], vec![], vec![],
            vec![0, 1], vec![0, 2], vec![1, 2],
            vec![3, 4, 5]
        ]).unwrap();
        assert_eq!(m.to_string(), TRIANGLE);
    }

    #[test]
    fn parse() { 
        let m: M = parse_matrix(TRIANGLE).unwrap();
        assert_eq!(m.num_columns(), 7);
        assert_eq!(m.column(5), vec![1, 2]);
        assert!(m.is_empty_column(2));
    }

    #[test]
    fn parse_unsorted_with_spaces() { 
        let m: M = parse_matrix("-\n-\n1 0 \n").unwrap();
        assert_eq!(m.column(2), vec![0, 1]);
    }

    #[test]
    fn parse_crlf() { 
        let m: M = parse_matrix("-\r\n0\r\n").unwrap();
        assert_eq!(m.column(1), vec![0]);
    }

    #[test]
    fn round_trip() { 
        let m: M = parse_matrix(TRIANGLE).unwrap();
        let m2: M = parse_matrix(&m.to_string()).unwrap();
        assert_eq!(m, m2);
    }

    #[test]
    fn round_trip_reduced() { 
        let mut m: M = parse_matrix(TRIANGLE).unwrap();
        m.add_columns(4, 5);
        m.add_columns(3, 5);

        let m2: M = parse_matrix(&m.to_string()).unwrap();
        assert_eq!(m, m2);
        assert!(m2.is_empty_column(5));
    }

    #[test]
    fn empty_input() { 
        let e = parse_matrix::<VecStore<u32>>("").unwrap_err();
        assert!(e.is_format());
    }

    #[test]
    fn invalid_token() { 
        let e = parse_matrix::<VecStore<u32>>("-\n0 x\n").unwrap_err();
        assert!(e.is_format());
        assert!(e.to_string().contains("line 2"));
    }

    #[test]
    fn negative_index() { 
        assert!(parse_matrix::<VecStore<u32>>("-\n-1\n").is_err());
    }

    #[test]
    fn empty_line() { 
        assert!(parse_matrix::<VecStore<u32>>("-\n\n0\n").is_err());
    }

    #[test]
    fn not_triangular() { 
        let e = parse_matrix::<VecStore<u32>>("-\n1\n").unwrap_err();
        assert!(e.is_format());
    }

    #[test]
    fn duplicate() { 
        let e = parse_matrix::<VecStore<u32>>("-\n-\n0 0\n").unwrap_err();
        assert!(e.to_string().contains("duplicate"));
    }

    #[test]
    fn narrow_index_type() { 
        let input = format!("{}0\n", "-\n".repeat(65_535));
        let m: BoundaryMatrix<VecStore<u16>> = parse_matrix(&input).unwrap();
        assert_eq!(m.num_columns(), 65_536);
        assert_eq!(m.column(65_535), vec![0]);

        let input = format!("{}0\n", "-\n".repeat(65_537));
        let e = parse_matrix::<VecStore<u16>>(&input).unwrap_err();
        assert!(e.is_format());
    }

    #[test]
    fn save_and_load() { 
        let m: M = parse_matrix(TRIANGLE).unwrap();
        let path = std::env::temp_dir().join(format!("phom-matrix-{}.txt", std::process::id()));

        save_matrix(&m, &path).unwrap();
        let m2: M = load_matrix(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(m, m2);
    }

    #[test]
    fn load_missing() { 
        let e = load_matrix::<VecStore<u32>, _>("/nonexistent/phom/matrix.txt").unwrap_err();
        assert!(matches!(e, phom::Error::Io(_)));
    }
}
