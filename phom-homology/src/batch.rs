use log::info;
use phom::Result;
use phom_matrix::{BoundaryMatrix, ColumnStore};
use crate::reduction::Reduction;
use crate::{compute_persistence_pairs, PersistencePairing};

cfg_if::cfg_if! { if #[cfg(feature = "multithread")] { 
    use rayon::prelude::*;
}}

/// Computes the pairing of each matrix independently.
/// 
/// Results are returned in input order, each together with its reduced
/// matrix. A failing matrix does not affect the others. Matrices are
/// distributed over the rayon pool when multithreading is enabled.
pub fn reduce_batch<R, S>(reduction: &R, matrices: Vec<BoundaryMatrix<S>>) -> Vec<Result<(PersistencePairing<S::Index>, BoundaryMatrix<S>)>>
where R: Reduction, S: ColumnStore { 
    info!("reduce batch: {} matrices ({}).", matrices.len(), reduction.name());

    let f = |mut m: BoundaryMatrix<S>| -> Result<_> { 
        let pairing = compute_persistence_pairs(reduction, &mut m)?;
        Ok((pairing, m))
    };

    cfg_if::cfg_if! { 
    if #[cfg(feature = "multithread")] { 
        if crate::config::is_multithread_enabled() { 
            return matrices.into_par_iter().map(f).collect()
        }
    }}

    matrices.into_iter().map(f).collect()
}
