use phom_matrix::BoundaryMatrix;
use phom_matrix::sparse::VecStore;

pub type Idx = u32;
pub type Value = f64;
pub type Matrix = BoundaryMatrix<VecStore<Idx>>;

// `Reduction` has generic methods, so the algorithm is chosen by
// expanding the body once per implementation.
macro_rules! dispatch_reduction {
    ($algo:expr, |$r:ident| $body:expr) => {{
        use phom_homology::reduction::{StandardReduction, TwistReduction};

        match $algo {
            Algorithm::Standard => { let $r = &StandardReduction; $body },
            Algorithm::Twist    => { let $r = &TwistReduction; $body },
        }
    }};
}

pub(crate) use dispatch_reduction;
