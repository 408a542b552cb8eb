use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;
use num_traits::{NumCast, PrimInt};

/// Column / row index of a boundary matrix.
/// 
/// Indices are unsigned machine integers. Conversions to and from
/// `usize` are used to address column storage and lookup tables.
pub trait Index: 
    PrimInt + 
    Hash + 
    Default + 
    Display + 
    Debug + 
    FromStr + 
    Send + 
    Sync + 
    'static
{
    fn as_usize(self) -> usize;

    /// Panics if `i` does not fit. Callers check the number of columns
    /// with [`Index::can_address`] up front.
    fn from_usize(i: usize) -> Self { 
        <Self as NumCast>::from(i).unwrap_or_else(|| 
            panic!("index {i} overflows {}", std::any::type_name::<Self>())
        )
    }

    /// Whether `0 .. n` are all representable.
    fn can_address(n: usize) -> bool { 
        n == 0 || <Self as NumCast>::from(n - 1).is_some()
    }

    /// `n - 1 - self`, the position of `self` after reversing `0 .. n`.
    fn reversed(self, n: usize) -> Self { 
        debug_assert!(self.as_usize() < n);
        Self::from_usize(n - 1 - self.as_usize())
    }
}

macro_rules! impl_index {
    ($t:ty) => {
        impl Index for $t { 
            #[inline]
            fn as_usize(self) -> usize { 
                self as usize
            }
        }
    };
}

impl_index!(u16);
impl_index!(u32);
impl_index!(u64);
impl_index!(usize);
