use std::fmt::{Debug, Display};
use std::ops::Sub;
use num_traits::{Bounded, Float};

/// Scalar attached to a simplex by a filtration.
/// 
/// Floating point values are only partially ordered. Places that need
/// a total order treat incomparable values as equal.
pub trait FiltrationValue: 
    Copy + 
    PartialOrd + 
    Sub<Output = Self> + 
    Default + 
    Display + 
    Debug + 
    Send + 
    Sync + 
    'static
{
    /// Death value of an essential (never dying) feature.
    fn infinity() -> Self;

    fn is_infinite(&self) -> bool { 
        *self == Self::infinity()
    }
}

macro_rules! impl_float_value {
    ($t:ty) => {
        impl FiltrationValue for $t { 
            fn infinity() -> Self { 
                <$t as Float>::infinity()
            }
        }
    };
}

macro_rules! impl_int_value {
    ($t:ty) => {
        impl FiltrationValue for $t { 
            fn infinity() -> Self { 
                <$t as Bounded>::max_value()
            }
        }
    };
}

impl_float_value!(f32);
impl_float_value!(f64);

impl_int_value!(i32);
impl_int_value!(i64);
impl_int_value!(u32);
impl_int_value!(u64);
impl_int_value!(usize);
