use num_traits::{Num, Signed};
use std::fmt::Debug;

/// A trait for types that can be used as matrix entries.
/// Must support ring arithmetic with negation and debug printing.
///
/// Integer matrices should instantiate with a type wide enough to hold
/// exact sums and products at the sizes the suite targets (`i64`); the
/// floating-point solvers instantiate with `f64`.
pub trait Entry: Num + Signed + Copy + Debug + 'static {}

impl<T: Num + Signed + Copy + Debug + 'static> Entry for T {}
