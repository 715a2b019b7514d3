//! Currency and unit-of-measure conversion seams.

mod conversion_traits;

pub use conversion_traits::*;
