mod collect_sort;
mod insertion_sort;
mod selection_sort;
mod slice_sort;

pub use collect_sort::*;
pub use insertion_sort::*;
pub use selection_sort::*;
pub use slice_sort::*;
