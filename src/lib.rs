//! # tiersort
//!
//! tiersort is a comparison sorting toolkit that dispatches on what the input
//! can do. A strategy declares the weakest traversal capability it can work
//! with, a range declares the strongest capability it offers, and a
//! [`HybridSort`] routes every call to the strongest eligible member. All of
//! that resolves during monomorphization; an ineligible strategy/range pairing
//! fails the build rather than the run.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.sort_builder().sort()`. A composite
//! built from the bundled strategies covers every container tier with one
//! value:
//!
//! ```
//! use std::collections::LinkedList;
//! use tiersort::sorts::{InsertionSort, SliceSort};
//! use tiersort::{HybridSort, SortWith};
//!
//! let sorter = HybridSort::new((SliceSort, InsertionSort));
//!
//! let mut values = vec![3u32, 1, 2];
//! values.sort_with(&sorter);
//! assert_eq!(values, [1, 2, 3]);
//!
//! // Same value, weaker input: routed to the bidirectional member.
//! let mut list: LinkedList<u32> = [3u32, 1, 2].into_iter().collect();
//! list.sort_with(&sorter);
//! assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
//! ```
//!
//! ## Default Implementations
//!
//! `SortRange` is implemented for the following types out-of-the-box:
//!
//!  * `[T]` and `Vec<T>` (random access, with a native `sort` for
//!    [`IntrinsicFirst`] to delegate to)
//!  * `VecDeque<T>` (random access)
//!  * `LinkedList<T>` (bidirectional)
//!
//! The tiers run `RandomAccess > Bidirectional > Forward > SinglePass`. An
//! input satisfies every requirement at or below its own tier.
//!
//! ### Implementing a strategy
//!
//! To add your own sort, implement [`Sorter`] as below.
//!
//!  * `REQUIRES` should name the weakest tier the algorithm still works on
//!  * `STABLE` should say whether equal elements keep their order
//!  * `sort_view` receives the input at whatever tier it actually has;
//!    [`RangeView::into_slot_refs`] flattens any tier into one set of
//!    mutable element slots
//!
//! ```
//! use std::cmp::Ordering;
//! use std::collections::LinkedList;
//! use tiersort::{Capability, RangeView, SortExt, Sorter};
//!
//! struct BubbleSort;
//!
//! impl Sorter for BubbleSort {
//!     const REQUIRES: Capability = Capability::Forward;
//!     const STABLE: bool = true;
//!
//!     fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
//!     where
//!         C: FnMut(&T, &T) -> Ordering,
//!     {
//!         let mut slots = view.into_slot_refs();
//!
//!         for pass in 0..slots.len() {
//!             for i in 1..slots.len() - pass {
//!                 let (a, b) = slots.split_at_mut(i);
//!                 if compare(&*a[i - 1], &*b[0]) == Ordering::Greater {
//!                     std::mem::swap(&mut *a[i - 1], &mut *b[0]);
//!                 }
//!             }
//!         }
//!     }
//! }
//!
//! let mut list: LinkedList<u32> = [3u32, 1, 2].into_iter().collect();
//! BubbleSort.sort(&mut list);
//! assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
//! ```
//!
//! Every other entry point (`sort_by`, `sort_by_key`, the range-side
//! `sort_with` family, function pointer forms) is derived from that one
//! method.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license (<http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.


#[cfg(test)]
mod test_utils;

mod builder;
mod capability;
mod dispatch;
mod facade;
mod hybrid;
mod intrinsic;
mod range;
mod sorter;
mod utils;

pub mod sorts;

pub use builder::{DefaultSort, DefaultStableSort, SortBuilder};
pub use capability::Capability;
pub use dispatch::DispatchProfile;
pub use facade::{SortExt, SortWith};
pub use hybrid::HybridSort;
pub use intrinsic::IntrinsicFirst;
pub use range::{RangeView, Slots, SortRange};
pub use sorter::Sorter;
