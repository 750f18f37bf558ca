use std::collections::{LinkedList, VecDeque};
use tiersort::{DefaultSort, IntrinsicFirst, SortExt};

fn main() {
    let sorter = IntrinsicFirst::new(DefaultSort::default());

    // Vec has a native sort, so the fallback never runs.
    let mut values = vec![55u32, 22, 73, 4, 89, 0, 100, 3];
    sorter.sort(&mut values);
    println!("{:?}", &values[..]);

    // VecDeque offers random access but no native sort.
    let mut deque: VecDeque<u32> = [55, 22, 73, 4, 89, 0, 100, 3].into_iter().collect();
    sorter.sort(&mut deque);
    println!("{:?}", deque);

    // LinkedList only offers bidirectional traversal.
    let mut list: LinkedList<u32> = [55, 22, 73, 4, 89, 0, 100, 3].into_iter().collect();
    sorter.sort(&mut list);
    println!("{:?}", list);
}
