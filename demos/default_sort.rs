use nanorand::{Rng, WyRand};
use tiersort::SortWith;

fn main() {
    let n = 1_000_000;
    let mut inputs: Vec<u64> = Vec::with_capacity(n);
    let mut rng = WyRand::new();

    for _ in 0..n {
        inputs.push(rng.generate::<u64>());
    }

    inputs.sort_builder().sort();
    println!("{}", inputs[0]);
}
