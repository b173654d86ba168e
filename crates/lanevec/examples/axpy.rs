//! Vectorized `y = a * x + y` over an aligned buffer.
//!
//! Demonstrates the basic workflow: fill containers, walk them a vector
//! at a time with aligned accesses, and handle the scalar tail through
//! the slice view.

use lanevec::prelude::*;

fn main() {
    const COUNT: usize = 1003; // deliberately not a multiple of 8

    let mut x = AlignedBuffer::<f32, 8>::new(COUNT);
    let mut y = AlignedBuffer::<f32, 8>::new(COUNT);

    for i in 0..COUNT {
        x[i] = i as f32;
        y[i] = 1.0;
    }

    let a = 0.5f32;
    let av = f32x8::splat(a);

    // Whole vectors, aligned on both sides.
    for slot in 0..x.vector_count() {
        let fused = av.mul_add(x.vector(slot), y.vector(slot));
        y.set_vector(slot, fused);
    }

    // Scalar tail.
    for i in (y.vector_count() * 8)..COUNT {
        y[i] = a * x[i] + y[i];
    }

    println!("y[0]    = {}", y[0]);
    println!("y[17]   = {}", y[17]);
    println!("y[1002] = {}", y[1002]);

    let total: f32 = y.iter().sum();
    println!("sum     = {total}");
}
