//! Masked work: clamp outliers in place with comparisons, `select`, and
//! masked stores.

use lanevec::prelude::*;

fn main() {
    let mut samples = AlignedBuffer::<f32, 8>::new(64);
    for i in 0..samples.len() {
        // A ramp with a spike every 11th element.
        samples[i] = if i % 11 == 0 { 900.0 } else { i as f32 };
    }

    let ceiling = f32x8::splat(100.0);
    let mut clipped = 0;

    for slot in 0..samples.vector_count() {
        let v = samples.vector(slot);
        let over = v.simd_gt(ceiling);

        if over.is_empty() {
            continue; // nothing to do for this vector
        }
        clipped += over.count_true();

        // Write only the offending lanes; the rest keep their memory.
        let base = slot * 8;
        ceiling.store_masked(&mut samples[base..], over, ALIGNED);
    }

    println!("clipped {clipped} samples");
    println!("max is now {}", samples.iter().cloned().fold(f32::MIN, f32::max));
}
