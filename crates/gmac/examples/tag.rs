//! Demonstrates tag generation and the exposed hash state.

use gmac::{generate_iv_with, Gmac};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() {
    // Deterministic seed for reproducibility in the example.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let iv = generate_iv_with(&mut rng);

    let mut gmac = Gmac::new(235);
    let tag = gmac.generate(17927, iv);
    println!("iv: {iv}");
    println!("tag: {tag}");
    println!("hash state: {}", gmac.state());

    // Same inputs, same tag.
    let mut again = Gmac::new(235);
    assert_eq!(again.generate(17927, iv), tag);
    println!("example succeeded; tag is deterministic");
}
