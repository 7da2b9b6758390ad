//! Prints reference digests and a rough hashes-per-second figure.
//!
//! Set `RUST_LOG=mirror_hashing=debug` to see schedule cache activity.

use mirror_hashing::Mirror256;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn random_alphanumeric_string<R: Rng>(rng: &mut R, length: usize) -> String {
    let index = Uniform::new(0, ALPHABET.len()).expect("non-empty alphabet");
    (0..length)
        .map(|_| char::from(ALPHABET[index.sample(rng)]))
        .collect()
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let mut rng = StdRng::seed_from_u64(777);

    let message = "This is the canary.";
    println!("Message: {message}");
    println!("Hash: {}", Mirror256::with_message(message).hexdigest());

    println!("\nBenchmarking...");
    let start = Instant::now();
    let mut count = 0u64;
    while start.elapsed() < Duration::from_secs(1) {
        let input = random_alphanumeric_string(&mut rng, 32);
        let _ = Mirror256::with_message(&input).hexdigest();
        count += 1;
    }
    println!("{count} hashes per second");

    let example = "This is the canary #42. asdfasdfasdfasdfasdfqwerqwerqwerdfnnjkdfnjldljknsvv";
    println!("\nExample message: {example}");
    println!("Example digest: {}", Mirror256::with_message(example).hexdigest());

    let random = random_alphanumeric_string(&mut rng, 32);
    println!("\nRandom message: {random}");
    println!("Random digest: {}", Mirror256::with_message(&random).hexdigest());
}
