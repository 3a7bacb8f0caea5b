// Random picks for `lunch` and `lorem`
//
// The generator is passed in so a seeded one gives repeatable answers.

use rand::seq::SliceRandom;
use rand::Rng;

pub const LUNCH_OPTIONS: [&str; 5] = ["Chipotle", "Panera Bread", "Subway", "Shake Shack", "Taco Bell"];

pub const LOREM_WORDS: [&str; 8] = [
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

/// One restaurant, uniformly at random
pub fn lunch<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &LUNCH_OPTIONS)
}

/// `count` vocabulary words joined by spaces, repeats allowed
pub fn lorem<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| pick(rng, &LOREM_WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}
