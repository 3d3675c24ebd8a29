//! Price and symbol derivation

use rand::Rng;
use synthq_common::constants::market::{PERCENT, SYMBOL_LENGTH};

const ALPHABET_LEN: u8 = 26;

/// Derive a share price from `base`.
///
/// `delta = percentage_change / 100 * base`. In `high` mode the result is
/// exactly `base + delta`. Otherwise it is an integer drawn uniformly from
/// `[base - |delta|, base + |delta|]`, both bounds truncated toward zero, so a
/// negative percentage draws from the same band as its magnitude.
pub fn generate_price<R: Rng + ?Sized>(
    rng: &mut R,
    base: f64,
    percentage_change: f64,
    high: bool,
) -> f64 {
    let delta = percentage_change / PERCENT * base;
    if high {
        return base + delta;
    }

    let spread = delta.abs();

    #[allow(clippy::cast_possible_truncation)]
    let (floor, ceiling) = ((base - spread) as i64, (base + spread) as i64);

    #[allow(clippy::cast_precision_loss)]
    let price = rng.gen_range(floor..=ceiling) as f64;
    price
}

/// Derive a ticker from a company name.
///
/// Takes the first three characters uppercased; any character that is not an
/// ASCII letter (space, comma, hyphen, ...) is replaced by a random uppercase
/// letter, and short names are padded the same way. Distinct names may map
/// to the same symbol.
pub fn derive_symbol<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
    let mut symbol: String = name
        .chars()
        .take(SYMBOL_LENGTH)
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_uppercase()
            } else {
                random_letter(rng)
            }
        })
        .collect();

    while symbol.len() < SYMBOL_LENGTH {
        symbol.push(random_letter(rng));
    }

    symbol
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..ALPHABET_LEN))
}
