//! Reply selection. Positive outcomes answer with a uniformly random pick
//! from their configured pool; error outcomes have a single fixed string
//! chosen by the caller.

use rand::seq::IndexedRandom;

/// One random reply out of a pool. Config validation guarantees pools are
/// non-empty; an empty slice still degrades to `""` rather than panicking.
pub fn pick(pool: &[String]) -> &str {
    pool.choose(&mut rand::rng())
        .map(String::as_str)
        .unwrap_or_default()
}
