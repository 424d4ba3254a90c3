//! Input generators for testing and benchmarking the sort.
//!
//! All random patterns draw from one seed per process, so a failing test can be reproduced by
//! setting `OVERRIDE_SEED` to the seed printed at the start of the run.

use std::cmp::Reverse;
use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf parameters len: {len} exponent: {exponent}"),
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// Ascending run with the minimum moved to the back.
///
/// The minimum only travels one position towards the front per pass, so a bubble sort needs
/// `len - 1` passes even though a single element is out of place.
pub fn turtle(len: usize) -> Vec<i32> {
    //      .:.
    //   .::::::
    // .::::::::.

    if len == 0 {
        return Vec::new();
    }

    let mut v = ascending(len);
    v.rotate_left(1);
    v
}

/// Ascending run with the maximum moved to the front.
///
/// The maximum reaches the back within the first pass, the second pass finds nothing to do.
pub fn rabbit(len: usize) -> Vec<i32> {
    // :     .:
    // :   .:::
    // : .:::::

    if len == 0 {
        return Vec::new();
    }

    let mut v = ascending(len);
    v.rotate_right(1);
    v
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw_with(len, saw_count, |chunk, _| chunk.sort_unstable())
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw_with(len, saw_count, |chunk, _| {
        chunk.sort_unstable_by_key(|&e| Reverse(e))
    })
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saw_with(len, saw_count, |chunk, i| {
        if directions[i % directions.len()] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| Reverse(e));
        }
    })
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let (first_half, second_half) = v.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| Reverse(e));

    v
}

/// Makes every call to a random pattern yield new values, instead of the same values for the
/// same length within one process. Meant for benchmarks.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED");
    }

    *SEED_TYPE_AND_VALUE.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_TYPE_AND_VALUE.lock().unwrap().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED") {
            Ok(seed) => {
                let seed = u64::from_str(seed.trim())
                    .unwrap_or_else(|e| panic!("OVERRIDE_SEED={seed:?} is not a u64: {e}"));
                (SeedType::ExternalOverride, seed)
            }
            Err(_) => (SeedType::RandomOncePerProcess, thread_rng().gen()),
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (seed_type, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Splits `random(len)` into `saw_count` chunks and shapes each with `shape(chunk, chunk_idx)`.
fn saw_with(len: usize, saw_count: usize, mut shape: impl FnMut(&mut [i32], usize)) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        shape(chunk, i);
    }

    v
}
