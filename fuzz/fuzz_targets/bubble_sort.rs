#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Trailing bytes that don't fill a whole i32 are ignored.
    let orig: Vec<i32> = data
        .chunks_exact(4)
        .map(|bytes| i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect();

    let mut v = orig.clone();
    let stats = bubble_sort::sort_with_stats(&mut v);

    let mut expected = orig;
    expected.sort_unstable();

    assert_eq!(v, expected);
    assert!(stats.passes <= v.len().saturating_sub(1));
});
