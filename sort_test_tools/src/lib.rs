/// A sort implementation under test.
pub trait Sort {
    fn name() -> String;

    fn sort(v: &mut [i32]);

    /// Sorts `v` and returns the number of passes over the input, for pass based sorts.
    ///
    /// Sorts without a notion of passes keep the default, which makes the pass count checks skip
    /// them.
    fn sort_count_passes(v: &mut [i32]) -> Option<usize> {
        Self::sort(v);
        None
    }
}

pub mod patterns;
