use sort_test_tools::{instantiate_sort_tests, Sort};

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_bubble_stable".into()
    }

    fn sort(v: &mut [i32]) {
        bubble_sort::sort(v);
    }

    fn sort_count_passes(v: &mut [i32]) -> Option<usize> {
        Some(bubble_sort::sort_with_stats(v).passes)
    }
}

instantiate_sort_tests!(SortImpl);
