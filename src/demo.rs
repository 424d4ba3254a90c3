use std::io::{self, Write};

use crate::{bubble, display};

/// The sequence sorted by the demo binary.
pub const INPUT: [i32; 5] = [5, 1, 4, 2, 8];

/// Prints [`INPUT`], sorts it and prints it again. Returns the sorted sequence.
///
/// ```text
/// Before Sorting: 5 1 4 2 8
/// After Sorting: 1 2 4 5 8
/// ```
///
/// Both lines keep the trailing space after the last value.
pub fn run<W: Write>(out: &mut W) -> io::Result<[i32; 5]> {
    let mut data = INPUT;

    write!(out, "Before Sorting: ")?;
    display::write_sequence(out, &data)?;

    let stats = bubble::sort_with_stats(&mut data);
    tracing::debug!(?stats, "demo input sorted");

    write!(out, "After Sorting: ")?;
    display::write_sequence(out, &data)?;

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_exact() {
        let mut out = Vec::new();
        let sorted = run(&mut out).unwrap();

        assert_eq!(sorted, [1, 2, 4, 5, 8]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Before Sorting: 5 1 4 2 8 \nAfter Sorting: 1 2 4 5 8 \n"
        );
    }

    #[test]
    fn input_untouched() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(INPUT, [5, 1, 4, 2, 8]);
    }
}
