//! Plain text rendering of an integer sequence.
//!
//! Every element is followed by a single space, the last one included, then a newline. This is
//! the exact format of the demo output, `"5 1 4 2 8 \n"`.

use std::io::{self, Write};

/// Writes `v` to `out` as space terminated decimal values and a final newline.
pub fn write_sequence<W: Write>(out: &mut W, v: &[i32]) -> io::Result<()> {
    for val in v {
        write!(out, "{val} ")?;
    }
    writeln!(out)
}

/// Same text as [`write_sequence`], as an owned string.
pub fn render(v: &[i32]) -> String {
    let mut text: String = v.iter().map(|val| format!("{val} ")).collect();
    text.push('\n');
    text
}
