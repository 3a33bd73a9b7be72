//! Fixed-width column helper

/// Left-pads `input` with spaces to `width` characters.
///
/// Input longer than `width` is cut to its first `width` characters, so a
/// 13-digit size loses its last digit. Existing clients rely on the fixed
/// column, so the cut stays.
pub fn lpad(input: &str, width: usize) -> String {
    let len = input.chars().count();
    if len < width {
        let mut padded = " ".repeat(width - len);
        padded.push_str(input);
        padded
    } else if len == width {
        input.to_string()
    } else {
        input.chars().take(width).collect()
    }
}
