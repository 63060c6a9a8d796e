use std::ops::Range;

/// Number of leading characters shared by `old[old_range]` and
/// `new[new_range]`.
pub fn common_prefix_len(
    old: &[char],
    old_range: Range<usize>,
    new: &[char],
    new_range: Range<usize>,
) -> usize {
    old[old_range]
        .iter()
        .zip(&new[new_range])
        .take_while(|(old, new)| old == new)
        .count()
}

/// Number of trailing characters shared by `old[old_range]` and
/// `new[new_range]`.
pub fn common_suffix_len(
    old: &[char],
    old_range: Range<usize>,
    new: &[char],
    new_range: Range<usize>,
) -> usize {
    old[old_range]
        .iter()
        .rev()
        .zip(new[new_range].iter().rev())
        .take_while(|(old, new)| old == new)
        .count()
}
