//! Reading-time estimation from source text.
//!
//! The estimate works on the raw dialect text, not the rendered output:
//! markup punctuation is stripped, the remainder is tokenized on
//! whitespace, and the word count divides by a fixed reading rate.

/// Assumed reading rate.
pub const WORDS_PER_MINUTE: usize = 150;

/// Markup punctuation ignored when counting words.
const MARKERS: &[char] = &['#', '_', '*', '>', '-', '[', ']', '(', ')', '`'];

/// Count words in source text.
///
/// Marker characters are removed (not replaced by spaces, so `well-known`
/// counts as one word), newlines collapse to spaces, and tokens are
/// whitespace-delimited. Empty and whitespace-only input count zero words.
pub fn word_count(text: &str) -> usize {
    let cleaned: String = text
        .chars()
        .filter(|c| !MARKERS.contains(c))
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    cleaned.split_whitespace().count()
}

/// Estimate reading time in whole minutes, rounding up.
///
/// Any text with at least one word yields at least one minute; empty input
/// yields zero.
///
/// # Examples
///
/// ```
/// use folio::readtime::estimate_reading_time;
///
/// assert_eq!(estimate_reading_time(""), 0);
/// assert_eq!(estimate_reading_time("a few words"), 1);
/// ```
pub fn estimate_reading_time(text: &str) -> u32 {
    word_count(text).div_ceil(WORDS_PER_MINUTE) as u32
}
