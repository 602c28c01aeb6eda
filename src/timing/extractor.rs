use once_cell::sync::Lazy;
use regex::Regex;

// @module: Timing-pair extraction from raw subtitle text

// @const: SRT-style timing pair regex, tolerant digit grouping
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((\d+:?)+,\d+) --> ((\d+:?)+,\d+)").unwrap()
});

// @struct: One extracted timing-pair occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingMatch {
    // @field: Start time string, including fractional part
    pub start_time: String,

    // @field: End time string, including fractional part
    pub end_time: String,

    // @field: Exact matched substring
    pub raw_text: String,

    // @field: Byte index of the match's first character in the source text
    pub byte_offset: usize,
}

/// Scan `text` for timing pairs in left-to-right order.
///
/// Matches are non-overlapping; candidates missing the arrow or the comma
/// fractional group are skipped entirely. The iterator is lazy and borrows
/// the input text.
pub fn extract_timings(text: &str) -> impl Iterator<Item = TimingMatch> + '_ {
    TIMING_REGEX.captures_iter(text).map(|caps| {
        let whole = caps.get(0).expect("capture 0 is the whole match");
        TimingMatch {
            start_time: caps[1].to_string(),
            end_time: caps[3].to_string(),
            raw_text: whole.as_str().to_string(),
            byte_offset: whole.start(),
        }
    })
}
