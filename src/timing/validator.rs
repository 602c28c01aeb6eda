/*!
 * Chronological-ordering validation for subtitle timing pairs.
 *
 * This module checks that consecutive timing pairs form a strictly
 * increasing chain of four timestamps (prev.start < prev.end < curr.start
 * < curr.end) and classifies the first failing comparison:
 * - the current cue starts at or after its own end
 * - the previous cue ends at or after the current one starts
 * - the previous cue starts at or after its own end
 *
 * Violations are data, not faults: they are returned as values and never
 * raised. Each error carries the 1-based line number and byte offset of
 * the triggering match in the source text.
 */

use std::fmt;

use log::debug;

use super::extractor::{TimingMatch, extract_timings};

/// Kinds of timing-order violation between two consecutive cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingErrorKind {
    /// Current cue's start is not before its own end
    StartAfterEnd,
    /// Previous cue ends at or after the current cue starts
    PrevEndAfterCurrStart,
    /// Previous cue's start is not before its own end
    PrevStartAfterPrevEnd,
}

/// A detected timing violation with its location in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingError {
    /// What went wrong
    pub kind: TimingErrorKind,
    /// 1-based line number of the reported location
    pub line: usize,
    /// 0-based byte offset of the reported location
    pub offset: usize,
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TimingErrorKind::StartAfterEnd => {
                write!(f, "Current subtitle starts after it ends at line {}", self.line)
            }
            TimingErrorKind::PrevEndAfterCurrStart => {
                write!(f, "Previous subtitle ends after current one starts at line {}", self.line)
            }
            TimingErrorKind::PrevStartAfterPrevEnd => {
                write!(f, "Previous subtitle starts after it ends at line {}", self.line)
            }
        }
    }
}

/// Convert a matched time string to its comparable numeric form.
///
/// Colons are stripped and the comma becomes a decimal point, so
/// `00:01:02,500` reads as 102.5. This is a lexicographic convention, not
/// an hours/minutes/seconds conversion: values only order correctly
/// against timestamps with the same digit-group structure.
fn time_to_numeric(time: &str) -> f64 {
    time.replace(':', "")
        .replace(',', ".")
        .parse()
        .expect("timing pattern guarantees a parsable number")
}

/// Classify the ordering of two consecutive matches.
///
/// Only the first failing comparison in the chain determines the kind;
/// later comparisons are not evaluated once one fails.
fn classify(prev: &TimingMatch, curr: &TimingMatch) -> Option<TimingErrorKind> {
    let prev_start = time_to_numeric(&prev.start_time);
    let prev_end = time_to_numeric(&prev.end_time);
    let curr_start = time_to_numeric(&curr.start_time);
    let curr_end = time_to_numeric(&curr.end_time);

    if prev_start < prev_end {
        if prev_end < curr_start {
            if curr_start < curr_end {
                None
            } else {
                Some(TimingErrorKind::StartAfterEnd)
            }
        } else {
            Some(TimingErrorKind::PrevEndAfterCurrStart)
        }
    } else {
        Some(TimingErrorKind::PrevStartAfterPrevEnd)
    }
}

/// Locate a match in the source text for error reporting.
///
/// Searches for the matched substring from the start of the text, so a
/// timing line that also occurs earlier reports the earlier occurrence.
/// The match's own recorded offset is the fallback.
fn locate(text: &str, timing_match: &TimingMatch) -> (usize, usize) {
    let offset = text
        .find(&timing_match.raw_text)
        .unwrap_or(timing_match.byte_offset);
    let line = text[..offset].bytes().filter(|&b| b == b'\n').count() + 1;
    (line, offset)
}

/// Validate the chronological ordering of all timing pairs in `text`.
///
/// Returns one error per violating consecutive pair, in text order. The
/// first match has no predecessor and can never be in error; zero matches
/// yield an empty result.
pub fn validate(text: &str) -> Vec<TimingError> {
    let mut errors = Vec::new();
    let mut previous: Option<TimingMatch> = None;
    let mut match_count = 0;

    for current in extract_timings(text) {
        match_count += 1;

        if let Some(prev) = &previous {
            if let Some(kind) = classify(prev, &current) {
                let (line, offset) = locate(text, &current);
                errors.push(TimingError { kind, line, offset });
            }
        }

        previous = Some(current);
    }

    debug!(
        "Timing validation: {} matches, {} errors",
        match_count,
        errors.len()
    );

    errors
}
