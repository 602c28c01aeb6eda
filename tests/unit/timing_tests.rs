/*!
 * Tests for the public timing extraction and validation API
 */

use srtlint::{TimingErrorKind, extract_timings, validate};

#[test]
fn test_extractTimings_shouldExposeMatchFields() {
    let text = "1\n00:00:01,000 --> 00:00:04,000\nHello\n";

    let matches: Vec<_> = extract_timings(text).collect();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start_time, "00:00:01,000");
    assert_eq!(matches[0].end_time, "00:00:04,000");
    assert_eq!(matches[0].raw_text, "00:00:01,000 --> 00:00:04,000");
    assert_eq!(matches[0].byte_offset, 2);
}

#[test]
fn test_validate_withPlainText_shouldReturnEmpty() {
    assert!(validate("just some text\nno timings at all\n").is_empty());
}

#[test]
fn test_validate_withConsistentCues_shouldReturnEmpty() {
    let text = "\
1
00:00:01,000 --> 00:00:02,000
First

2
00:00:03,000 --> 00:00:04,000
Second
";

    assert!(validate(text).is_empty());
}

#[test]
fn test_validate_withOverlappingCues_shouldReportWithLocation() {
    let text = "\
1
00:00:01,000 --> 00:00:02,000
First

2
00:00:01,500 --> 00:00:05,000
Second
";

    let errors = validate(text);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, TimingErrorKind::PrevEndAfterCurrStart);
    assert_eq!(errors[0].line, 6);
    assert_eq!(errors[0].offset, text.find("00:00:01,500").unwrap());
}

#[test]
fn test_validate_errorDisplay_shouldMatchTemplates() {
    let text = "\
1
00:00:01,000 --> 00:00:02,000
First

2
00:00:03,000 --> 00:00:02,500
Second
";

    let errors = validate(text);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Current subtitle starts after it ends at line 6"
    );
}
