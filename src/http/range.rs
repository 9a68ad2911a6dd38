//! Range header evaluation
//!
//! Single-part byte ranges per RFC 7233, the subset browsers and media
//! players actually send. Multipart ranges and non-`bytes` units are treated
//! as absent, which downgrades the response to a full 200.

/// An inclusive byte span, already resolved against the body length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

/// What a `Range` header means for a body of a known length.
#[derive(Debug, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No usable range; serve the whole body with 200.
    Whole,
    /// Serve this span with 206.
    Slice(ByteRange),
    /// The range cannot overlap the body; answer 416.
    Unsatisfiable,
}

/// Evaluate a `Range` header against a body of `len` bytes.
///
/// Supported forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
/// Returned spans are inclusive and clamped to the body, so callers can
/// slice without further checks.
///
/// # Examples
/// ```
/// use spadev::http::range::{evaluate, ByteRange, RangeOutcome};
/// assert_eq!(
///     evaluate(Some("bytes=0-3"), 10),
///     RangeOutcome::Slice(ByteRange { start: 0, end: 3 })
/// );
/// assert_eq!(evaluate(None, 10), RangeOutcome::Whole);
/// ```
pub fn evaluate(header: Option<&str>, len: usize) -> RangeOutcome {
    let Some(ranges) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Whole;
    };

    // Single range only; a multipart response is not worth its weight here.
    if ranges.contains(',') {
        return RangeOutcome::Whole;
    }

    let Some((first, last)) = ranges.split_once('-') else {
        return RangeOutcome::Whole;
    };
    let (first, last) = (first.trim(), last.trim());

    if first.is_empty() {
        return evaluate_suffix(last, len);
    }

    let Ok(start) = first.parse::<usize>() else {
        return RangeOutcome::Whole;
    };
    if start >= len {
        return RangeOutcome::Unsatisfiable;
    }

    let end = if last.is_empty() {
        len - 1
    } else {
        let Ok(end) = last.parse::<usize>() else {
            return RangeOutcome::Whole;
        };
        end.min(len - 1)
    };

    if start > end {
        return RangeOutcome::Unsatisfiable;
    }

    RangeOutcome::Slice(ByteRange { start, end })
}

/// `bytes=-suffix`: the last `suffix` bytes of the body.
fn evaluate_suffix(suffix: &str, len: usize) -> RangeOutcome {
    let Ok(suffix) = suffix.parse::<usize>() else {
        return RangeOutcome::Whole;
    };
    if suffix == 0 || len == 0 {
        return RangeOutcome::Unsatisfiable;
    }
    RangeOutcome::Slice(ByteRange {
        start: len.saturating_sub(suffix),
        end: len - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_header_serves_whole_body() {
        assert_eq!(evaluate(None, 100), RangeOutcome::Whole);
    }

    #[test]
    fn closed_range() {
        assert_eq!(
            evaluate(Some("bytes=0-9"), 100),
            RangeOutcome::Slice(ByteRange { start: 0, end: 9 })
        );
    }

    #[test]
    fn open_ended_range_runs_to_eof() {
        assert_eq!(
            evaluate(Some("bytes=50-"), 100),
            RangeOutcome::Slice(ByteRange { start: 50, end: 99 })
        );
    }

    #[test]
    fn end_is_clamped_to_body() {
        assert_eq!(
            evaluate(Some("bytes=90-500"), 100),
            RangeOutcome::Slice(ByteRange { start: 90, end: 99 })
        );
    }

    #[test]
    fn suffix_range() {
        assert_eq!(
            evaluate(Some("bytes=-20"), 100),
            RangeOutcome::Slice(ByteRange { start: 80, end: 99 })
        );
    }

    #[test]
    fn oversized_suffix_is_the_whole_body() {
        assert_eq!(
            evaluate(Some("bytes=-500"), 100),
            RangeOutcome::Slice(ByteRange { start: 0, end: 99 })
        );
    }

    #[test]
    fn unsatisfiable_ranges() {
        assert_eq!(evaluate(Some("bytes=100-"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(evaluate(Some("bytes=-0"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(evaluate(Some("bytes=9-3"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(evaluate(Some("bytes=-5"), 0), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn ignored_forms_downgrade_to_200() {
        assert_eq!(evaluate(Some("bytes=a-b"), 100), RangeOutcome::Whole);
        assert_eq!(evaluate(Some("bytes=0-9,20-29"), 100), RangeOutcome::Whole);
        assert_eq!(evaluate(Some("chunks=0-9"), 100), RangeOutcome::Whole);
        assert_eq!(evaluate(Some("bytes=5"), 100), RangeOutcome::Whole);
    }
}
