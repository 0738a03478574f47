/// Format a second count as `MM:SS`.
///
/// Both fields are zero-padded to two digits. Minutes past 99 are printed in
/// full rather than wrapped.
pub fn format_mm_ss(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(5), "00:05");
        assert_eq!(format_mm_ss(65), "01:05");
    }

    #[test]
    fn full_work_phase() {
        assert_eq!(format_mm_ss(30 * 60), "30:00");
        assert_eq!(format_mm_ss(30 * 60 - 1), "29:59");
    }

    #[test]
    fn minutes_beyond_two_digits_are_not_truncated() {
        assert_eq!(format_mm_ss(100 * 60 + 1), "100:01");
    }

    proptest! {
        #[test]
        fn matches_minutes_and_seconds(s in 0u64..6000) {
            let text = format_mm_ss(s);
            prop_assert_eq!(text.len(), 5);
            let (mm, ss) = text.split_once(':').unwrap();
            prop_assert_eq!(mm.parse::<u64>().unwrap(), s / 60);
            prop_assert_eq!(ss.parse::<u64>().unwrap(), s % 60);
        }
    }
}
