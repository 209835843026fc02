#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate};
    use jira_standup::libs::date::{resolve_date, DayWindow};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_days_count_back_from_today() {
        let today = date(2024, 5, 10);
        assert_eq!(resolve_date("20", today).unwrap(), date(2024, 4, 20));
        assert_eq!(resolve_date("1", today).unwrap(), date(2024, 5, 9));
    }

    #[test]
    fn test_zero_days_is_today() {
        let today = date(2024, 5, 10);
        assert_eq!(resolve_date("0", today).unwrap(), today);
    }

    #[test]
    fn test_negative_days_move_forward() {
        let today = date(2024, 5, 10);
        assert_eq!(resolve_date("-1", today).unwrap(), date(2024, 5, 11));
    }

    #[test]
    fn test_empty_argument_is_yesterday() {
        let today = date(2024, 3, 1);
        assert_eq!(resolve_date("", today).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_explicit_date() {
        let today = date(2024, 5, 10);
        assert_eq!(resolve_date("2016-03-25", today).unwrap(), date(2016, 3, 25));
    }

    #[test]
    fn test_invalid_month_surfaces_parse_error() {
        let today = date(2024, 5, 10);
        let err = resolve_date("2016-23-25", today).unwrap_err();
        assert_eq!(err.to_string(), "input is out of range");
    }

    #[test]
    fn test_garbage_is_rejected() {
        let today = date(2024, 5, 10);
        assert!(resolve_date("yesterday", today).is_err());
        assert!(resolve_date("2016/03/25", today).is_err());
    }

    #[test]
    fn test_huge_relative_offset_is_rejected() {
        let today = date(2024, 5, 10);
        let err = resolve_date("9223372036854775807", today).unwrap_err();
        assert_eq!(err.to_string(), "Relative date of 9223372036854775807 days is out of range");
    }

    #[test]
    fn test_day_window_bounds() {
        let window = DayWindow::new(date(2016, 3, 25));
        assert_eq!(window.start().to_rfc3339(), "2016-03-25T00:00:00+00:00");
        assert_eq!(window.end().to_rfc3339(), "2016-03-26T00:00:00+00:00");
    }

    #[test]
    fn test_day_window_excludes_both_boundaries() {
        let window = DayWindow::new(date(2016, 3, 25));
        let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();

        assert!(!window.contains(&at("2016-03-25T00:00:00Z")));
        assert!(window.contains(&at("2016-03-25T00:00:01Z")));
        assert!(window.contains(&at("2016-03-25T23:59:59.999Z")));
        assert!(!window.contains(&at("2016-03-26T00:00:00Z")));
        assert!(!window.contains(&at("2016-03-24T12:00:00Z")));
    }

    #[test]
    fn test_day_window_compares_instants_across_offsets() {
        let window = DayWindow::new(date(2016, 3, 25));
        let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();

        // 01:00 UTC on the 25th
        assert!(window.contains(&at("2016-03-24T20:00:00-05:00")));
        // 23:00 UTC on the 24th
        assert!(!window.contains(&at("2016-03-25T01:00:00+02:00")));
    }
}
