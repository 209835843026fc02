#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jira_standup::libs::formatter::format_duration;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "0s");
    }

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration(&Duration::seconds(1)), "1s");
        assert_eq!(format_duration(&Duration::seconds(59)), "59s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(&Duration::minutes(1)), "1m0s");
        assert_eq!(format_duration(&Duration::seconds(90)), "1m30s");
        assert_eq!(format_duration(&Duration::minutes(59)), "59m0s");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(&Duration::hours(1)), "1h0m0s");
        assert_eq!(format_duration(&Duration::hours(3)), "3h0m0s");
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::seconds(5))), "2h0m5s");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45) + Duration::seconds(30))), "8h45m30s");
    }

    #[test]
    fn test_format_duration_large_hours() {
        assert_eq!(format_duration(&Duration::hours(24)), "24h0m0s");
        assert_eq!(format_duration(&Duration::hours(100)), "100h0m0s");
    }

    #[test]
    fn test_format_duration_negative() {
        assert_eq!(format_duration(&Duration::hours(-1)), "-1h0m0s");
        assert_eq!(format_duration(&Duration::seconds(-30)), "-30s");
    }

    #[test]
    fn test_format_duration_drops_subsecond_precision() {
        assert_eq!(format_duration(&Duration::milliseconds(1500)), "1s");
        assert_eq!(format_duration(&Duration::milliseconds(999)), "0s");
    }
}
