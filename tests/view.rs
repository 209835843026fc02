#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jira_standup::libs::{view::View, worklog::IssueDurations};

    fn render(durations: &IssueDurations) -> String {
        let mut out = Vec::new();
        View::durations(&mut out, durations).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_standup_report() {
        let mut durations = IssueDurations::new();
        durations.seed("PROJ-13", "Issue 13");
        durations.seed("PROJ-12", "Issue 12");
        durations.add("PROJ-12", Duration::hours(2));
        durations.add("PROJ-12", Duration::hours(1));
        durations.add("PROJ-13", Duration::hours(1));

        assert_eq!(
            render(&durations),
            "3h0m0s PROJ-12 Issue 12\n1h0m0s PROJ-13 Issue 13\nTotal: 4h0m0s\n"
        );
    }

    #[test]
    fn test_empty_report_prints_only_total() {
        assert_eq!(render(&IssueDurations::new()), "Total: 0s\n");
    }

    #[test]
    fn test_zero_rows_are_printed() {
        let mut durations = IssueDurations::new();
        durations.seed("PROJ-1", "Nothing logged");

        assert_eq!(render(&durations), "0s PROJ-1 Nothing logged\nTotal: 0s\n");
    }

    #[test]
    fn test_columns_are_aligned() {
        let mut durations = IssueDurations::new();
        durations.seed("PROJ-1", "Long one");
        durations.seed("PROJ-100", "Short one");
        durations.add("PROJ-1", Duration::hours(10));
        durations.add("PROJ-100", Duration::minutes(5));

        assert_eq!(
            render(&durations),
            "10h0m0s PROJ-1   Long one\n5m0s    PROJ-100 Short one\nTotal: 10h5m0s\n"
        );
    }

    #[test]
    fn test_unknown_key_is_not_added() {
        let mut durations = IssueDurations::new();
        durations.seed("PROJ-1", "Known");
        durations.add("PROJ-2", Duration::hours(1));

        assert_eq!(durations.len(), 1);
        assert_eq!(render(&durations), "0s PROJ-1 Known\nTotal: 0s\n");
    }
}
