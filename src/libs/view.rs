use super::formatter::format_duration;
use super::messages::Message;
use super::worklog::IssueDurations;
use prettytable::{format::FormatBuilder, row, Table};
use std::io::Write;

pub struct View {}

impl View {
    /// Writes one aligned `<duration> <key> <summary>` row per issue,
    /// ordered by key, followed by a `Total:` line.
    pub fn durations<W: Write + ?Sized>(out: &mut W, durations: &IssueDurations) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.set_format(FormatBuilder::new().column_separator(' ').padding(0, 0).build());

        for (key, entry) in durations {
            table.add_row(row![format_duration(&entry.duration), key, entry.summary]);
        }

        if !durations.is_empty() {
            for line in table.to_string().lines() {
                writeln!(out, "{}", line.trim_end())?;
            }
        }

        writeln!(out, "{}", Message::ReportTotal(format_duration(&durations.total())))?;
        Ok(())
    }
}
