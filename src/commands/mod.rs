pub mod standup;

use anyhow::Result;
use clap::Parser;
use std::io::Write;

/// Summarizes the time you tracked against Jira issues for a given day
#[derive(Debug, Parser)]
#[command(name = "jira-standup", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub standup: standup::StandupArgs,
}

impl Cli {
    pub async fn menu<W: Write + ?Sized>(out: &mut W) -> Result<()> {
        let cli = Self::parse();
        standup::cmd(cli.standup, out).await
    }
}
