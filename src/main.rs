use jira_standup::commands::Cli;
use jira_standup::libs::messages::macros::is_debug_mode;
use jira_standup::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = Cli::menu(&mut std::io::stdout()).await {
        msg_error!(format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Installs the stderr tracing subscriber when debug mode is on.
///
/// `RUST_LOG` selects the filter; `JIRA_STANDUP_DEBUG` alone enables debug
/// output of this crate.
fn init_logging() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jira_standup=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
