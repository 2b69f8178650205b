use clap::Parser;
use tracing::debug;

use check_mj2lists::check::MailingList;
use check_mj2lists::config::load_config;
use check_mj2lists::http::build_http_client;
use check_mj2lists::logging;
use check_mj2lists::nagios::{ResultCollector, Severity};
use check_mj2lists::types::Cli;

/// Print an UNKNOWN status line and exit before any list is checked
fn exit_unknown(message: impl std::fmt::Display) -> ! {
    println!("{}: {}", Severity::Unknown, message);
    std::process::exit(Severity::Unknown.exit_code())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() {
                Severity::Unknown.exit_code()
            } else {
                0
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init_logging(cli.verbose);

    let config = load_config(&cli.file).unwrap_or_else(|e| exit_unknown(e));
    let http = build_http_client(&cli).unwrap_or_else(|e| exit_unknown(e));

    let lists: Vec<MailingList> = config
        .lists
        .into_iter()
        .map(|list| MailingList::from_config(list, http.clone()))
        .collect();

    let mut collector = ResultCollector::new();
    for list in &lists {
        debug!(list = list.name(), "checking list");
        collector.push(list.check().await);
    }

    collector.exit()
}
