use std::io::{self, Write};

use crate::constants::MESSAGE_SEPARATOR;
use crate::nagios::{CheckResult, Severity};

/// Collects per-list results, keeping the worst status and every non-empty message.
///
/// Once anything is wrong, messages from healthy lists are left out of the summary so
/// the output line names only the problems.
#[derive(Debug, Default)]
pub struct ResultCollector {
    worst: Severity,
    messages: Vec<(Severity, String)>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append<I>(&mut self, results: I)
    where
        I: IntoIterator<Item = CheckResult>,
    {
        for result in results {
            self.push(result);
        }
    }

    pub fn push(&mut self, result: CheckResult) {
        self.worst = self.worst.max(result.severity);
        if !result.message.is_empty() {
            self.messages.push((result.severity, result.message));
        }
    }

    pub fn severity(&self) -> Severity {
        self.worst
    }

    /// Messages that make it into the summary, in the order they were collected
    pub fn messages(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(severity, _)| self.worst == Severity::Ok || *severity != Severity::Ok)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// The single plugin output line, without trailing newline
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.worst, self.messages().join(MESSAGE_SEPARATOR))
    }

    /// Print the summary line and terminate with the matching exit code.
    pub fn exit(self) -> ! {
        let mut stdout = io::stdout().lock();
        // stdout may already be closed by the caller
        let _ = writeln!(stdout, "{}", self.summary_line());
        let _ = stdout.flush();
        std::process::exit(self.worst.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collector_is_ok() {
        let collector = ResultCollector::new();
        assert_eq!(collector.severity(), Severity::Ok);
        assert_eq!(collector.summary_line(), "OK: ");
    }

    #[test]
    fn test_worst_severity_wins() {
        let mut collector = ResultCollector::new();
        collector.append([
            CheckResult::warning("List a is missing member(s) x@y.com."),
            CheckResult::critical("List b should not have member(s) z@y.com."),
            CheckResult::ok("List c, 2 members"),
        ]);
        assert_eq!(collector.severity(), Severity::Critical);
        assert_eq!(collector.severity().exit_code(), 2);
    }

    #[test]
    fn test_messages_keep_order_and_skip_empty() {
        let mut collector = ResultCollector::new();
        collector.append([
            CheckResult::warning("first"),
            CheckResult::warning(""),
            CheckResult::critical("second"),
        ]);
        assert_eq!(collector.summary_line(), "CRITICAL: first :: second");
    }

    #[test]
    fn test_all_ok_reports_every_list() {
        let mut collector = ResultCollector::new();
        collector.append([
            CheckResult::ok("List a, 2 members"),
            CheckResult::ok("List b, 1 members"),
        ]);
        assert_eq!(
            collector.summary_line(),
            "OK: List a, 2 members :: List b, 1 members"
        );
    }

    #[test]
    fn test_ok_lists_hidden_behind_problems() {
        let mut collector = ResultCollector::new();
        collector.append([
            CheckResult::ok("List a, 2 members"),
            CheckResult::critical("List b should not have member(s) c@x.com."),
        ]);
        assert_eq!(collector.severity().exit_code(), 2);
        assert_eq!(
            collector.summary_line(),
            "CRITICAL: List b should not have member(s) c@x.com."
        );
    }
}
