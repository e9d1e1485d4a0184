//! Console reporting for CLI

use crate::application::{AuditObserver, AuditSummary};
use crate::domain::entities::{Classification, FileIssue, IssueKind};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 40;

/// Observer that prints the audit to the terminal
///
/// A spinner counts classified files; signal and problem lines are printed
/// above it.
pub struct ConsoleReporter {
    bar: ProgressBar,
    out: Mutex<Box<dyn Write + Send>>,
    print_summary: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// Progress lines and the closing summary on stdout
    pub fn new() -> Self {
        Self::with_writer(io::stdout(), true)
    }

    /// Progress lines on stderr and no summary block, leaving stdout to the
    /// JSON document
    pub fn for_json() -> Self {
        Self::with_writer(io::stderr(), false)
    }

    /// Writes progress lines to `out`; `print_summary` controls the closing
    /// summary block
    pub fn with_writer(out: impl Write + Send + 'static, print_summary: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} files classified")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        Self {
            bar,
            out: Mutex::new(Box::new(out)),
            print_summary,
        }
    }

    /// Prints a line without tearing the spinner, even when it is hidden
    fn line(&self, text: String) {
        self.bar.suspend(|| self.write_line(&text));
    }

    fn write_line(&self, text: &str) {
        let mut out = self.out.lock();
        // a closed pipe must not abort the audit
        let _ = writeln!(out, "{}", text).and_then(|()| out.flush());
    }
}

impl AuditObserver for ConsoleReporter {
    fn on_run_started(&self, source_root: &Path, vault_dir: &Path) {
        self.line(format!(
            "[*] Initiating Warden's audit on: {}",
            style(source_root.display()).cyan()
        ));
        self.line(format!(
            "[*] Target provenance vault: {}",
            style(vault_dir.display()).cyan()
        ));
    }

    fn on_file_classified(&self, _path: &Path, _classification: &Classification) {
        self.bar.inc(1);
    }

    fn on_signal_found(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.line(format!("[+] {} {}", style("FOUND SIGNAL:").green().bold(), name));
    }

    fn on_issue(&self, issue: &FileIssue) {
        let label = match issue.kind {
            IssueKind::Copy => "Copy failed:",
            IssueKind::Read => "Read failed:",
            IssueKind::Walk => "Cannot list:",
        };
        self.line(format!(
            "[!] {} {}: {}",
            style(label).yellow().bold(),
            issue.path.display(),
            issue.message
        ));
    }

    fn on_run_complete(&self, summary: &AuditSummary) {
        self.bar.finish_and_clear();

        if self.print_summary {
            self.write_line(&"-".repeat(RULE_WIDTH));
            self.write_line(&style("AUDIT COMPLETE").green().bold().to_string());
            for line in summary_lines(summary) {
                self.write_line(&line);
            }
        }
    }
}

/// The summary block, without colouring
pub fn summary_lines(summary: &AuditSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Total Files Scanned: {}", summary.total_classified()),
        format!("SIGNAL KEPT (Provenance): {}", summary.kept()),
        format!("NOISE IDENTIFIED (Entropy): {}", summary.noise()),
        format!("NEUTRAL (Drift): {}", summary.neutral()),
    ];

    if summary.read_errors() > 0 {
        lines.push(format!("UNREADABLE: {}", summary.read_errors()));
    }
    if summary.copy_failures() > 0 {
        lines.push(format!("COPY FAILED: {}", summary.copy_failures()));
    }

    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!(
        "High-Valence Assets secured in: {}",
        summary.vault_dir.display()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ScanTally;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            let raw = String::from_utf8_lossy(&self.0.lock()).into_owned();
            console::strip_ansi_codes(&raw).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn replay(reporter: &ConsoleReporter, summary: &AuditSummary) {
        reporter.on_run_started(&summary.source_root, &summary.vault_dir);
        let signal = summary.source_root.join("a.txt");
        reporter.on_file_classified(&signal, &Classification::Signal);
        reporter.on_signal_found(&signal);
        reporter.on_issue(&FileIssue::new(
            summary.source_root.join("b.txt"),
            IssueKind::Read,
            "access denied",
        ));
        reporter.on_run_complete(summary);
    }

    #[test]
    fn test_json_mode_writes_progress_but_no_summary() {
        let buffer = SharedBuffer::default();
        let reporter = ConsoleReporter::with_writer(buffer.clone(), false);

        replay(&reporter, &summary(ScanTally::default()));

        let output = buffer.contents();
        assert!(output.contains("Initiating Warden's audit on: /takeout"));
        assert!(output.contains("FOUND SIGNAL:"));
        assert!(output.contains("a.txt"));
        assert!(output.contains("/takeout/b.txt: access denied"));
        assert!(!output.contains("AUDIT COMPLETE"));
        assert!(!output.contains("Total Files Scanned"));
    }

    #[test]
    fn test_console_mode_ends_with_summary() {
        let buffer = SharedBuffer::default();
        let reporter = ConsoleReporter::with_writer(buffer.clone(), true);

        replay(
            &reporter,
            &summary(ScanTally {
                kept: 1,
                ..Default::default()
            }),
        );

        let output = buffer.contents();
        assert!(output.contains("AUDIT COMPLETE"));
        assert!(output.contains("Total Files Scanned: 1"));
        assert!(
            output
                .trim_end()
                .ends_with("High-Valence Assets secured in: /dest/PROVENANCE_VAULT")
        );
    }

    fn summary(tally: ScanTally) -> AuditSummary {
        AuditSummary {
            source_root: PathBuf::from("/takeout"),
            vault_dir: PathBuf::from("/dest/PROVENANCE_VAULT"),
            tally,
            issues: Vec::new(),
            duration_ms: 12,
        }
    }

    #[test]
    fn test_summary_lines_report_counts_and_vault() {
        let lines = summary_lines(&summary(ScanTally {
            kept: 2,
            noise: 3,
            neutral: 4,
            ..Default::default()
        }));

        assert_eq!(lines[0], "Total Files Scanned: 9");
        assert_eq!(lines[1], "SIGNAL KEPT (Provenance): 2");
        assert_eq!(lines[2], "NOISE IDENTIFIED (Entropy): 3");
        assert_eq!(lines[3], "NEUTRAL (Drift): 4");
        assert!(lines.last().unwrap().ends_with("/dest/PROVENANCE_VAULT"));
        assert!(!lines.iter().any(|l| l.starts_with("UNREADABLE")));
    }

    #[test]
    fn test_summary_lines_show_failures_only_when_present() {
        let lines = summary_lines(&summary(ScanTally {
            kept: 1,
            copy_failed: 1,
            read_errors: 2,
            ..Default::default()
        }));

        assert!(lines.contains(&"UNREADABLE: 2".to_string()));
        assert!(lines.contains(&"COPY FAILED: 1".to_string()));
        assert_eq!(lines[0], "Total Files Scanned: 1");
    }
}
