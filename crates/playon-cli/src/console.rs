use playon_core::notify::{Notifier, Severity, TITLE_PREFIX};

/// Prints notices to the terminal: errors to stderr, the rest to stdout.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn display_message(&self, title: &str, message: &str, severity: Severity) {
        let line = format!("[{severity}] {TITLE_PREFIX}{title}: {message}");
        match severity {
            Severity::Error => eprintln!("{line}"),
            Severity::Ok | Severity::Info => println!("{line}"),
        }
    }
}
