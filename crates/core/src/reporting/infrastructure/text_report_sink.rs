use std::io::Write;

use crate::reporting::domain::report_sink::ReportSink;

/// Renders a report as plain text lines.
///
/// Write failures are logged and otherwise ignored; a broken output stream
/// must not abort an analysis that has already run.
pub struct TextReportSink<W: Write> {
    out: W,
}

impl<W: Write> TextReportSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, prefix: &str, text: &str) {
        if let Err(e) = writeln!(self.out, "{prefix}{text}") {
            log::warn!("Failed to write report line: {e}");
        }
    }
}

impl<W: Write> ReportSink for TextReportSink<W> {
    fn title(&mut self, text: &str) {
        self.line("# ", text);
    }

    fn heading(&mut self, text: &str) {
        self.line("\n## ", text);
    }

    fn text(&mut self, text: &str) {
        self.line("", text);
    }

    fn item(&mut self, text: &str) {
        self.line("  - ", text);
    }

    fn warning(&mut self, text: &str) {
        self.line("\u{26a0} ", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut TextReportSink<Vec<u8>>)) -> String {
        let mut sink = TextReportSink::new(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_layout_prefixes() {
        let out = render(|s| {
            s.title("Emotion analysis");
            s.heading("All emotions");
            s.item("Happy: 92.50%");
            s.text("plain");
        });
        assert_eq!(
            out,
            "# Emotion analysis\n\n## All emotions\n  - Happy: 92.50%\nplain\n"
        );
    }

    #[test]
    fn test_warning_is_marked() {
        let out = render(|s| s.warning("careful"));
        assert_eq!(out, "\u{26a0} careful\n");
    }
}
