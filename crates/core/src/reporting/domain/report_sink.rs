/// Output surface for analysis results.
///
/// Distinguishes plain text from warnings; everything else is layout.
pub trait ReportSink {
    fn title(&mut self, text: &str);
    fn heading(&mut self, text: &str);
    fn text(&mut self, text: &str);
    fn item(&mut self, text: &str);
    fn warning(&mut self, text: &str);
}
