pub mod log_notifier;
pub mod text_report_sink;
