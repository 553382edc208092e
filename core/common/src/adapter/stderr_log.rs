//! -v / --verbose 用: 人間向けに整形して stderr に出す Log 実装
//!
//! fields は 1 行に収まるよう要点のみ出力する（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 400;

/// 整形済みの 1 行を作る
fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(layer) = &record.layer {
        line.push_str(&format!(" layer={}", layer));
    }
    if let Some(fields) = &record.fields {
        let s = serde_json::to_string(fields).unwrap_or_default();
        if s.chars().count() > FIELDS_SUMMARY_MAX {
            let truncated: String = s.chars().take(FIELDS_SUMMARY_MAX).collect();
            line.push_str(&format!(" {}... (len={})", truncated, s.len()));
        } else {
            line.push(' ');
            line.push_str(&s);
        }
    }
    line
}

/// stderr に出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;

    #[test]
    fn test_format_line() {
        let rec = LogRecord::new(LogLevel::Warn, "file skipped")
            .layer("usecase")
            .field("path", serde_json::json!("a.dart"));
        assert_eq!(format_line(&rec), r#"[warn] file skipped layer=usecase {"path":"a.dart"}"#);
    }

    #[test]
    fn test_format_line_truncates_fields() {
        let rec = LogRecord::new(LogLevel::Debug, "big").field("x", serde_json::json!("a".repeat(1000)));
        let line = format_line(&rec);
        assert!(line.contains("... (len="));
        assert!(line.len() < 600);
    }
}
