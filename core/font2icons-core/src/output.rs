//! Report output helpers (made by FontLab https://www.fontlab.com/)

use std::io::{self, Write};

use crate::export::ExportReport;

/// Write the report as a prettified JSON object followed by a newline.
pub fn write_json_pretty(report: &ExportReport, mut w: impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut w, report)?;
    w.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFailure;
    use std::path::PathBuf;

    #[test]
    fn json_report_lists_written_and_failed_codes() {
        let report = ExportReport {
            input: PathBuf::from("/fonts/icons.ttf"),
            output: PathBuf::from("/out"),
            written: vec![65, 66],
            failures: vec![ExportFailure {
                code: 67,
                path: PathBuf::from("/out/67.svg"),
                message: "denied".to_string(),
            }],
        };
        let mut buf = Vec::new();

        write_json_pretty(&report, &mut buf).expect("write json");

        let parsed: ExportReport = serde_json::from_slice(&buf).expect("parse");
        assert_eq!(parsed, report);
        assert!(buf.ends_with(b"\n"));
    }
}
