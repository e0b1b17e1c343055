use std::io::{self, Write};

use stat_core::Report;

use super::ReportRenderer;

/// 原始数值，不做精度截断
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    }
}
