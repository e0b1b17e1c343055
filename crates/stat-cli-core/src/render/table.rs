use std::io::{self, Write};

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Row as CRow, Table, presets::ASCII_MARKDOWN,
};
use stat_core::{Report, StatSummary};

use super::ReportRenderer;
use crate::utils::{fmt_list, fmt_num, fmt_opt, fmt_plain};

pub struct TableRenderer {
    precision: usize,
}

impl TableRenderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn rows(&self, s: &StatSummary) -> Vec<(String, String)> {
        let p = self.precision;
        let mode = if s.mode.is_empty() {
            "none".to_string()
        } else {
            s.mode.iter().map(|v| fmt_plain(*v)).collect::<Vec<_>>().join(", ")
        };
        let mut rows = vec![
            ("Count".to_string(), s.count.to_string()),
            ("Sum".to_string(), fmt_num(s.sum, p)),
            ("Min".to_string(), fmt_num(s.min, p)),
            ("Max".to_string(), fmt_num(s.max, p)),
            ("Mean".to_string(), fmt_num(s.mean, p)),
            ("Median".to_string(), fmt_num(s.median, p)),
            ("Mode".to_string(), mode),
            ("Variance (n-1)".to_string(), fmt_opt(s.variance, p)),
            ("Std deviation".to_string(), fmt_opt(s.std_dev, p)),
            ("Q1 (p25)".to_string(), fmt_num(s.p25, p)),
            ("Q2 (p50)".to_string(), fmt_num(s.p50, p)),
            ("Q3 (p75)".to_string(), fmt_num(s.p75, p)),
            ("IQR".to_string(), fmt_num(s.iqr, p)),
        ];
        for (pct, v) in &s.extra_percentiles {
            rows.push((format!("p{}", fmt_plain(*pct)), fmt_num(*v, p)));
        }
        rows
    }
}

impl ReportRenderer for TableRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let mut t = Table::new();
        t.load_preset(ASCII_MARKDOWN);
        t.set_content_arrangement(ContentArrangement::Dynamic);
        t.set_header(vec!["Statistic", "Value"]);
        for (name, value) in self.rows(&report.summary) {
            let mut row = CRow::new();
            row.add_cell(Cell::new(name).set_alignment(CellAlignment::Left));
            row.add_cell(Cell::new(value).set_alignment(CellAlignment::Right));
            t.add_row(row);
        }
        writeln!(out, "{}", t)?;
        writeln!(out, "\nSorted: {}", fmt_list(&report.summary.sorted_sample))
    }
}
