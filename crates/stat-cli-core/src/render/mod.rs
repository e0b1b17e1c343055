//! Report renderers
//!
//! The statistics engine hands a [`Report`] to a [`ReportRenderer`]; every
//! output format (table, json, lesson) lives behind this one trait so the
//! engine stays free of presentation code.

mod json;
mod lesson;
mod table;

use std::io::{self, Write};

use stat_config::ReportFormat;
use stat_core::Report;

pub use json::JsonRenderer;
pub use lesson::LessonRenderer;
pub use table::TableRenderer;

pub trait ReportRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()>;
}

/// 按输出格式选择渲染器
pub fn renderer_for(format: ReportFormat, precision: usize) -> Box<dyn ReportRenderer> {
    log::debug!("rendering as {} (precision {})", format, precision);
    match format {
        ReportFormat::Table => Box::new(TableRenderer::new(precision)),
        ReportFormat::Json => Box::new(JsonRenderer),
        ReportFormat::Lesson => Box::new(LessonRenderer::new(precision)),
    }
}

pub fn render_to_string(renderer: &dyn ReportRenderer, report: &Report) -> io::Result<String> {
    let mut buf = Vec::new();
    renderer.render(report, &mut buf)?;
    String::from_utf8(buf).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stat_core::ReportOptions;

    #[test]
    fn every_format_renders() {
        let report = Report::build(
            "3, 5, 2, 5, 8, 10, 3".parse().unwrap(),
            &ReportOptions::default(),
        )
        .unwrap();
        for format in [ReportFormat::Table, ReportFormat::Json, ReportFormat::Lesson] {
            let text = render_to_string(renderer_for(format, 2).as_ref(), &report).unwrap();
            assert!(!text.is_empty(), "{} produced nothing", format);
        }
    }
}
