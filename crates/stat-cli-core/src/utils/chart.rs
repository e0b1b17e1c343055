//! 纯文本图表：直方图与箱线图

use std::fmt::Write;

use stat_core::{BoxPlot, Histogram};

use super::fmt::fmt_num;

const BAR_WIDTH: usize = 40;
const BOX_WIDTH: usize = 60;

/// 直方图上标注的参考线，例如平均值、中位数
#[derive(Debug, Clone, Copy)]
pub struct Marker<'a> {
    pub label: &'a str,
    pub value: f64,
}

impl<'a> Marker<'a> {
    pub fn new(label: &'a str, value: f64) -> Self {
        Self { label, value }
    }
}

/// 每个分箱一行，条形长度按最大频数缩放；落入分箱的标记追加在行尾
pub fn histogram_chart(hist: &Histogram, markers: &[Marker<'_>], precision: usize) -> String {
    let max = hist.max_count().max(1);
    let last = hist.bins.len().saturating_sub(1);
    let labels: Vec<String> = hist
        .bins
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let close = if i == last { ']' } else { ')' };
            format!(
                "[{}, {}{}",
                fmt_num(b.lower, precision),
                fmt_num(b.upper, precision),
                close
            )
        })
        .collect();
    let label_w = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (i, (bin, label)) in hist.bins.iter().zip(&labels).enumerate() {
        // 非零频数至少画一格
        let bar = "#".repeat((bin.count * BAR_WIDTH).div_ceil(max));
        let line = format!(
            "{:<lw$} | {:<bw$} {}",
            label,
            bar,
            bin.count,
            lw = label_w,
            bw = BAR_WIDTH
        );
        let notes: Vec<&str> = markers
            .iter()
            .filter(|m| hist.bin_index(m.value) == Some(i))
            .map(|m| m.label)
            .collect();
        if notes.is_empty() {
            out.push_str(&line);
        } else {
            let _ = write!(out, "{}  <- {}", line, notes.join(", "));
        }
        out.push('\n');
    }
    out
}

/// 横向箱线图：`|` 须端，`[` `]` 四分位，`M` 中位数，`o` 离群点
pub fn box_plot_chart(bp: &BoxPlot, min: f64, max: f64, precision: usize) -> String {
    let span = max - min;
    let pos = |v: f64| -> usize {
        if span <= 0.0 {
            BOX_WIDTH / 2
        } else {
            let p = ((v - min) / span * (BOX_WIDTH - 1) as f64).round();
            (p.max(0.0) as usize).min(BOX_WIDTH - 1)
        }
    };

    let mut line = vec![' '; BOX_WIDTH];
    fill(&mut line, pos(bp.lower_whisker), pos(bp.upper_whisker), '-');
    fill(&mut line, pos(bp.q1), pos(bp.q3), '=');
    line[pos(bp.lower_whisker)] = '|';
    line[pos(bp.upper_whisker)] = '|';
    line[pos(bp.q1)] = '[';
    line[pos(bp.q3)] = ']';
    line[pos(bp.median)] = 'M';
    for &o in &bp.outliers {
        line[pos(o)] = 'o';
    }

    let mut out: String = line.into_iter().collect::<String>().trim_end().to_string();
    out.push('\n');
    let lo = fmt_num(min, precision);
    let hi = fmt_num(max, precision);
    let gap = BOX_WIDTH.saturating_sub(lo.len() + hi.len()).max(1);
    let _ = writeln!(out, "{}{}{}", lo, " ".repeat(gap), hi);
    out
}

fn fill(line: &mut [char], a: usize, b: usize, ch: char) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    for c in &mut line[lo..=hi] {
        *c = ch;
    }
}
