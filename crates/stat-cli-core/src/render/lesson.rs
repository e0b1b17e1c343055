//! 教学报告：逐个概念解释统计量，并代入用户自己的数字

use std::io::{self, Write};

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Row as CRow, Table, presets::ASCII_MARKDOWN,
};
use stat_core::{Deviations, Report};

use super::ReportRenderer;
use crate::utils::chart::{Marker, box_plot_chart, histogram_chart};
use crate::utils::{fmt_list, fmt_num, fmt_plain};

const RULE: &str = "---";

const RECAP: &[(&str, &str, &str)] = &[
    (
        "**Mean**",
        "Sum of the values divided by how many there are",
        "Symmetric data without extreme values",
    ),
    (
        "**Median**",
        "Middle value of the sorted data",
        "Data with extreme values (outliers)",
    ),
    (
        "**Mode**",
        "Value that appears most often",
        "Categorical data, or to find the most common value",
    ),
    (
        "**Variance**",
        "Average of the squared differences from the mean",
        "Measuring how spread out the data is",
    ),
    (
        "**Std deviation**",
        "Square root of the variance",
        "A more intuitive measure of spread",
    ),
    (
        "**Percentiles**",
        "Values that split the data into equal parts",
        "Understanding the relative position of a value",
    ),
];

pub struct LessonRenderer {
    precision: usize,
}

impl LessonRenderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn num(&self, v: f64) -> String {
        fmt_num(v, self.precision)
    }

    fn intro(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "# Learning Statistics")?;
        writeln!(out)?;
        writeln!(
            out,
            "Type your own numbers and see what mean, median, mode, variance, \
             standard deviation and percentiles mean for them."
        )?;
        writeln!(out)?;
        writeln!(out, "## Your numbers")?;
        writeln!(out)?;
        writeln!(out, "{}", fmt_list(report.sample.values()))
    }

    fn mean(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let s = &report.summary;
        let terms: Vec<String> = report.sample.values().iter().map(|v| fmt_plain(*v)).collect();
        section(out, "Mean")?;
        writeln!(
            out,
            "The **mean** is what you get by adding all the numbers and dividing by how many numbers there are."
        )?;
        writeln!(out)?;
        writeln!(out, "    Mean = (sum of the values) / (number of values)")?;
        writeln!(out)?;
        writeln!(out, "In your case:")?;
        writeln!(out)?;
        writeln!(
            out,
            "    ({}) / {} = {}",
            terms.join(" + "),
            s.count,
            self.num(s.mean)
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "**Interpreting:** the mean stands for the \"center\" of your data, but very large \
             or very small numbers (outliers) can pull it away."
        )?;
        writeln!(out)?;
        self.histogram(report, &[Marker::new("mean", s.mean)], out)
    }

    fn median(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let s = &report.summary;
        section(out, "Median")?;
        writeln!(
            out,
            "The **median** is the number in the middle once the data is sorted in ascending order."
        )?;
        writeln!(out)?;
        writeln!(out, "If the count is odd, the median is the central number.")?;
        writeln!(
            out,
            "If it is even, it is the average of the two central numbers."
        )?;
        writeln!(out)?;
        writeln!(out, "Your sorted numbers:")?;
        writeln!(out)?;
        writeln!(out, "{}", fmt_list(&s.sorted_sample))?;
        writeln!(out)?;
        let n = s.count;
        if n % 2 == 1 {
            writeln!(
                out,
                "You have {} numbers (odd), so the median is number #{}: **{}**",
                n,
                n / 2 + 1,
                self.num(s.median)
            )?;
        } else {
            writeln!(
                out,
                "You have {} numbers (even), so the median is the average of #{} and #{}: **{}**",
                n,
                n / 2,
                n / 2 + 1,
                self.num(s.median)
            )?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "**Why use the median?** Unlike the mean, very high or very low numbers (outliers) \
             do not move it."
        )?;
        writeln!(out)?;
        self.histogram(report, &[Marker::new("median", s.median)], out)
    }

    fn mode(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let s = &report.summary;
        section(out, "Mode")?;
        if s.mode.is_empty() {
            writeln!(
                out,
                "There is no mode: every number appears the same number of times."
            )?;
        } else {
            writeln!(
                out,
                "The **mode** is the value (or values) that appears most often."
            )?;
            writeln!(out)?;
            writeln!(out, "In your case, mode(s): {}", fmt_list(&s.mode))?;
        }
        writeln!(out)?;
        let markers: Vec<Marker<'_>> = s.mode.iter().map(|&m| Marker::new("mode", m)).collect();
        self.histogram(report, &markers, out)
    }

    fn spread(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let s = &report.summary;
        section(out, "Variance and Standard Deviation")?;
        writeln!(
            out,
            "**Variance** measures how spread out the numbers are around the mean."
        )?;
        writeln!(
            out,
            "It is computed from the squared differences between each number and the mean:"
        )?;
        writeln!(out)?;
        writeln!(out, "    Variance = Σ (xᵢ - x̄)² / (n - 1)")?;
        writeln!(out)?;
        writeln!(out, "where:")?;
        writeln!(out)?;
        writeln!(out, "- xᵢ are the individual values")?;
        writeln!(out, "- x̄ is the mean of the values")?;
        writeln!(out, "- n is the total number of values")?;
        writeln!(out)?;
        writeln!(out, "**Example with your numbers:**")?;
        writeln!(out)?;
        writeln!(out, "{}", self.deviation_table(&report.deviations))?;
        writeln!(out)?;
        writeln!(
            out,
            "Sum of the squared differences: {}",
            self.num(report.deviations.sum_sq)
        )?;

        let (variance, std_dev) = match (s.variance, s.std_dev) {
            (Some(v), Some(sd)) => (v, sd),
            _ => {
                writeln!(out)?;
                writeln!(
                    out,
                    "With a single number there is no spread to measure: n - 1 = 0, so the \
                     variance and the standard deviation are undefined."
                )?;
                return Ok(());
            }
        };
        writeln!(
            out,
            "Divided by n - 1 = {} this gives the variance: **{}**",
            s.count - 1,
            self.num(variance)
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "The **standard deviation** is the square root of the variance, which brings it back \
             to the same unit as the data."
        )?;
        writeln!(out)?;
        writeln!(out, "In your case, the standard deviation is: **{}**", self.num(std_dev))?;
        writeln!(out)?;
        if let Some((lo, hi)) = s.spread_band() {
            let inside = s.sorted_sample.iter().filter(|&&v| v >= lo && v <= hi).count();
            writeln!(
                out,
                "Mean ± 1 standard deviation spans [{}, {}]; {} of your {} numbers fall inside it.",
                self.num(lo),
                self.num(hi),
                inside,
                s.count
            )?;
            writeln!(out)?;
        }
        writeln!(out, "**Interpreting:**")?;
        writeln!(
            out,
            "- A small standard deviation means the data sits close to the mean."
        )?;
        writeln!(
            out,
            "- A large standard deviation means the data is widely spread."
        )
    }

    fn percentiles(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let s = &report.summary;
        section(out, "Percentiles (including quartiles)")?;
        writeln!(out, "Percentiles split your numbers into 100 equal parts.")?;
        writeln!(out)?;
        writeln!(
            out,
            "- The 25th percentile (Q1) separates the lowest 25% of the data: **{}**",
            self.num(s.p25)
        )?;
        writeln!(
            out,
            "- The 50th percentile (Q2) is the median: **{}**",
            self.num(s.p50)
        )?;
        writeln!(
            out,
            "- The 75th percentile (Q3) separates the highest 25% of the data: **{}**",
            self.num(s.p75)
        )?;
        for (p, v) in &s.extra_percentiles {
            writeln!(out, "- The {}th percentile: **{}**", fmt_plain(*p), self.num(*v))?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "They help you see how the data is distributed, especially when there are many \
             small or large values."
        )?;
        writeln!(out)?;
        writeln!(out, "Box plot (median, quartiles and outliers):")?;
        writeln!(out)?;
        writeln!(out, "```text")?;
        write!(
            out,
            "{}",
            box_plot_chart(&report.box_plot, s.min, s.max, self.precision)
        )?;
        writeln!(out, "```")?;
        writeln!(out)?;
        let bp = &report.box_plot;
        writeln!(
            out,
            "IQR = Q3 - Q1 = {}. Values outside [{}, {}] count as outliers: {}",
            self.num(bp.iqr),
            self.num(bp.lower_fence),
            self.num(bp.upper_fence),
            if bp.outliers.is_empty() {
                "none".to_string()
            } else {
                fmt_list(&bp.outliers)
            }
        )
    }

    fn recap(&self, out: &mut dyn Write) -> io::Result<()> {
        section(out, "Recap")?;
        let mut t = markdown_table(vec!["Concept", "What is it?", "When to use it?"]);
        for (concept, what, when) in RECAP {
            t.add_row(vec![*concept, *what, *when]);
        }
        writeln!(out, "{}", t)
    }

    fn histogram(
        &self,
        report: &Report,
        markers: &[Marker<'_>],
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(out, "```text")?;
        write!(
            out,
            "{}",
            histogram_chart(&report.histogram, markers, self.precision)
        )?;
        writeln!(out, "```")
    }

    fn deviation_table(&self, dev: &Deviations) -> Table {
        let mut t = markdown_table(vec!["Value", "Difference from mean", "Difference²"]);
        for r in &dev.rows {
            let mut row = CRow::new();
            row.add_cell(Cell::new(fmt_plain(r.value)).set_alignment(CellAlignment::Right));
            row.add_cell(Cell::new(self.num(r.diff)).set_alignment(CellAlignment::Right));
            row.add_cell(Cell::new(self.num(r.diff_sq)).set_alignment(CellAlignment::Right));
            t.add_row(row);
        }
        t
    }
}

impl ReportRenderer for LessonRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        self.intro(report, out)?;
        self.mean(report, out)?;
        self.median(report, out)?;
        self.mode(report, out)?;
        self.spread(report, out)?;
        self.percentiles(report, out)?;
        self.recap(out)
    }
}

fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "## {}", title)?;
    writeln!(out)
}

fn markdown_table(header: Vec<&str>) -> Table {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(header);
    t
}
