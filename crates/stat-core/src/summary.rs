use serde_derive::Serialize;

use crate::engine::{mean_of, median_of_sorted, modes, percentile_of_sorted, variance_of};
use crate::error::{StatError, StatResult};
use crate::sample::Sample;
use crate::shape::{
    BoxPlot, DEFAULT_HISTOGRAM_BINS, Deviations, Histogram, box_plot, deviations, histogram,
};

/// 展示层消费的结构化统计结果
///
/// `variance` / `std_dev` 在样本只有一个值时为 `None`（分母 n - 1 为 0）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSummary {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<f64>,
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub iqr: f64,
    pub sorted_sample: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_percentiles: Vec<(f64, f64)>,
}

impl StatSummary {
    /// 平均值 ± 1 个标准差构成的区间
    pub fn spread_band(&self) -> Option<(f64, f64)> {
        self.std_dev.map(|sd| (self.mean - sd, self.mean + sd))
    }
}

/// 对单一排序副本一次性计算全部统计量
pub fn summarize(sample: &Sample, extra_percentiles: &[f64]) -> StatResult<StatSummary> {
    let sorted = sample.sorted();
    let count = sorted.len();

    let variance = match variance_of(sample.values()) {
        Ok(v) => Some(v),
        Err(StatError::InsufficientData { actual, .. }) => {
            log::warn!(
                "sample has {} value(s); variance and standard deviation are undefined",
                actual
            );
            None
        }
        Err(e) => return Err(e),
    };

    let p25 = percentile_of_sorted(&sorted, 25.0)?;
    let p50 = percentile_of_sorted(&sorted, 50.0)?;
    let p75 = percentile_of_sorted(&sorted, 75.0)?;
    let extra_percentiles = extra_percentiles
        .iter()
        .map(|&p| percentile_of_sorted(&sorted, p).map(|v| (p, v)))
        .collect::<StatResult<Vec<_>>>()?;

    let summary = StatSummary {
        count,
        sum: sample.values().iter().sum(),
        min: sorted[0],
        max: sorted[count - 1],
        mean: mean_of(sample.values()),
        median: median_of_sorted(&sorted),
        mode: modes(sample),
        variance,
        std_dev: variance.map(f64::sqrt),
        p25,
        p50,
        p75,
        iqr: p75 - p25,
        sorted_sample: sorted,
        extra_percentiles,
    };
    log::debug!(
        "summarized {} values: mean={} median={}",
        summary.count,
        summary.mean,
        summary.median
    );
    Ok(summary)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub histogram_bins: usize,
    pub extra_percentiles: Vec<f64>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            extra_percentiles: Vec::new(),
        }
    }
}

/// 一次请求的完整结果：摘要加上讲解所需的推导数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sample: Sample,
    pub summary: StatSummary,
    pub deviations: Deviations,
    pub histogram: Histogram,
    pub box_plot: BoxPlot,
}

impl Report {
    pub fn build(sample: Sample, opts: &ReportOptions) -> StatResult<Self> {
        let summary = summarize(&sample, &opts.extra_percentiles)?;
        let deviations = deviations(&sample);
        let histogram = histogram(&sample, opts.histogram_bins);
        let box_plot = box_plot(&sample)?;
        Ok(Self {
            sample,
            summary,
            deviations,
            histogram,
            box_plot,
        })
    }
}
