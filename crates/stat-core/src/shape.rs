//! 分布形态：离差表、直方图分箱、箱线图
//!
//! 这些结构只用于展示，全部由 [`Sample`] 即时推导。

use serde_derive::Serialize;

use crate::engine::{mean_of, median_of_sorted, percentile_of_sorted};
use crate::error::StatResult;
use crate::sample::Sample;

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// 箱线图须的倍数（Tukey fences）
const FENCE_FACTOR: f64 = 1.5;

/// 离差表中的一行：`(x, x - mean, (x - mean)²)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationRow {
    pub value: f64,
    pub diff: f64,
    pub diff_sq: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deviations {
    pub rows: Vec<DeviationRow>,
    pub sum_sq: f64,
}

/// 按原始顺序列出每个值与平均值的差及其平方
pub fn deviations(sample: &Sample) -> Deviations {
    let m = mean_of(sample.values());
    let rows: Vec<DeviationRow> = sample
        .values()
        .iter()
        .map(|&value| {
            let diff = value - m;
            DeviationRow {
                value,
                diff,
                diff_sq: diff * diff,
            }
        })
        .collect();
    let sum_sq = rows.iter().map(|r| r.diff_sq).sum();
    Deviations { rows, sum_sq }
}

/// 直方图的一个分箱，区间为 `[lower, upper)`，最后一个分箱右端闭合
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// `value` 落在哪个分箱
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let last = self.bins.len().checked_sub(1)?;
        self.bins.iter().enumerate().position(|(i, b)| {
            value >= b.lower && (value < b.upper || (i == last && value <= b.upper))
        })
    }
}

/// 在 `[min, max]` 上等宽分箱；`bins` 为 0 时按 1 处理，常数样本只产生一个分箱
pub fn histogram(sample: &Sample, bins: usize) -> Histogram {
    let sorted = sample.sorted();
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if min == max {
        return Histogram {
            bins: vec![Bin {
                lower: min,
                upper: max,
                count: sorted.len(),
            }],
        };
    }

    let n_bins = bins.max(1);
    let width = (max - min) / n_bins as f64;
    let mut out: Vec<Bin> = (0..n_bins)
        .map(|i| Bin {
            lower: min + width * i as f64,
            upper: if i + 1 == n_bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for v in sorted {
        let idx = (((v - min) / width).floor() as usize).min(n_bins - 1);
        out[idx].count += 1;
    }
    Histogram { bins: out }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlot {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// 围栏内最小值
    pub lower_whisker: f64,
    /// 围栏内最大值
    pub upper_whisker: f64,
    /// 围栏外的点，升序
    pub outliers: Vec<f64>,
}

pub fn box_plot(sample: &Sample) -> StatResult<BoxPlot> {
    let sorted = sample.sorted();
    let q1 = percentile_of_sorted(&sorted, 25.0)?;
    let q3 = percentile_of_sorted(&sorted, 75.0)?;
    let iqr = q3 - q1;
    let lower_fence = q1 - FENCE_FACTOR * iqr;
    let upper_fence = q3 + FENCE_FACTOR * iqr;

    let (inside, outliers): (Vec<f64>, Vec<f64>) = sorted
        .iter()
        .partition(|&&v| v >= lower_fence && v <= upper_fence);
    // 四分位数总在围栏内，inside 至少包含一个样本值
    let lower_whisker = inside.first().copied().unwrap_or(q1);
    let upper_whisker = inside.last().copied().unwrap_or(q3);

    Ok(BoxPlot {
        q1,
        median: median_of_sorted(&sorted),
        q3,
        iqr,
        lower_fence,
        upper_fence,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}
