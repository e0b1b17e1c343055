//! 描述统计计算
//!
//! 所有函数都是对 [`Sample`] 的纯计算，不缓存、不修改输入。
//! `Sample` 构造时已保证非空，这里不再重复校验；方差类函数对 n == 1
//! 显式返回 [`StatError::InsufficientData`]。

use std::collections::HashMap;

use crate::error::{StatError, StatResult};
use crate::sample::Sample;

/// 算术平均值：总和 / 个数
pub fn mean(sample: &Sample) -> f64 {
    mean_of(sample.values())
}

/// 中位数：排序后奇数个取中间值，偶数个取中间两个值的平均
pub fn median(sample: &Sample) -> f64 {
    median_of_sorted(&sample.sorted())
}

/// 众数集合
///
/// 统计每个不同取值的出现次数，记最高频次为 `freq_max`：
/// - `freq_max == 1`（没有任何重复值）时返回空集合，表示“无众数”，
///   而不是“所有值都是众数”；
/// - 否则返回所有频次等于 `freq_max` 的取值（支持多众数）。
///
/// 结果按各取值在样本中首次出现的顺序排列，`0.0` 与 `-0.0` 视为同一取值。
pub fn modes(sample: &Sample) -> Vec<f64> {
    let mut order: Vec<f64> = Vec::new();
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &v in sample.values() {
        let v = canonical_zero(v);
        let count = counts.entry(v.to_bits()).or_insert(0);
        if *count == 0 {
            order.push(v);
        }
        *count += 1;
    }

    let freq_max = counts.values().copied().max().unwrap_or(0);
    if freq_max <= 1 {
        return Vec::new();
    }
    order
        .into_iter()
        .filter(|v| counts.get(&v.to_bits()) == Some(&freq_max))
        .collect()
}

/// 样本方差（Bessel 校正，分母 n - 1）
pub fn variance(sample: &Sample) -> StatResult<f64> {
    variance_of(sample.values())
}

/// 标准差：方差的平方根
pub fn std_dev(sample: &Sample) -> StatResult<f64> {
    variance(sample).map(f64::sqrt)
}

/// 第 `p` 百分位数（p ∈ [0, 100]），排名之间线性插值
pub fn percentile(sample: &Sample, p: f64) -> StatResult<f64> {
    percentile_of_sorted(&sample.sorted(), p)
}

pub(crate) fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

pub(crate) fn variance_of(values: &[f64]) -> StatResult<f64> {
    let n = values.len();
    if n < 2 {
        return Err(StatError::InsufficientData {
            required: 2,
            actual: n,
        });
    }
    let m = mean_of(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    Ok(sum_sq / (n - 1) as f64)
}

pub(crate) fn percentile_of_sorted(sorted: &[f64], p: f64) -> StatResult<f64> {
    if !p.is_finite() || !(0.0..=100.0).contains(&p) {
        return Err(StatError::InvalidPercentile(p));
    }
    let n = sorted.len();
    if n == 0 {
        return Err(StatError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if n == 1 {
        return Ok(sorted[0]);
    }
    let rank = p / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    Ok(lerp(sorted[lo], sorted[hi], rank - lo as f64))
}

/// 对称形式的线性插值：t >= 0.5 时从上端回推，保证 t == 1 时精确落在 `b`
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 { b - diff * (1.0 - t) } else { a + diff * t }
}

fn canonical_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
