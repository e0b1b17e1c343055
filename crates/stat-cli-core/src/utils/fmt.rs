/// 固定小数位
pub fn fmt_num(v: f64, precision: usize) -> String {
    format!("{:.*}", precision, v)
}

/// 缺失值显示为 `n/a`
pub fn fmt_opt(v: Option<f64>, precision: usize) -> String {
    v.map(|v| fmt_num(v, precision))
        .unwrap_or_else(|| "n/a".to_string())
}

/// 最短表示：整数值不带小数部分（`3.0` -> `3`），其余原样
pub fn fmt_plain(v: f64) -> String {
    format!("{}", v)
}

/// `[3, 5, 2.5]`
pub fn fmt_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| fmt_plain(*v)).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_drops_integral_fraction() {
        assert_eq!(fmt_plain(3.0), "3");
        assert_eq!(fmt_plain(-2.5), "-2.5");
        assert_eq!(fmt_plain(0.1), "0.1");
    }

    #[test]
    fn fixed_precision() {
        assert_eq!(fmt_num(5.142857, 2), "5.14");
        assert_eq!(fmt_num(5.0, 0), "5");
        assert_eq!(fmt_opt(None, 2), "n/a");
        assert_eq!(fmt_opt(Some(2.9113), 3), "2.911");
    }

    #[test]
    fn list_format() {
        assert_eq!(fmt_list(&[2.0, 3.0, 10.5]), "[2, 3, 10.5]");
        assert_eq!(fmt_list(&[]), "[]");
    }
}
