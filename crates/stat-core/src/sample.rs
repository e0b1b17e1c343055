//! 样本（Sample）与输入解析
//!
//! 输入是一段以单个分隔符分隔的数字文本，例如 `"3, 5, 2, 5, 8, 10, 3"`。
//! 解析规则：
//! - 按分隔符切分，每个片段去掉首尾空白；
//! - 空片段（连续分隔符、末尾分隔符）直接跳过；
//! - 任一非空片段无法解析为有限实数，整体失败；
//! - 结果为空时失败。

use std::str::FromStr;

use serde_derive::Serialize;

use crate::error::{InputFault, StatError, StatResult};

pub const DEFAULT_DELIMITER: char = ',';

/// 用户提供的有序数值序列，构造成功即保证非空且全部为有限值。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// 按 `delimiter` 解析输入文本
    pub fn parse(text: &str, delimiter: char) -> StatResult<Self> {
        let mut values = Vec::new();
        for token in text.split(delimiter).map(str::trim).filter(|t| !t.is_empty()) {
            match parse_token(token) {
                Some(v) => values.push(v),
                None => {
                    log::debug!("rejecting input at token '{}'", token);
                    return Err(StatError::InvalidInput(InputFault::BadToken {
                        position: values.len() + 1,
                        token: token.to_string(),
                    }));
                }
            }
        }
        Self::from_values(values)
    }

    pub fn from_values(values: Vec<f64>) -> StatResult<Self> {
        if values.is_empty() {
            return Err(StatError::InvalidInput(InputFault::Empty));
        }
        if let Some((idx, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatError::InvalidInput(InputFault::BadToken {
                position: idx + 1,
                token: v.to_string(),
            }));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 与 `len` 配套；构造成功的样本不会为空
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 升序排列后的副本，原样本顺序不变
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

impl FromStr for Sample {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::parse(s, DEFAULT_DELIMITER)
    }
}

fn parse_token(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_example() {
        let s: Sample = "3, 5, 2, 5, 8, 10, 3".parse().unwrap();
        assert_eq!(s.values(), &[3.0, 5.0, 2.0, 5.0, 8.0, 10.0, 3.0]);
        assert_eq!(s.len(), 7);
    }

    #[test]
    fn parse_skips_empty_tokens() {
        let s: Sample = "1, , 2,3".parse().unwrap();
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);

        let s: Sample = ",,4,5,".parse().unwrap();
        assert_eq!(s.values(), &[4.0, 5.0]);
    }

    #[test]
    fn parse_rejects_letters() {
        let err = "a,b,c".parse::<Sample>().unwrap_err();
        assert_eq!(
            err,
            StatError::InvalidInput(InputFault::BadToken {
                position: 1,
                token: "a".into()
            })
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(
            "".parse::<Sample>().unwrap_err(),
            StatError::InvalidInput(InputFault::Empty)
        );
        assert_eq!(
            " ,  , ".parse::<Sample>().unwrap_err(),
            StatError::InvalidInput(InputFault::Empty)
        );
    }

    #[test]
    fn one_bad_token_invalidates_everything() {
        let err = "1, 2, x3, 4".parse::<Sample>().unwrap_err();
        match err {
            StatError::InvalidInput(InputFault::BadToken { position, token }) => {
                assert_eq!(position, 3);
                assert_eq!(token, "x3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!("1, nan".parse::<Sample>().is_err());
        assert!("inf, 2".parse::<Sample>().is_err());
        assert!(Sample::from_values(vec![1.0, f64::NAN]).is_err());
    }

    #[test]
    fn parse_with_custom_delimiter() {
        let s = Sample::parse("1.5; -2 ;3e1;", ';').unwrap();
        assert_eq!(s.values(), &[1.5, -2.0, 30.0]);

        // 分隔符不匹配时整段视为一个片段
        assert!(Sample::parse("1;2", ',').is_err());
    }

    #[test]
    fn sorted_leaves_input_order() {
        let s: Sample = "3,1,2".parse().unwrap();
        assert_eq!(s.sorted(), vec![1.0, 2.0, 3.0]);
        assert_eq!(s.values(), &[3.0, 1.0, 2.0]);
    }
}
