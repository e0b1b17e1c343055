use std::fmt;

use thiserror::Error;

pub type StatResult<T> = Result<T, StatError>;

/// 输入解析失败的具体原因
#[derive(Debug, Clone, PartialEq)]
pub enum InputFault {
    /// 去掉空白与空片段后没有任何数字
    Empty,
    /// 第 `position` 个非空片段无法解析为有限实数（从 1 开始计数）
    BadToken { position: usize, token: String },
}

impl fmt::Display for InputFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFault::Empty => write!(f, "no numbers found"),
            InputFault::BadToken { position, token } => {
                write!(f, "token #{} '{}' is not a number", position, token)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    #[error("invalid input: {0}")]
    InvalidInput(InputFault),
    #[error("insufficient data: need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    #[error("percentile must be within [0, 100], got {0}")]
    InvalidPercentile(f64),
}

impl StatError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StatError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_token_message_names_position_and_token() {
        let err = StatError::InvalidInput(InputFault::BadToken {
            position: 2,
            token: "abc".into(),
        });
        assert_eq!(
            err.to_string(),
            "invalid input: token #2 'abc' is not a number"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn insufficient_data_message() {
        let err = StatError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("need at least 2"));
    }
}
