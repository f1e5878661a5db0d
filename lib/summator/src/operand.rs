use std::num::ParseFloatError;

#[derive(Debug, thiserror::Error)]
pub enum SumError {
    #[error("invalid operand `{operand}`: {source}")]
    InvalidArgument {
        operand: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("operand `{operand}` is not a finite number")]
    NonFinite { operand: String },
    #[error("sum is out of the finite f64 range")]
    Overflow,
}

/// Parses one textual operand as a finite `f64`.
///
/// Surrounding whitespace is ignored. `NaN` and infinity literals parse but are
/// rejected.
pub fn parse_operand(text: &str) -> Result<f64, SumError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|source| SumError::InvalidArgument {
        operand: trimmed.to_string(),
        source,
    })?;
    if !value.is_finite() {
        return Err(SumError::NonFinite {
            operand: trimmed.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("0").unwrap(), 0.0);
        assert_eq!(parse_operand("\t42\n").unwrap(), 42.0);
        assert_eq!(parse_operand("-3.25").unwrap(), -3.25);
        assert_eq!(parse_operand("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_operand_invalid() {
        for text in ["", "   ", "abc", "1+1", "0x10"] {
            match parse_operand(text) {
                Err(SumError::InvalidArgument { operand, .. }) => {
                    assert_eq!(operand, text.trim())
                }
                other => panic!("{text:?} -> {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_operand_non_finite() {
        for text in ["NaN", "inf", "-infinity"] {
            assert!(matches!(
                parse_operand(text),
                Err(SumError::NonFinite { .. })
            ));
        }
    }

    #[test]
    fn test_error_message() {
        let err = parse_operand("abc").unwrap_err();
        assert!(err.to_string().starts_with("invalid operand `abc`"));
        assert_eq!(
            SumError::Overflow.to_string(),
            "sum is out of the finite f64 range"
        );
    }
}
