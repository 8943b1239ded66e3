use crate::model::Operator;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an operator export given on the command line as `OPERATOR=PATH`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorInput {
    pub operator: Operator,
    pub path: String,
}

pub fn parse_operator_input(s: &str) -> Result<OperatorInput, String> {
    let Some((operator, path)) = s.split_once('=') else {
        return Err(format!("expected format: OPERATOR=PATH, got: {s}"));
    };
    let operator = operator.parse::<Operator>()?;
    let path = path.trim();
    if path.is_empty() {
        return Err(format!("missing export path for operator {operator}"));
    }
    Ok(OperatorInput {
        operator,
        path: path.to_string(),
    })
}

impl Display for OperatorInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.operator, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operator_input() {
        let input = parse_operator_input("void=data/void.csv").expect("valid input");
        assert_eq!(input.operator, Operator::Void);
        assert_eq!(input.path, "data/void.csv");
        assert_eq!(input.to_string(), "VOID=data/void.csv");
    }

    #[test]
    fn test_parse_operator_input_errors() {
        assert!(parse_operator_input("data/void.csv").is_err());
        assert!(parse_operator_input("HELBIZ=data/h.csv").is_err());
        assert!(parse_operator_input("LIME= ").is_err());
    }
}
