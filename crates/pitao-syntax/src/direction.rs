//! Translation direction.

use std::fmt;
use std::str::FromStr;

/// Which way keywords are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Pitão -> Python.
    DialectToStandard,
    /// Python -> Pitão.
    StandardToDialect,
}

impl Direction {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::DialectToStandard => Direction::StandardToDialect,
            Direction::StandardToDialect => Direction::DialectToStandard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::DialectToStandard => "dialect-to-standard",
            Direction::StandardToDialect => "standard-to-dialect",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direction name that is neither spelling of either variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction '{0}' (expected pt2py, py2pt, dialect-to-standard or standard-to-dialect)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt2py" | "dialect-to-standard" => Ok(Direction::DialectToStandard),
            "py2pt" | "standard-to-dialect" => Ok(Direction::StandardToDialect),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("pt2py".parse(), Ok(Direction::DialectToStandard));
        assert_eq!("py2pt".parse(), Ok(Direction::StandardToDialect));
        assert_eq!(
            "standard-to-dialect".parse(),
            Ok(Direction::StandardToDialect)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err, ParseDirectionError("sideways".into()));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_display_parses_back() {
        for direction in [Direction::DialectToStandard, Direction::StandardToDialect] {
            assert_eq!(direction.to_string().parse(), Ok(direction));
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }
}
