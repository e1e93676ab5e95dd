//! The closed set of board columns.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A stage in an order's life, rendered as one container on the board.
///
/// The wire names (`ordered`, `preparing`, `serving`) are what area markers, the edit
/// form's status select and the configuration file use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Ordered,
    Preparing,
    Serving,
}

impl Column {
    /// Every column, in board order.
    pub const ALL: [Column; 3] = [Column::Ordered, Column::Preparing, Column::Serving];

    pub fn as_str(self) -> &'static str {
        match self {
            Column::Ordered => "ordered",
            Column::Preparing => "preparing",
            Column::Serving => "serving",
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column name outside the known set.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown column: {0:?}")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_parse_back() {
        for column in Column::ALL {
            assert_eq!(column.as_str().parse::<Column>(), Ok(column));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(
            "Preparing".parse::<Column>(),
            Err(UnknownColumn("Preparing".to_string()))
        );
        assert!("".parse::<Column>().is_err());
    }
}
