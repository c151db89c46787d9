//! Account-history parameter vocabularies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

/// Date range selector for `accounts/{id}/history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryRange {
    /// Entire available history
    All,
    /// Today only
    Today,
    /// Current week
    CurrentWeek,
    /// Current month
    CurrentMonth,
    /// Previous month
    LastMonth,
}

impl HistoryRange {
    /// Wire form of the range selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::CurrentWeek => "current_week",
            Self::CurrentMonth => "current_month",
            Self::LastMonth => "last_month",
        }
    }
}

impl std::fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HistoryRange {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "current_week" => Ok(Self::CurrentWeek),
            "current_month" => Ok(Self::CurrentMonth),
            "last_month" => Ok(Self::LastMonth),
            _ => Err(ApiError::InvalidEnumValue {
                field: "range",
                value: s.to_string(),
            }),
        }
    }
}

/// Transaction filter for `accounts/{id}/history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// All transactions
    All,
    /// Bookkeeping entries only
    Bookkeeping,
    /// Trades only
    Trade,
}

impl TransactionType {
    /// Wire form of the transaction filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Bookkeeping => "bookkeeping",
            Self::Trade => "trade",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "bookkeeping" => Ok(Self::Bookkeeping),
            "trade" => Ok(Self::Trade),
            _ => Err(ApiError::InvalidEnumValue {
                field: "transactions",
                value: s.to_string(),
            }),
        }
    }
}
