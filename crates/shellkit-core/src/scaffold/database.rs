//! Database driver selection for generated projects

use crate::error::ScaffoldError;
use std::fmt;
use std::str::FromStr;

/// Database driver added to a new project's dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    Sqlite,
    Mysql,
    Mssql,
    None,
}

impl Database {
    /// Menu order used by the interactive prompt
    pub const ALL: [Database; 4] = [
        Database::Sqlite,
        Database::Mysql,
        Database::Mssql,
        Database::None,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Database::Sqlite => "SQLite",
            Database::Mysql => "MySQL",
            Database::Mssql => "SQL Server",
            Database::None => "No database (simple project)",
        }
    }

    /// npm package providing the driver, if any
    pub fn dependency(&self) -> Option<&'static str> {
        match self {
            Database::Sqlite => Some("sqlite3"),
            Database::Mysql => Some("mysql"),
            Database::Mssql => Some("mssql"),
            Database::None => None,
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Database {
    type Err = ScaffoldError;

    /// Accepts names (`sqlite`, `mysql`, `mssql`, `none`) or menu numbers `1`-`4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "sqlite" | "sqlite3" => Ok(Database::Sqlite),
            "2" | "mysql" => Ok(Database::Mysql),
            "3" | "mssql" | "sqlserver" | "sql-server" => Ok(Database::Mssql),
            "4" | "none" => Ok(Database::None),
            _ => Err(ScaffoldError::UnknownDatabase(s.to_string())),
        }
    }
}
