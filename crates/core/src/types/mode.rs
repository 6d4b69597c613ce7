use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which decision-table branches a run considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    All,
    Unit,
    E2e,
}

impl Mode {
    pub fn includes_unit(self) -> bool {
        matches!(self, Mode::All | Mode::Unit)
    }

    pub fn includes_e2e(self) -> bool {
        matches!(self, Mode::All | Mode::E2e)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Unit => "unit",
            Mode::E2e => "e2e",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Mode::All),
            "unit" => Ok(Mode::Unit),
            "e2e" => Ok(Mode::E2e),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}
