use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects how the argument bytes of an install call are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgumentMode {
    /// Empty argument list.
    #[default]
    None,
    /// Raw bytes given as hex.
    Hex,
    /// A single `principal` argument.
    Principal,
    /// A single `opt principal` argument; blank or `null` means absent.
    OptionalPrincipal,
    /// A textual DIDL blob as printed by command-line tooling.
    DidlBlob,
}

impl ArgumentMode {
    pub const ALL: [ArgumentMode; 5] = [
        ArgumentMode::None,
        ArgumentMode::Hex,
        ArgumentMode::Principal,
        ArgumentMode::OptionalPrincipal,
        ArgumentMode::DidlBlob,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArgumentMode::None => "none",
            ArgumentMode::Hex => "hex",
            ArgumentMode::Principal => "principal",
            ArgumentMode::OptionalPrincipal => "optional-principal",
            ArgumentMode::DidlBlob => "didl-blob",
        }
    }
}

/// Mode of the install call that consumes the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallMode {
    Install,
    Reinstall,
    Upgrade,
}

impl InstallMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InstallMode::Install => "install",
            InstallMode::Reinstall => "reinstall",
            InstallMode::Upgrade => "upgrade",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} {value:?}")]
pub struct ParseModeError {
    kind: &'static str,
    value: String,
}

impl FromStr for ArgumentMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ArgumentMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| ParseModeError {
                kind: "argument mode",
                value: s.to_owned(),
            })
    }
}

impl FromStr for InstallMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "install" => Ok(InstallMode::Install),
            "reinstall" => Ok(InstallMode::Reinstall),
            "upgrade" => Ok(InstallMode::Upgrade),
            _ => Err(ParseModeError {
                kind: "install mode",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ArgumentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
