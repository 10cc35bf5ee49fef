//! Mod loader selector.

use crate::error::Error;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mod loader a file is built for, using the catalog's numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ModLoader {
    Any,
    Forge,
    Cauldron,
    LiteLoader,
    Fabric,
    Quilt,
    NeoForge,
}

impl ModLoader {
    /// All loaders, in catalog code order.
    pub const ALL: [ModLoader; 7] = [
        ModLoader::Any,
        ModLoader::Forge,
        ModLoader::Cauldron,
        ModLoader::LiteLoader,
        ModLoader::Fabric,
        ModLoader::Quilt,
        ModLoader::NeoForge,
    ];

    /// Numeric code used by the catalog API.
    pub fn code(self) -> u8 {
        match self {
            ModLoader::Any => 0,
            ModLoader::Forge => 1,
            ModLoader::Cauldron => 2,
            ModLoader::LiteLoader => 3,
            ModLoader::Fabric => 4,
            ModLoader::Quilt => 5,
            ModLoader::NeoForge => 6,
        }
    }

    /// Display name of the loader.
    pub fn name(self) -> &'static str {
        match self {
            ModLoader::Any => "Any",
            ModLoader::Forge => "Forge",
            ModLoader::Cauldron => "Cauldron",
            ModLoader::LiteLoader => "LiteLoader",
            ModLoader::Fabric => "Fabric",
            ModLoader::Quilt => "Quilt",
            ModLoader::NeoForge => "NeoForge",
        }
    }
}

impl fmt::Display for ModLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ModLoader> for u8 {
    fn from(loader: ModLoader) -> Self {
        loader.code()
    }
}

impl TryFrom<u8> for ModLoader {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ModLoader::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| Error::InvalidModLoader(code.to_string()))
    }
}

/// Parses a loader by name (case-insensitive) or by numeric code.
impl FromStr for ModLoader {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return ModLoader::try_from(code).map_err(|_| Error::InvalidModLoader(s.to_string()));
        }
        ModLoader::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidModLoader(s.to_string()))
    }
}
