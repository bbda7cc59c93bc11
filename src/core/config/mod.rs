//! Human-authored config document, as decoded from YAML.
//!
//! Every field the author may leave out carries a default so that a minimal document such as
//! `systemd: {units: [{name: foo.service}]}` decodes.

use crate::core::types::Toggle;
use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::ConfigLoader;

/// Root of the input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub systemd: Systemd,

    #[serde(default)]
    pub networkd: Networkd,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Systemd {
    #[serde(default)]
    pub units: Vec<SystemdUnit>,
}

/// A systemd unit as the author wrote it.
///
/// A missing `name` decodes as empty; judging names is left to the target schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemdUnit {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub enable: bool,

    /// Newer spelling of `enable`; unset is not the same as `false`.
    #[serde(default)]
    pub enabled: Toggle,

    #[serde(default)]
    pub mask: bool,

    /// Raw unit-file text, empty when the unit is defined only by name and drop-ins.
    #[serde(default)]
    pub contents: String,

    #[serde(default)]
    pub dropins: Vec<SystemdDropin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemdDropin {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Networkd {
    #[serde(default)]
    pub units: Vec<NetworkdUnit>,
}

/// A systemd-networkd unit (`.network`, `.netdev`, `.link`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkdUnit {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub contents: String,
}
