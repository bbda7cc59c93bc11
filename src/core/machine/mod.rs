//! Machine config consumed by the provisioning engine.
//!
//! Only the parts this crate produces are modeled. Unset optionals and empty collections are
//! left out of the JSON so the output stays minimal.

use crate::core::types::Toggle;
use serde::{Deserialize, Serialize};

/// Schema version stamped on every emitted config.
pub const MACHINE_CONFIG_VERSION: &str = "2.1.0";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub ignition: Ignition,

    #[serde(default, skip_serializing_if = "SystemdOutput::is_empty")]
    pub systemd: SystemdOutput,

    #[serde(default, skip_serializing_if = "NetworkdOutput::is_empty")]
    pub networkd: NetworkdOutput,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ignition {
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemdOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<Unit>,
}

impl SystemdOutput {
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub enable: bool,

    #[serde(default, skip_serializing_if = "Toggle::is_unset")]
    pub enabled: Toggle,

    #[serde(default, skip_serializing_if = "is_false")]
    pub mask: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contents: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropins: Vec<Dropin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dropin {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkdOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<NetworkdUnit>,
}

impl NetworkdOutput {
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkdUnit {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contents: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}
