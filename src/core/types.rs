use serde::{Deserialize, Serialize};
use std::fmt;

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    SerializationError,
    ConfigError,
    IoError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Cloud or hypervisor platform the machine config is rendered for.
///
/// Transforms receive it through the transform context; it selects platform specific
/// behavior and never changes how units are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Azure,
    Digitalocean,
    Ec2,
    Gce,
    Packet,
    OpenstackMetadata,
    VagrantVirtualbox,
    Custom,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Azure => "azure",
            Platform::Digitalocean => "digitalocean",
            Platform::Ec2 => "ec2",
            Platform::Gce => "gce",
            Platform::Packet => "packet",
            Platform::OpenstackMetadata => "openstack-metadata",
            Platform::VagrantVirtualbox => "vagrant-virtualbox",
            Platform::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}

/// Three-state switch: unset, explicitly on, explicitly off.
///
/// Reads from and writes to an optional boolean so `null` and an absent key both stay
/// distinct from `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Toggle {
    #[default]
    Unset,
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        self == Toggle::On
    }

    pub fn is_unset(&self) -> bool {
        *self == Toggle::Unset
    }
}

impl From<Option<bool>> for Toggle {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Toggle::Unset,
            Some(true) => Toggle::On,
            Some(false) => Toggle::Off,
        }
    }
}

impl From<Toggle> for Option<bool> {
    fn from(value: Toggle) -> Self {
        match value {
            Toggle::Unset => None,
            Toggle::On => Some(true),
            Toggle::Off => Some(false),
        }
    }
}
