//! WireGuard tunnels in the NetJSON `wireguard` dialect.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use netjson_contract::{Validate, ValidationError, Violation};
use serde::{Deserialize, Serialize};

use crate::common::{check_unique, ConfigFile, EmbeddedSchema};

pub(crate) static SCHEMA: EmbeddedSchema =
    EmbeddedSchema::new("wireguard", include_str!("../schemas/wireguard.schema.json"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireguardConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wireguard: Vec<Tunnel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<ConfigFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunnel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub peers: Vec<Peer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preshared_key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_ips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_keepalive: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_allowed_ips: Option<bool>,
}

impl Validate for WireguardConfig {
    fn validate_all(&self) -> Result<(), ValidationError> {
        let mut violations = SCHEMA.check(self);

        check_unique(
            self.wireguard.iter().map(|t| t.name.as_deref()),
            |i| format!("/wireguard/{}/name", i),
            "tunnel name",
            &mut violations,
        );

        let mut ports: BTreeMap<u16, usize> = BTreeMap::new();
        for (i, tunnel) in self.wireguard.iter().enumerate() {
            if let Some(port) = tunnel.port {
                match ports.entry(port) {
                    Entry::Occupied(first) => violations.push(Violation::new(
                        format!("/wireguard/{}/port", i),
                        format!("listen port {} already used by tunnel at index {}", port, first.get()),
                    )),
                    Entry::Vacant(slot) => {
                        slot.insert(i);
                    }
                }
            }

            check_unique(
                tunnel.peers.iter().map(|p| p.public_key.as_deref()),
                |j| format!("/wireguard/{}/peers/{}/public_key", i, j),
                "peer public key",
                &mut violations,
            );

            for (j, peer) in tunnel.peers.iter().enumerate() {
                if peer.endpoint_port.is_some() && peer.endpoint_host.is_none() {
                    violations.push(Violation::new(
                        format!("/wireguard/{}/peers/{}/endpoint_port", i, j),
                        "endpoint_port requires endpoint_host",
                    ));
                }
            }
        }

        ValidationError::check(violations)
    }
}
