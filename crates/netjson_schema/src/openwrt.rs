//! NetJSON `DeviceConfiguration` as rendered for OpenWrt.

use netjson_contract::{Validate, ValidationError, Violation};
use serde::{Deserialize, Serialize};

use crate::common::{check_unique, ConfigFile, EmbeddedSchema};

pub(crate) static SCHEMA: EmbeddedSchema =
    EmbeddedSchema::new("openwrt", include_str!("../schemas/openwrt.schema.json"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenWrtConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<General>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<Interface>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_rules: Vec<IpRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_servers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_search: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp: Option<Ntp>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub radios: Vec<Radio>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<ConfigFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct General {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ula_prefix: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    Ethernet,
    Wireless,
    Bridge,
    Virtual,
    Loopback,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<InterfaceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autostart: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bridge_members: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireless: Option<Wireless>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressProto {
    Static,
    Dhcp,
    Dhcpv6,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto: Option<AddressProto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<AddressFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WirelessMode {
    AccessPoint,
    Station,
    Adhoc,
    Wds,
    Monitor,
    #[serde(rename = "802.11s")]
    Mesh,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wireless {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WirelessMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptionProtocol {
    None,
    Wpa2Personal,
    Wpa3Personal,
    Wpa2Enterprise,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Encryption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<EncryptionProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ntp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_server: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub server: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadioProtocol {
    #[serde(rename = "802.11g")]
    Ieee80211g,
    #[serde(rename = "802.11n")]
    Ieee80211n,
    #[serde(rename = "802.11ac")]
    Ieee80211ac,
    #[serde(rename = "802.11ax")]
    Ieee80211ax,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Radio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<RadioProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl Validate for OpenWrtConfig {
    fn validate_all(&self) -> Result<(), ValidationError> {
        let mut violations = SCHEMA.check(self);

        check_unique(
            self.interfaces.iter().map(|i| i.name.as_deref()),
            |i| format!("/interfaces/{}/name", i),
            "interface name",
            &mut violations,
        );
        check_unique(
            self.radios.iter().map(|r| r.name.as_deref()),
            |i| format!("/radios/{}/name", i),
            "radio name",
            &mut violations,
        );

        let declared = |name: &str| self.interfaces.iter().any(|i| i.name.as_deref() == Some(name));

        for (i, iface) in self.interfaces.iter().enumerate() {
            for (j, addr) in iface.addresses.iter().enumerate() {
                if addr.proto == Some(AddressProto::Static) && (addr.address.is_none() || addr.mask.is_none()) {
                    violations.push(Violation::new(
                        format!("/interfaces/{}/addresses/{}", i, j),
                        "static address requires address and mask",
                    ));
                }
            }
            for (j, member) in iface.bridge_members.iter().enumerate() {
                if !declared(member) {
                    violations.push(Violation::new(
                        format!("/interfaces/{}/bridge_members/{}", i, j),
                        format!("bridge member {:?} is not a declared interface", member),
                    ));
                }
            }
            if let Some(radio) = iface.wireless.as_ref().and_then(|w| w.radio.as_deref()) {
                if !self.radios.iter().any(|r| r.name.as_deref() == Some(radio)) {
                    violations.push(Violation::new(
                        format!("/interfaces/{}/wireless/radio", i),
                        format!("radio {:?} is not declared", radio),
                    ));
                }
            }
        }

        for (i, route) in self.routes.iter().enumerate() {
            if let Some(device) = route.device.as_deref() {
                if !declared(device) {
                    violations.push(Violation::new(
                        format!("/routes/{}/device", i),
                        format!("route device {:?} is not a declared interface", device),
                    ));
                }
            }
        }

        ValidationError::check(violations)
    }
}
