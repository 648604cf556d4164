//! OpenVPN instances in the NetJSON `openvpn` dialect.

use netjson_contract::{Validate, ValidationError, Violation};
use serde::{Deserialize, Serialize};

use crate::common::{check_unique, ConfigFile, EmbeddedSchema};

pub(crate) static SCHEMA: EmbeddedSchema =
    EmbeddedSchema::new("openvpn", include_str!("../schemas/openvpn.schema.json"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenVpnConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub openvpn: Vec<OpenVpnInstance>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<ConfigFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Server,
    P2p,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Proto {
    Udp,
    Udp6,
    Tcp,
    TcpServer,
    TcpClient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevType {
    Tun,
    Tap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenVpnInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto: Option<Proto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_type: Option<DevType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comp_lzo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_tun: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_client: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_cert_tls: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_to_client: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_cn: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub push: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nobind: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolv_retry: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remote: Vec<Remote>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl OpenVpnInstance {
    fn is_client(&self) -> bool {
        self.tls_client == Some(true) || self.pull == Some(true)
    }
}

impl Validate for OpenVpnConfig {
    fn validate_all(&self) -> Result<(), ValidationError> {
        let mut violations = SCHEMA.check(self);

        check_unique(
            self.openvpn.iter().map(|v| v.name.as_deref()),
            |i| format!("/openvpn/{}/name", i),
            "instance name",
            &mut violations,
        );
        check_unique(
            self.openvpn.iter().map(|v| v.dev.as_deref()),
            |i| format!("/openvpn/{}/dev", i),
            "device",
            &mut violations,
        );

        for (i, vpn) in self.openvpn.iter().enumerate() {
            if vpn.tls_server == Some(true) && vpn.tls_client == Some(true) {
                violations.push(Violation::new(
                    format!("/openvpn/{}", i),
                    "tls_server and tls_client are mutually exclusive",
                ));
            }
            if vpn.is_client() && vpn.remote.is_empty() {
                violations.push(Violation::new(format!("/openvpn/{}/remote", i), "client instance requires a remote"));
            }
            if vpn.mode == Some(Mode::Server) && vpn.is_client() {
                violations.push(Violation::new(format!("/openvpn/{}/mode", i), "server mode cannot act as a tls client"));
            }
        }

        ValidationError::check(violations)
    }
}
