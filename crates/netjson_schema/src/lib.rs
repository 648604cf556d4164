//! Configuration families understood by the round-trip harness.
//!
//! Each family is a serde message whose field names match the NetJSON
//! documents verbatim, plus a [`Validate`](netjson_contract::Validate) impl
//! that runs an embedded JSON Schema and the semantic rules the schema
//! language cannot express.

mod common;
pub mod openvpn;
pub mod openwrt;
pub mod wireguard;

pub use common::ConfigFile;
pub use openvpn::OpenVpnConfig;
pub use openwrt::OpenWrtConfig;
pub use wireguard::WireguardConfig;

/// Raw text of the JSON Schema embedded for `family`, if known.
pub fn schema_text(family: &str) -> Option<&'static str> {
    match family {
        "openwrt" => Some(openwrt::SCHEMA.text()),
        "openvpn" => Some(openvpn::SCHEMA.text()),
        "wireguard" => Some(wireguard::SCHEMA.text()),
        _ => None,
    }
}
