use std::fmt;

use netjson_contract::SchemaMessage;
use netjson_schema::{OpenVpnConfig, OpenWrtConfig, WireguardConfig};

/// Produces a fresh, empty message for one fixture.
pub type Factory = Box<dyn Fn() -> Box<dyn SchemaMessage> + Send + Sync>;

/// A configuration dialect: where its fixtures live and which message decodes them.
pub struct Family {
    pub name: String,
    /// Glob, relative to the fixture root unless absolute.
    pub pattern: String,
    factory: Factory,
}

impl Family {
    pub fn new<F>(name: impl Into<String>, pattern: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Box<dyn SchemaMessage> + Send + Sync + 'static,
    {
        Self { name: name.into(), pattern: pattern.into(), factory: Box::new(factory) }
    }

    /// Family whose messages start from `M::default()`.
    pub fn of<M>(name: impl Into<String>, pattern: impl Into<String>) -> Self
    where
        M: SchemaMessage + Default + 'static,
    {
        Self::new(name, pattern, || Box::new(M::default()) as Box<dyn SchemaMessage>)
    }

    pub fn instantiate(&self) -> Box<dyn SchemaMessage> {
        (self.factory)()
    }
}

impl fmt::Debug for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Family").field("name", &self.name).field("pattern", &self.pattern).finish_non_exhaustive()
    }
}

pub fn netjson_families() -> Vec<Family> {
    vec![
        Family::of::<OpenWrtConfig>("openwrt", "openwrt/*.json"),
        Family::of::<OpenVpnConfig>("openvpn", "openvpn/*.json"),
        Family::of::<WireguardConfig>("wireguard", "wireguard/*.json"),
    ]
}
