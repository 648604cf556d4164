#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tracing_subscriber::EnvFilter;

pub const WG_PRIVATE: &str = "yAnz5TF+lXXJte14tji3zlMNq+hd2rYUIgJBgB3fBmk=";
pub const WG_PEER: &str = "xTIBA5rboUvnH4htodjb6e697QjLERt1NAB4mZqp8Dg=";

/// Installs a test-writer subscriber once; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub fn write_fixture(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(&path, body).expect("write fixture");
}

pub fn valid_wireguard() -> String {
    serde_json::json!({
        "wireguard": [{
            "name": "wg0",
            "port": 51820,
            "private_key": WG_PRIVATE,
            "address": ["10.7.0.1/24"],
            "peers": [{ "public_key": WG_PEER, "allowed_ips": ["10.7.0.2/32"], "persistent_keepalive": 25 }]
        }],
        "files": []
    })
    .to_string()
}
