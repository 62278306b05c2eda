//! Snapshot loading: builds an [`EntityModel`] from a JSON or TOML document.
//!
//! Layout (JSON shown, TOML uses the same tables):
//!
//! ```json
//! { "hosts": { "web1": { "fields": { "current_state": "0" },
//!                        "services": { "http": { "fields": { "current_state": "2" } } } } } }
//! ```

use crate::error::ShellError;
use crate::model::{EntityModel, Host, Service};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct SnapshotDoc {
    #[serde(default)]
    hosts: BTreeMap<String, HostDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct HostDoc {
    #[serde(default)]
    fields: BTreeMap<String, String>,
    #[serde(default)]
    services: BTreeMap<String, ServiceDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceDoc {
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

impl SnapshotDoc {
    fn into_model(self) -> EntityModel {
        let hosts = self.hosts.into_iter().map(|(name, doc)| {
            let mut host = Host::new(name.clone());
            host.fields = doc.fields;
            for (description, svc) in doc.services {
                let mut service = Service::new(name.clone(), description);
                service.fields = svc.fields;
                host = host.with_service(service);
            }
            host
        });
        EntityModel::from_hosts(hosts)
    }
}

/// Parse a JSON snapshot.
pub fn from_json_str(content: &str) -> Result<EntityModel, ShellError> {
    let doc: SnapshotDoc = serde_json::from_str(content)
        .map_err(|e| ShellError::Model(format!("Invalid JSON snapshot: {}", e)))?;
    Ok(doc.into_model())
}

/// Parse a TOML snapshot.
pub fn from_toml_str(content: &str) -> Result<EntityModel, ShellError> {
    let doc: SnapshotDoc = toml::from_str(content)
        .map_err(|e| ShellError::Model(format!("Invalid TOML snapshot: {}", e)))?;
    Ok(doc.into_model())
}

/// Load a snapshot file; `.toml` files are read as TOML, everything else as JSON.
pub fn load(path: &Path) -> Result<EntityModel, ShellError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ShellError::Model(format!("Failed to read snapshot {}: {}", path.display(), e))
    })?;
    let model = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => from_toml_str(&content)?,
        _ => from_json_str(&content)?,
    };
    debug!(path = %path.display(), hosts = model.len(), "Loaded entity snapshot");
    Ok(model)
}
