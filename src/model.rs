//! Entity Model
//!
//! Read-only view over the monitored hosts and the services they own. The shell
//! never mutates entities; an external refresher may swap the whole model between
//! commands through [`SharedModel::replace`].

use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

mod entity;
pub mod snapshot;

pub use entity::{Entity, EntityKind, Host, Service};

/// All known hosts, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityModel {
    hosts: BTreeMap<String, Host>,
}

impl EntityModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_hosts(hosts: impl IntoIterator<Item = Host>) -> Self {
        Self {
            hosts: hosts
                .into_iter()
                .map(|host| (host.name.clone(), host))
                .collect(),
        }
    }

    pub fn insert(&mut self, host: Host) {
        self.hosts.insert(host.name.clone(), host);
    }

    pub fn hosts(&self) -> &BTreeMap<String, Host> {
        &self.hosts
    }

    pub fn host(&self, name: &str) -> Option<&Host> {
        self.hosts.get(name)
    }

    pub fn service(&self, host: &str, description: &str) -> Option<&Service> {
        self.host(host).and_then(|h| h.service(description))
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Shared handle to the current model.
///
/// Reads happen once per command; the refresher replaces the model wholesale so a
/// command never observes a half-updated host.
#[derive(Debug, Clone, Default)]
pub struct SharedModel {
    inner: Arc<RwLock<EntityModel>>,
}

impl SharedModel {
    pub fn new(model: EntityModel) -> Self {
        Self {
            inner: Arc::new(RwLock::new(model)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, EntityModel> {
        self.inner.read()
    }

    pub fn replace(&self, model: EntityModel) {
        info!(hosts = model.len(), "Entity model refreshed");
        *self.inner.write() = model;
    }
}
