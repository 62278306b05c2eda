//! Host and service entities as seen by the shell.

use std::collections::BTreeMap;

/// Discriminator for the two entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Host,
    Service,
}

/// A monitored host and the services it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    pub name: String,
    pub fields: BTreeMap<String, String>,
    pub services: BTreeMap<String, Service>,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
            services: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Attach a service. The service's owner is rewritten to this host.
    pub fn with_service(mut self, mut service: Service) -> Self {
        service.host_name = self.name.clone();
        self.services.insert(service.description.clone(), service);
        self
    }

    pub fn service(&self, description: &str) -> Option<&Service> {
        self.services.get(description)
    }

    /// Field lookup, answering `host_name` from identity.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "host_name" => Some(self.name.as_str()),
            _ => self.fields.get(field).map(String::as_str),
        }
    }
}

/// A service check. `host_name` refers back to the owning host by key only.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub host_name: String,
    pub description: String,
    pub fields: BTreeMap<String, String>,
}

impl Service {
    pub fn new(host_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            host_name: host_name.into(),
            description: description.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Field lookup, answering `host_name` and `service_description` from identity.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "host_name" => Some(self.host_name.as_str()),
            "service_description" => Some(self.description.as_str()),
            _ => self.fields.get(field).map(String::as_str),
        }
    }
}

/// Borrowed view over either entity variant.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Host(&'a Host),
    Service(&'a Service),
}

impl<'a> Entity<'a> {
    pub fn kind(&self) -> EntityKind {
        match *self {
            Entity::Host(_) => EntityKind::Host,
            Entity::Service(_) => EntityKind::Service,
        }
    }

    /// Display name: the host name, or the service description.
    pub fn name(&self) -> &'a str {
        match *self {
            Entity::Host(host) => &host.name,
            Entity::Service(service) => &service.description,
        }
    }

    pub fn get(&self, field: &str) -> Option<&'a str> {
        match *self {
            Entity::Host(host) => host.get(field),
            Entity::Service(service) => service.get(field),
        }
    }
}
