//! Navigation Context
//!
//! Cursor over the entity model: root, a host, or a service owned by that host.
//! The context holds names, not entity references, and resolves them against the
//! model on every access, so a refresh between commands can never leave it
//! pointing at a stale entity.

use crate::error::ShellError;
use crate::model::{Entity, EntityKind, EntityModel};
use tracing::debug;

/// The three possible navigation states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContextState {
    #[default]
    Root,
    AtHost {
        host: String,
    },
    AtService {
        host: String,
        service: String,
    },
}

impl ContextState {
    pub fn is_root(&self) -> bool {
        matches!(self, ContextState::Root)
    }

    pub fn is_host(&self) -> bool {
        matches!(self, ContextState::AtHost { .. })
    }

    pub fn is_service(&self) -> bool {
        matches!(self, ContextState::AtService { .. })
    }

    /// Kind of the selected entity, `None` at root.
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            ContextState::Root => None,
            ContextState::AtHost { .. } => Some(EntityKind::Host),
            ContextState::AtService { .. } => Some(EntityKind::Service),
        }
    }

    /// Slash-separated path, empty at root.
    pub fn path(&self) -> String {
        match self {
            ContextState::Root => String::new(),
            ContextState::AtHost { host } => host.clone(),
            ContextState::AtService { host, service } => format!("{}/{}", host, service),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationContext {
    state: ContextState,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &ContextState {
        &self.state
    }

    /// Resolve the selection against the current model.
    ///
    /// Returns `None` at root, and also when the selected entity no longer exists.
    pub fn resolve<'m>(&self, model: &'m EntityModel) -> Option<Entity<'m>> {
        match &self.state {
            ContextState::Root => None,
            ContextState::AtHost { host } => model.host(host).map(Entity::Host),
            ContextState::AtService { host, service } => {
                model.service(host, service).map(Entity::Service)
            }
        }
    }

    /// Jump to a host, replacing the whole path.
    pub fn set(&mut self, model: &EntityModel, host: &str) -> Result<(), ShellError> {
        if model.host(host).is_none() {
            return Err(ShellError::InvalidTransition(format!(
                "Host \"{}\" not found",
                host
            )));
        }
        debug!(from = %self.state.path(), to = host, "Context set");
        self.state = ContextState::AtHost {
            host: host.to_string(),
        };
        Ok(())
    }

    /// Descend from the selected host into one of its services.
    ///
    /// Fails without changing the context unless the current state is a host that
    /// owns `service`.
    pub fn add(&mut self, model: &EntityModel, service: &str) -> Result<(), ShellError> {
        let host = match &self.state {
            ContextState::AtHost { host } => host.clone(),
            _ => {
                return Err(ShellError::InvalidTransition(
                    "A service can only be selected from a host".to_string(),
                ))
            }
        };
        let owned = model
            .host(&host)
            .map(|h| h.services.contains_key(service))
            .unwrap_or(false);
        if !owned {
            return Err(ShellError::InvalidTransition(format!(
                "Service \"{}\" not found",
                service
            )));
        }
        debug!(host = %host, service, "Context descended");
        self.state = ContextState::AtService {
            host,
            service: service.to_string(),
        };
        Ok(())
    }

    /// Go up one level. Returns false when already at root.
    pub fn pop(&mut self) -> bool {
        let next = match &self.state {
            ContextState::Root => return false,
            ContextState::AtHost { .. } => ContextState::Root,
            ContextState::AtService { host, .. } => ContextState::AtHost { host: host.clone() },
        };
        debug!(from = %self.state.path(), to = %next.path(), "Context popped");
        self.state = next;
        true
    }

    pub fn reset(&mut self) {
        self.state = ContextState::Root;
    }

    /// Drop levels whose entity disappeared from the model.
    ///
    /// Returns the path that was lost, if any.
    pub fn reconcile(&mut self, model: &EntityModel) -> Option<String> {
        let lost = match &self.state {
            ContextState::Root => return None,
            ContextState::AtHost { host } if model.host(host).is_none() => {
                ContextState::Root
            }
            ContextState::AtService { host, .. } if model.host(host).is_none() => {
                ContextState::Root
            }
            ContextState::AtService { host, service } if model.service(host, service).is_none() => {
                ContextState::AtHost { host: host.clone() }
            }
            _ => return None,
        };
        let path = self.state.path();
        self.state = lost;
        Some(path)
    }
}
