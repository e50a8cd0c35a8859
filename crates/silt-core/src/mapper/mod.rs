
use crate::model::EntityModel;
use derive_more::Display;
use log::debug;
use serde::Serialize;
use std::{
    collections::HashSet,
    error::Error as StdError,
    sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error as ThisError;

///
/// DdlEvent
/// Lifecycle phase a deferred DDL statement is bound to.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DdlEvent {
    #[display("after_create")]
    AfterCreate,
}

///
/// DdlHook
/// One deferred DDL statement attached to a table's lifecycle.
///
/// Hooks are created once and never mutated or removed; the host's
/// executor drains them after the table is physically created.
///

#[derive(Clone, Debug, Serialize)]
pub struct DdlHook {
    pub table: &'static str,
    pub event: DdlEvent,
    pub statement: String,
}

///
/// MapperError
///

#[derive(Debug, ThisError)]
pub enum MapperError {
    #[error("listener '{listener}' failed for entity {entity}: {source}")]
    Listener {
        listener: &'static str,
        entity: &'static str,
        source: ListenerError,
    },
}

/// Failure raised by a registration listener; wrapped into
/// [`MapperError::Listener`] with the listener and entity identity.
pub type ListenerError = Box<dyn StdError + Send + Sync>;

/// Callback fired exactly once per registered entity.
pub type RegistrationListener = fn(&'static EntityModel) -> Result<(), ListenerError>;

///
/// MapperRegistry
///
/// The process-wide registry of mapped entities, their registration
/// listeners, and their attached DDL hooks. This is the only shared
/// mutable state in the crate; it is initialized empty and has no
/// teardown, so entries live for the process lifetime.
///

#[derive(Debug, Default, Serialize)]
pub struct MapperRegistry {
    entities: Vec<&'static EntityModel>,
    hooks: Vec<DdlHook>,

    #[serde(skip)]
    seen: HashSet<&'static str>,

    #[serde(skip)]
    listeners: Vec<(&'static str, RegistrationListener)>,

    // Guards (listener, entity) delivery so replay-on-subscribe and
    // concurrent registration cannot double-fire or drop an event.
    #[serde(skip)]
    delivered: HashSet<(&'static str, &'static str)>,
}

static MAPPER: LazyLock<RwLock<MapperRegistry>> =
    LazyLock::new(|| RwLock::new(MapperRegistry::default()));

fn mapper_read() -> RwLockReadGuard<'static, MapperRegistry> {
    MAPPER
        .read()
        .expect("mapper registry poisoned while acquiring read lock")
}

fn mapper_write() -> RwLockWriteGuard<'static, MapperRegistry> {
    MAPPER
        .write()
        .expect("mapper registry poisoned while acquiring write lock")
}

fn claim_delivery(listener: &'static str, entity: &'static str) -> bool {
    mapper_write().delivered.insert((listener, entity))
}

fn fire(
    listener_name: &'static str,
    listener: RegistrationListener,
    model: &'static EntityModel,
) -> Result<(), MapperError> {
    if !claim_delivery(listener_name, model.path) {
        return Ok(());
    }

    listener(model).map_err(|source| MapperError::Listener {
        listener: listener_name,
        entity: model.path,
        source,
    })
}

/// Register a mapped entity, firing every subscribed listener once.
///
/// Registration is idempotent per type identity: repeated calls for the
/// same model path are no-ops. A listener failure is fatal for the
/// registration and propagates to the caller.
pub fn register_entity(model: &'static EntityModel) -> Result<(), MapperError> {
    let listeners = {
        let mut registry = mapper_write();
        if !registry.seen.insert(model.path) {
            return Ok(());
        }
        registry.entities.push(model);
        registry.listeners.clone()
    };

    debug!(
        "mapper: registered entity {} (table {})",
        model.path, model.table.name
    );

    for (name, listener) in listeners {
        fire(name, listener, model)?;
    }

    Ok(())
}

/// Subscribe a listener to the registration event.
///
/// Entities registered before the subscription are replayed to the new
/// listener, so constructor ordering between crates cannot drop events.
/// Subscribing the same name twice is a no-op.
pub fn on_entity_registered(
    name: &'static str,
    listener: RegistrationListener,
) -> Result<(), MapperError> {
    let entities = {
        let mut registry = mapper_write();
        if registry.listeners.iter().any(|(n, _)| *n == name) {
            return Ok(());
        }
        registry.listeners.push((name, listener));
        registry.entities.clone()
    };

    for model in entities {
        fire(name, listener, model)?;
    }

    Ok(())
}

/// Attach a deferred DDL statement to a table lifecycle phase.
pub fn attach_ddl(table: &'static str, event: DdlEvent, statement: String) {
    debug!("mapper: attaching {event} DDL for table {table}: {statement}");

    mapper_write().hooks.push(DdlHook {
        table,
        event,
        statement,
    });
}

/// Statements attached to `table` for `event`, in attachment order.
#[must_use]
pub fn ddl_hooks(table: &str, event: DdlEvent) -> Vec<String> {
    mapper_read()
        .hooks
        .iter()
        .filter(|hook| hook.table == table && hook.event == event)
        .map(|hook| hook.statement.clone())
        .collect()
}

#[must_use]
pub fn is_registered(path: &str) -> bool {
    mapper_read().seen.contains(path)
}

#[must_use]
pub fn registered_entities() -> Vec<&'static EntityModel> {
    mapper_read().entities.clone()
}

/// Diagnostic JSON export of the registered entities and their hooks.
pub fn registry_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&*mapper_read())
}
