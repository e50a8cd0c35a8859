use crate::index::fulltext_index;
use log::debug;
use silt_core::{
    mapper::{self, DdlEvent, ListenerError},
    model::EntityModel,
};
use thiserror::Error as ThisError;

/// Name the provisioning listener is subscribed under.
pub const LISTENER_NAME: &str = "fulltext_provisioner";

///
/// DeclarationError
///

#[derive(Debug, ThisError)]
pub enum DeclarationError {
    #[error("entity {entity} declares full-text search with no columns")]
    EmptyColumns { entity: &'static str },
}

/// Registration listener: provision the full-text index for an entity
/// that declares one.
///
/// Fires exactly once per concrete type (the mapper deduplicates
/// registration), so each searchable entity gets exactly one deferred
/// `ALTER TABLE … ADD FULLTEXT` statement. Entities without the
/// capability are left alone; a declared-but-empty column set is a fatal
/// declaration error rather than a silently missing index.
pub fn provision(model: &'static EntityModel) -> Result<(), ListenerError> {
    let Some(index) = fulltext_index(model) else {
        return Ok(());
    };

    if index.is_empty() {
        return Err(Box::new(DeclarationError::EmptyColumns {
            entity: model.path,
        }));
    }

    let statement = format!(
        "ALTER TABLE {} ADD FULLTEXT ({})",
        model.table.fullname(),
        index.ddl_columns()
    );

    debug!("fulltext: provisioning index for {}: {statement}", model.path);
    mapper::attach_ddl(model.table.name, DdlEvent::AfterCreate, statement);

    Ok(())
}

/// Subscribe the provisioning listener. Replay of entities registered
/// before this crate's constructor ran can surface a declaration error;
/// that is a startup abort, mirroring a failed registration.
pub(crate) fn install() {
    if let Err(err) = mapper::on_entity_registered(LISTENER_NAME, provision) {
        panic!("full-text index provisioning failed during replay: {err}");
    }
}
