//! # rockets-store
//!
//! The repository port the analytics engine loads its records through.
//!
//! - [`Repository`]: load/create/update/delete entities by kind and id
//! - [`MemoryStore`]: insertion-ordered in-memory implementation
//! - [`Dataset`]: JSON document a store can be seeded from
//! - [`Enrichment`]: the explicit preparation step that fills in launch
//!   prices and payloads before cost or payload reports run
//!
//! Queries call only [`load_snapshot`], once per query.

pub mod dataset;
pub mod error;
pub mod memory;
pub mod prepare;

pub use dataset::Dataset;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use prepare::Enrichment;

use rockets_core::{Entity, EntityKind, Launch, Snapshot};

/// Storage operations over the launch domain.
pub trait Repository {
    /// Every stored entity of one kind, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing store cannot be read.
    fn load_all(&self, kind: EntityKind) -> Result<Vec<Entity>, StoreError>;

    /// A single entity by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entity of that kind has the id.
    fn load(&self, kind: EntityKind, id: &str) -> Result<Entity, StoreError>;

    /// Insert a new entity or replace the stored one with the same id or
    /// natural key. Returns the entity as stored, id assigned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the entity is invalid, references unknown
    /// entities, or collides with a different stored entity.
    fn create_or_update(&mut self, entity: Entity) -> Result<Entity, StoreError>;

    /// Remove an entity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if it is not stored, or
    /// `StoreError::StillReferenced` if other entities point at it.
    fn delete(&mut self, entity: &Entity) -> Result<(), StoreError>;
}

/// Load the full record set into a [`Snapshot`].
///
/// # Errors
///
/// Returns `StoreError` if a `load_all` call fails or returns an entity of
/// the wrong kind.
pub fn load_snapshot<R: Repository + ?Sized>(repo: &R) -> Result<Snapshot, StoreError> {
    let providers = unpack(repo, EntityKind::Provider, |e| match e {
        Entity::Provider(p) => Ok(p),
        other => Err(other),
    })?;
    let rockets = unpack(repo, EntityKind::Rocket, |e| match e {
        Entity::Rocket(r) => Ok(r),
        other => Err(other),
    })?;
    let families = unpack(repo, EntityKind::Family, |e| match e {
        Entity::Family(f) => Ok(f),
        other => Err(other),
    })?;
    let launches = unpack(repo, EntityKind::Launch, expect_launch_entity)?;

    tracing::debug!(
        providers = providers.len(),
        rockets = rockets.len(),
        families = families.len(),
        launches = launches.len(),
        "loaded snapshot"
    );

    Ok(Snapshot::new(providers, rockets, families, launches))
}

fn unpack<R, T>(
    repo: &R,
    expected: EntityKind,
    pick: impl Fn(Entity) -> Result<T, Entity>,
) -> Result<Vec<T>, StoreError>
where
    R: Repository + ?Sized,
{
    repo.load_all(expected)?
        .into_iter()
        .map(|e| {
            pick(e).map_err(|other| StoreError::KindMismatch {
                expected,
                found: other.kind(),
            })
        })
        .collect()
}

fn expect_launch_entity(entity: Entity) -> Result<Launch, Entity> {
    match entity {
        Entity::Launch(l) => Ok(l),
        other => Err(other),
    }
}

pub(crate) fn expect_launch(entity: Entity) -> Result<Launch, StoreError> {
    expect_launch_entity(entity).map_err(|other| StoreError::KindMismatch {
        expected: EntityKind::Launch,
        found: other.kind(),
    })
}
