//! In-memory repository.
//!
//! Entities are kept in insertion order per kind, which is also the order
//! `load_all` returns them in. Ids are `{prefix}-{seq:08x}` and never reused
//! within one store.

use std::path::Path;

use rockets_core::ids;
use rockets_core::{Entity, EntityKind, Launch, Payload, Provider, Rocket, RocketFamily};

use crate::dataset::Dataset;
use crate::error::StoreError;
use crate::Repository;

/// Insertion-ordered, in-memory [`Repository`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    providers: Vec<Provider>,
    rockets: Vec<Rocket>,
    families: Vec<RocketFamily>,
    payloads: Vec<Payload>,
    launches: Vec<Launch>,
    next_seq: u32,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from a dataset. Providers go in first, then payloads and
    /// rockets, launches last, so every reference can be checked as it arrives.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` raised by `create_or_update`.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, StoreError> {
        let mut store = Self::new();
        let Dataset {
            providers,
            payloads,
            rockets,
            families,
            launches,
        } = dataset;

        for provider in providers {
            store.create_or_update(provider.into())?;
        }
        for payload in payloads {
            store.create_or_update(payload.into())?;
        }
        for rocket in rockets {
            store.create_or_update(rocket.into())?;
        }
        for family in families {
            store.create_or_update(family.into())?;
        }
        for launch in launches {
            store.create_or_update(launch.into())?;
        }

        tracing::debug!(
            providers = store.providers.len(),
            rockets = store.rockets.len(),
            launches = store.launches.len(),
            "seeded memory store"
        );
        Ok(store)
    }

    /// Read a dataset file and seed a store from it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` / `StoreError::Json` if the file cannot be
    /// read, or any error from [`Self::from_dataset`].
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::from_dataset(Dataset::read(path)?)
    }

    fn check_exists(
        &self,
        kind: EntityKind,
        id: &str,
        field: &'static str,
        target_kind: EntityKind,
        target: &str,
    ) -> Result<(), StoreError> {
        let found = match target_kind {
            EntityKind::Provider => self.providers.iter().any(|p| p.id == target),
            EntityKind::Rocket => self.rockets.iter().any(|r| r.id == target),
            EntityKind::Family => self.families.iter().any(|f| f.id == target),
            EntityKind::Payload => self.payloads.iter().any(|p| p.id == target),
            EntityKind::Launch => self.launches.iter().any(|l| l.id == target),
        };
        if found {
            Ok(())
        } else {
            Err(StoreError::DanglingReference {
                kind,
                id: id.to_string(),
                field,
                target: target.to_string(),
            })
        }
    }

    fn store_rocket(&mut self, rocket: Rocket) -> Result<Rocket, StoreError> {
        self.check_exists(
            EntityKind::Rocket,
            &rocket.id,
            "manufacturer",
            EntityKind::Provider,
            &rocket.manufacturer,
        )?;
        for payload in &rocket.payloads {
            self.check_exists(
                EntityKind::Rocket,
                &rocket.id,
                "payloads",
                EntityKind::Payload,
                payload,
            )?;
        }
        let (stored, previous) = upsert(&mut self.rockets, rocket, &mut self.next_seq)?;

        if let Some(prev) = previous {
            if prev.manufacturer != stored.manufacturer {
                if let Some(owner) = self.providers.iter_mut().find(|p| p.id == prev.manufacturer) {
                    owner.rockets.remove(&prev.id);
                }
            }
        }
        if let Some(owner) = self.providers.iter_mut().find(|p| p.id == stored.manufacturer) {
            owner.rockets.insert(stored.id.clone());
        }
        Ok(stored)
    }

    fn store_provider(&mut self, provider: Provider) -> Result<Provider, StoreError> {
        let (mut stored, _) = upsert(&mut self.providers, provider, &mut self.next_seq)?;

        // The rocket set is derived from the rockets' manufacturer field.
        let owned = self
            .rockets
            .iter()
            .filter(|r| r.manufacturer == stored.id)
            .map(|r| r.id.clone())
            .collect();
        if let Some(slot) = self.providers.iter_mut().find(|p| p.id == stored.id) {
            slot.rockets = owned;
            stored.rockets.clone_from(&slot.rockets);
        }
        Ok(stored)
    }

    fn store_family(&mut self, family: RocketFamily) -> Result<RocketFamily, StoreError> {
        for rocket in &family.rockets {
            self.check_exists(
                EntityKind::Family,
                &family.id,
                "rockets",
                EntityKind::Rocket,
                rocket,
            )?;
        }
        let (stored, _) = upsert(&mut self.families, family, &mut self.next_seq)?;
        Ok(stored)
    }

    fn store_payload(&mut self, payload: Payload) -> Result<Payload, StoreError> {
        self.check_exists(
            EntityKind::Payload,
            &payload.id,
            "manufacturer",
            EntityKind::Provider,
            &payload.manufacturer,
        )?;
        let (stored, _) = upsert(&mut self.payloads, payload, &mut self.next_seq)?;
        Ok(stored)
    }

    fn store_launch(&mut self, launch: Launch) -> Result<Launch, StoreError> {
        self.check_exists(
            EntityKind::Launch,
            &launch.id,
            "vehicle",
            EntityKind::Rocket,
            &launch.vehicle,
        )?;
        self.check_exists(
            EntityKind::Launch,
            &launch.id,
            "provider",
            EntityKind::Provider,
            &launch.provider,
        )?;
        let (stored, _) = upsert(&mut self.launches, launch, &mut self.next_seq)?;
        Ok(stored)
    }

    fn delete_provider(&mut self, provider: &Provider) -> Result<(), StoreError> {
        let index = locate(&self.providers, provider)?;
        let id = self.providers[index].id.clone();
        let referrer = self
            .rockets
            .iter()
            .find(|r| r.manufacturer == id)
            .map(|r| r.id.clone())
            .or_else(|| {
                self.payloads
                    .iter()
                    .find(|p| p.manufacturer == id)
                    .map(|p| p.id.clone())
            })
            .or_else(|| {
                self.launches
                    .iter()
                    .find(|l| l.provider == id)
                    .map(|l| l.id.clone())
            });
        if let Some(by) = referrer {
            return Err(StoreError::StillReferenced {
                kind: EntityKind::Provider,
                id,
                by,
            });
        }
        self.providers.remove(index);
        Ok(())
    }

    fn delete_rocket(&mut self, rocket: &Rocket) -> Result<(), StoreError> {
        let index = locate(&self.rockets, rocket)?;
        let id = self.rockets[index].id.clone();
        let referrer = self
            .launches
            .iter()
            .find(|l| l.vehicle == id)
            .map(|l| l.id.clone())
            .or_else(|| {
                self.families
                    .iter()
                    .find(|f| f.rockets.contains(&id))
                    .map(|f| f.id.clone())
            });
        if let Some(by) = referrer {
            return Err(StoreError::StillReferenced {
                kind: EntityKind::Rocket,
                id,
                by,
            });
        }
        let removed = self.rockets.remove(index);
        if let Some(owner) = self.providers.iter_mut().find(|p| p.id == removed.manufacturer) {
            owner.rockets.remove(&removed.id);
        }
        Ok(())
    }

    fn delete_payload(&mut self, payload: &Payload) -> Result<(), StoreError> {
        let index = locate(&self.payloads, payload)?;
        let id = self.payloads[index].id.clone();
        if let Some(by) = self
            .rockets
            .iter()
            .find(|r| r.payloads.contains(&id))
            .map(|r| r.id.clone())
        {
            return Err(StoreError::StillReferenced {
                kind: EntityKind::Payload,
                id,
                by,
            });
        }
        self.payloads.remove(index);
        Ok(())
    }
}

impl Repository for MemoryStore {
    fn load_all(&self, kind: EntityKind) -> Result<Vec<Entity>, StoreError> {
        Ok(match kind {
            EntityKind::Provider => self.providers.iter().cloned().map(Entity::from).collect(),
            EntityKind::Rocket => self.rockets.iter().cloned().map(Entity::from).collect(),
            EntityKind::Family => self.families.iter().cloned().map(Entity::from).collect(),
            EntityKind::Payload => self.payloads.iter().cloned().map(Entity::from).collect(),
            EntityKind::Launch => self.launches.iter().cloned().map(Entity::from).collect(),
        })
    }

    fn load(&self, kind: EntityKind, id: &str) -> Result<Entity, StoreError> {
        let found = match kind {
            EntityKind::Provider => find_by_id(&self.providers, id).cloned().map(Entity::from),
            EntityKind::Rocket => find_by_id(&self.rockets, id).cloned().map(Entity::from),
            EntityKind::Family => find_by_id(&self.families, id).cloned().map(Entity::from),
            EntityKind::Payload => find_by_id(&self.payloads, id).cloned().map(Entity::from),
            EntityKind::Launch => find_by_id(&self.launches, id).cloned().map(Entity::from),
        };
        found.ok_or_else(|| StoreError::NotFound {
            kind,
            id: id.to_string(),
        })
    }

    fn create_or_update(&mut self, entity: Entity) -> Result<Entity, StoreError> {
        entity.validate()?;
        let stored = match entity {
            Entity::Provider(p) => Entity::from(self.store_provider(p)?),
            Entity::Rocket(r) => Entity::from(self.store_rocket(r)?),
            Entity::Family(f) => Entity::from(self.store_family(f)?),
            Entity::Payload(p) => Entity::from(self.store_payload(p)?),
            Entity::Launch(l) => Entity::from(self.store_launch(l)?),
        };
        tracing::debug!(kind = %stored.kind(), id = stored.id(), "stored entity");
        Ok(stored)
    }

    fn delete(&mut self, entity: &Entity) -> Result<(), StoreError> {
        match entity {
            Entity::Provider(p) => self.delete_provider(p)?,
            Entity::Rocket(r) => self.delete_rocket(r)?,
            Entity::Family(f) => {
                let index = locate(&self.families, f)?;
                self.families.remove(index);
            }
            Entity::Payload(p) => self.delete_payload(p)?,
            Entity::Launch(l) => {
                let index = locate(&self.launches, l)?;
                self.launches.remove(index);
            }
        }
        tracing::debug!(kind = %entity.kind(), id = entity.id(), "deleted entity");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Per-kind storage helpers
// ---------------------------------------------------------------------------

/// What the generic helpers need from an entity: a kind and a mutable id.
/// Natural-key identity comes from the entity's `PartialEq`.
trait Stored: Clone + PartialEq {
    const KIND: EntityKind;
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! impl_stored {
    ($ty:ty, $kind:expr) => {
        impl Stored for $ty {
            const KIND: EntityKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

impl_stored!(Provider, EntityKind::Provider);
impl_stored!(Rocket, EntityKind::Rocket);
impl_stored!(RocketFamily, EntityKind::Family);
impl_stored!(Payload, EntityKind::Payload);
impl_stored!(Launch, EntityKind::Launch);

fn find_by_id<'a, T: Stored>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Insert or replace `entity`, returning the stored copy and the value it replaced.
///
/// Matching goes by id first, then by natural key. An entity with an empty id
/// that matches a stored natural key takes over the stored id.
fn upsert<T: Stored>(
    items: &mut Vec<T>,
    mut entity: T,
    next_seq: &mut u32,
) -> Result<(T, Option<T>), StoreError> {
    let by_id = if entity.id().is_empty() {
        None
    } else {
        items.iter().position(|item| item.id() == entity.id())
    };
    let by_key = items.iter().position(|item| *item == entity);

    match (by_id, by_key) {
        (Some(i), Some(j)) if i != j => Err(StoreError::Duplicate {
            kind: T::KIND,
            id: entity.id().to_string(),
            existing: items[j].id().to_string(),
        }),
        (Some(i), _) => {
            let previous = std::mem::replace(&mut items[i], entity.clone());
            Ok((entity, Some(previous)))
        }
        (None, Some(j)) => {
            if !entity.id().is_empty() {
                return Err(StoreError::Duplicate {
                    kind: T::KIND,
                    id: entity.id().to_string(),
                    existing: items[j].id().to_string(),
                });
            }
            entity.set_id(items[j].id().to_string());
            let previous = std::mem::replace(&mut items[j], entity.clone());
            Ok((entity, Some(previous)))
        }
        (None, None) => {
            if entity.id().is_empty() {
                entity.set_id(fresh_id(items, next_seq));
            } else if let Some(found) = ids::kind_of(entity.id()).filter(|k| *k != T::KIND) {
                return Err(StoreError::KindMismatch {
                    expected: T::KIND,
                    found,
                });
            }
            items.push(entity.clone());
            Ok((entity, None))
        }
    }
}

fn fresh_id<T: Stored>(items: &[T], next_seq: &mut u32) -> String {
    loop {
        *next_seq += 1;
        let candidate = ids::format_id(T::KIND, *next_seq);
        if find_by_id(items, &candidate).is_none() {
            return candidate;
        }
    }
}

fn locate<T: Stored>(items: &[T], entity: &T) -> Result<usize, StoreError> {
    let position = if entity.id().is_empty() {
        items.iter().position(|item| item == entity)
    } else {
        items.iter().position(|item| item.id() == entity.id())
    };
    position.ok_or_else(|| StoreError::NotFound {
        kind: T::KIND,
        id: entity.id().to_string(),
    })
}
