use crate::error::{PortfolioError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

type AnyArc = Arc<dyn Any + Send + Sync>;

/// Turns a stored concrete instance into an `Arc<Arc<dyn Trait>>` erased as `Any`.
type CasterFn = Arc<dyn Fn(AnyArc) -> Option<AnyArc> + Send + Sync>;

/// Thread-safe dependency injection container.
///
/// Concrete services are keyed by their own `TypeId`. Trait objects are served
/// either from an explicit instance ([`Container::provide`]) or by casting a
/// registered implementation ([`Container::register_trait`]).
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, AnyArc>,
    trait_instances: DashMap<TypeId, AnyArc>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), Arc::new(instance));
        self
    }

    /// Register an already-built trait object, e.g. one constructed asynchronously.
    pub fn provide<Trait>(&mut self, instance: Arc<Trait>) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
    {
        self.trait_instances
            .insert(TypeId::of::<Trait>(), Arc::new(instance));
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let trait_id = TypeId::of::<Trait>();
        self.trait_mappings.insert(trait_id, TypeId::of::<Impl>());

        let caster: CasterFn = Arc::new(move |instance: AnyArc| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as AnyArc)
        });
        self.casters.insert(trait_id, caster);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let entry = self
            .services
            .get(&TypeId::of::<T>())
            .ok_or_else(|| PortfolioError::DependencyNotFound {
                type_name: type_name::<T>().to_string(),
            })?;
        entry
            .value()
            .clone()
            .downcast::<T>()
            .map_err(|_| PortfolioError::DowncastFailed {
                type_name: type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let trait_id = TypeId::of::<T>();

        let erased = match self.trait_instances.get(&trait_id) {
            Some(instance) => instance.value().clone(),
            None => self.cast_registered::<T>(trait_id)?,
        };

        // Every erased trait value is an `Arc<Arc<T>>`.
        erased
            .downcast::<Arc<T>>()
            .map(|wrapper| wrapper.as_ref().clone())
            .map_err(|_| PortfolioError::DowncastFailed {
                type_name: format!("Arc<{}>", type_name::<T>()),
            })
    }

    fn cast_registered<T: ?Sized + 'static>(&self, trait_id: TypeId) -> Result<AnyArc> {
        let not_found = |detail: &str| PortfolioError::DependencyNotFound {
            type_name: format!("{} ({})", type_name::<T>(), detail),
        };

        let caster = self
            .casters
            .get(&trait_id)
            .ok_or_else(|| not_found("no binding"))?;
        let impl_id = *self
            .trait_mappings
            .get(&trait_id)
            .ok_or_else(|| not_found("no implementation mapping"))?;
        let instance = self
            .services
            .get(&impl_id)
            .ok_or_else(|| not_found("implementation not registered"))?
            .value()
            .clone();

        (caster.value())(instance).ok_or_else(|| PortfolioError::DowncastFailed {
            type_name: type_name::<T>().to_string(),
        })
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id)
            || self.trait_instances.contains_key(&type_id)
            || self.trait_mappings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len() + self.trait_instances.len()
    }
}
