//! Density dispatch
//!
//! Every density defaults to ρ = Ω · ρ_crit at the matching epoch. A concrete
//! cosmology type may register its own formula for a (species, epoch) pair;
//! that formula then replaces the default for that exact type, and only that
//! type. Call sites never change.
//!
//! Keys are the `TypeId` of the cosmology. A generic cosmology such as
//! `Lcdm<A>` gets one key per array backend `A`, so a specialization can
//! target a cosmology/backend pair.
//!
//! At most one formula exists per key. The registry is filled at start-up and
//! read afterwards; it can be sealed to make that explicit.
//!
//! Every lookup needs a `TypeId`, so dispatched reads require `C: 'static`.
//! A cosmology type that borrows its parameters (`Borrowed<'a>`) cannot use
//! `density0`/`density` at all, not even the default ρ = Ω · ρ_crit path, nor
//! `rho_total0`/`rho_total`. Such types should own their parameters, or call
//! `critical_density0() * omega0(species)` directly.

use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use cosmology_api::{
    Array, BackgroundCosmology, CosmologyError, CosmologyResult, Epoch, Species, StandardCosmology,
};
use parking_lot::RwLock;

use crate::RegistryConfig;

/// Specialized density at z = 0
type TodayFormula<C> = Arc<dyn Fn(&C) -> <C as BackgroundCosmology>::Array + Send + Sync>;

/// Specialized density at redshift z
type RedshiftFormula<C> = Arc<
    dyn Fn(
            &C,
            &<C as BackgroundCosmology>::Array,
        ) -> Result<<C as BackgroundCosmology>::Array, <C as BackgroundCosmology>::Error>
        + Send
        + Sync,
>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct DispatchKey {
    cosmology: TypeId,
    species: Species,
    epoch: Epoch,
}

impl DispatchKey {
    #[inline]
    fn of<C: 'static>(species: Species, epoch: Epoch) -> Self {
        DispatchKey {
            cosmology: TypeId::of::<C>(),
            species,
            epoch,
        }
    }
}

/// A registered formula, type-erased
struct Specialization {
    cosmology: &'static str,
    formula: Box<dyn Any + Send + Sync>,
}

/// Type-keyed table of specialized density formulas
pub struct DensityRegistry {
    config: RegistryConfig,
    table: RwLock<HashMap<DispatchKey, Specialization>>,
    sealed: AtomicBool,
}

impl DensityRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        DensityRegistry {
            config,
            table: RwLock::new(HashMap::new()),
            sealed: AtomicBool::new(false),
        }
    }

    /// Process-wide registry behind the free `rho_*` functions
    pub fn global() -> &'static DensityRegistry {
        static GLOBAL: OnceLock<DensityRegistry> = OnceLock::new();
        GLOBAL.get_or_init(DensityRegistry::new)
    }

    /// Register a z = 0 density formula for cosmology type `C`.
    pub fn register0<C, F>(&self, species: Species, formula: F) -> CosmologyResult<()>
    where
        C: BackgroundCosmology + 'static,
        F: Fn(&C) -> C::Array + Send + Sync + 'static,
    {
        let formula: TodayFormula<C> = Arc::new(formula);
        self.insert::<C>(species, Epoch::Today, Box::new(formula))
    }

    /// Register a redshift-dependent density formula for cosmology type `C`.
    pub fn register<C, F>(&self, species: Species, formula: F) -> CosmologyResult<()>
    where
        C: BackgroundCosmology + 'static,
        F: Fn(&C, &C::Array) -> Result<C::Array, C::Error> + Send + Sync + 'static,
    {
        let formula: RedshiftFormula<C> = Arc::new(formula);
        self.insert::<C>(species, Epoch::Redshift, Box::new(formula))
    }

    fn insert<C: 'static>(
        &self,
        species: Species,
        epoch: Epoch,
        formula: Box<dyn Any + Send + Sync>,
    ) -> CosmologyResult<()> {
        let cosmology = type_name::<C>();
        let mut table = self.table.write();

        if self.is_sealed() {
            tracing::warn!(cosmology, %species, %epoch, "registration refused: registry sealed");
            return Err(CosmologyError::RegistrySealed);
        }

        match table.entry(DispatchKey::of::<C>(species, epoch)) {
            Entry::Occupied(_) => {
                tracing::warn!(cosmology, %species, %epoch, "duplicate density specialization");
                Err(CosmologyError::DuplicateSpecialization {
                    species,
                    epoch,
                    cosmology,
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(Specialization { cosmology, formula });
                tracing::debug!(cosmology, %species, %epoch, "density specialization registered");
                Ok(())
            }
        }
    }

    /// Refuse all further registrations
    pub fn seal(&self) {
        let table = self.table.write();
        if !self.sealed.swap(true, Ordering::AcqRel) {
            tracing::info!(specializations = table.len(), "density registry sealed");
        }
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Has `C` registered a formula for this species and epoch?
    pub fn is_specialized<C: 'static>(&self, species: Species, epoch: Epoch) -> bool {
        self.table
            .read()
            .contains_key(&DispatchKey::of::<C>(species, epoch))
    }

    /// Number of registered specializations
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    fn lookup_today<C>(&self, species: Species) -> Option<TodayFormula<C>>
    where
        C: BackgroundCosmology + 'static,
    {
        // Clone out of the lock: a formula may dispatch again.
        let found = self
            .table
            .read()
            .get(&DispatchKey::of::<C>(species, Epoch::Today))
            .and_then(|s| s.formula.downcast_ref::<TodayFormula<C>>())
            .cloned();
        self.observe::<C>(species, Epoch::Today, found.is_some());
        found
    }

    fn lookup_redshift<C>(&self, species: Species) -> Option<RedshiftFormula<C>>
    where
        C: BackgroundCosmology + 'static,
    {
        let found = self
            .table
            .read()
            .get(&DispatchKey::of::<C>(species, Epoch::Redshift))
            .and_then(|s| s.formula.downcast_ref::<RedshiftFormula<C>>())
            .cloned();
        self.observe::<C>(species, Epoch::Redshift, found.is_some());
        found
    }

    fn observe<C: 'static>(&self, species: Species, epoch: Epoch, specialized: bool) {
        if self.config.trace_dispatch {
            tracing::trace!(
                cosmology = type_name::<C>(),
                %species,
                %epoch,
                specialized,
                "density dispatch"
            );
        }
        if self.config.seal_on_first_dispatch && !self.is_sealed() {
            self.seal();
        }
    }

    /// Total density at z = 0: Ω_tot0 · ρ_crit0 unless specialized
    pub fn total_density0<C>(&self, cosmo: &C) -> C::Array
    where
        C: BackgroundCosmology + 'static,
    {
        match self.lookup_today::<C>(Species::Total) {
            Some(formula) => formula(cosmo),
            None => cosmo.otot0().product(&cosmo.critical_density0()),
        }
    }

    /// Total density at z: Ω_tot(z) · ρ_crit(z) unless specialized
    pub fn total_density<C>(&self, cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error>
    where
        C: BackgroundCosmology + 'static,
    {
        match self.lookup_redshift::<C>(Species::Total) {
            Some(formula) => formula(cosmo, z),
            None => Ok(cosmo.otot(z)?.product(&cosmo.critical_density(z)?)),
        }
    }

    /// Density of `species` at z = 0: Ω_X0 · ρ_crit0 unless specialized
    pub fn density0<C>(&self, cosmo: &C, species: Species) -> C::Array
    where
        C: StandardCosmology + 'static,
    {
        match self.lookup_today::<C>(species) {
            Some(formula) => formula(cosmo),
            None => cosmo.omega0(species).product(&cosmo.critical_density0()),
        }
    }

    /// Density of `species` at z: Ω_X(z) · ρ_crit(z) unless specialized
    pub fn density<C>(&self, cosmo: &C, species: Species, z: &C::Array) -> Result<C::Array, C::Error>
    where
        C: StandardCosmology + 'static,
    {
        match self.lookup_redshift::<C>(species) {
            Some(formula) => formula(cosmo, z),
            None => Ok(cosmo.omega(species, z)?.product(&cosmo.critical_density(z)?)),
        }
    }
}

impl Default for DensityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DensityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table.read();
        let mut entries: Vec<_> = table
            .iter()
            .map(|(key, s)| (s.cosmology, key.species, key.epoch))
            .collect();
        entries.sort_by_key(|(cosmology, species, epoch)| (*cosmology, *species as u8, *epoch as u8));

        f.debug_struct("DensityRegistry")
            .field("config", &self.config)
            .field("sealed", &self.is_sealed())
            .field("specializations", &entries)
            .finish()
    }
}

/// Register a z = 0 density formula in the global registry.
pub fn register_density0<C, F>(species: Species, formula: F) -> CosmologyResult<()>
where
    C: BackgroundCosmology + 'static,
    F: Fn(&C) -> C::Array + Send + Sync + 'static,
{
    DensityRegistry::global().register0::<C, F>(species, formula)
}

/// Register a redshift-dependent density formula in the global registry.
pub fn register_density<C, F>(species: Species, formula: F) -> CosmologyResult<()>
where
    C: BackgroundCosmology + 'static,
    F: Fn(&C, &C::Array) -> Result<C::Array, C::Error> + Send + Sync + 'static,
{
    DensityRegistry::global().register::<C, F>(species, formula)
}
