//! Fake-data source: a registry of named generators plus a seedable RNG.
//!
//! String columns name a faker method (`faker: email`). Methods are looked up
//! in an explicit, enumerable [`FakerRegistry`] so a schema can be checked
//! against it before any row is produced.

pub mod pools;
pub mod providers;

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::BTreeMap;
use std::fmt;

/// A zero-argument fake value generator. The RNG is the only input.
pub type FakeFn = fn(&mut dyn RngCore) -> String;

/// Named faker methods.
#[derive(Clone, Default)]
pub struct FakerRegistry {
    methods: BTreeMap<String, FakeFn>,
}

impl FakerRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registry with every built-in method.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry
            .register("address", providers::address)
            .register("city", providers::city)
            .register("color_name", providers::color_name)
            .register("company", providers::company)
            .register("country", providers::country)
            .register("currency_code", providers::currency_code)
            .register("domain_name", providers::domain_name)
            .register("email", providers::email)
            .register("first_name", providers::first_name)
            .register("free_email", providers::free_email)
            .register("ipv4", providers::ipv4)
            .register("job", providers::job)
            .register("last_name", providers::last_name)
            .register("name", providers::name)
            .register("phone_number", providers::phone_number)
            .register("postcode", providers::postcode)
            .register("sentence", providers::sentence)
            .register("state", providers::state)
            .register("state_abbr", providers::state_abbr)
            .register("street_address", providers::street_address)
            .register("url", providers::url)
            .register("user_name", providers::user_name)
            .register("uuid4", providers::uuid4)
            .register("word", providers::word)
            .register("zipcode", providers::postcode);
        registry
    }

    /// Register (or replace) a method.
    pub fn register(&mut self, name: impl Into<String>, method: FakeFn) -> &mut Self {
        self.methods.insert(name.into(), method);
        self
    }

    /// Look up a method by name.
    pub fn lookup(&self, name: &str) -> Option<FakeFn> {
        self.methods.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered method names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl fmt::Debug for FakerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Returned when a faker method is not registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The 'faker' method '{0}' doesn't exist")]
pub struct UnknownMethod(pub String);

/// Registry and RNG, passed explicitly to every generator.
pub struct FakeSource {
    registry: FakerRegistry,
    rng: StdRng,
}

impl FakeSource {
    /// Create a source from a registry and an RNG.
    pub fn new(registry: FakerRegistry, rng: StdRng) -> Self {
        Self { registry, rng }
    }

    /// Built-in registry with a seeded RNG, for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self::new(FakerRegistry::builtin(), StdRng::seed_from_u64(seed))
    }

    /// Built-in registry with an RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(FakerRegistry::builtin(), StdRng::from_os_rng())
    }

    /// Replace the registry, keeping the RNG state.
    pub fn with_registry(mut self, registry: FakerRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &FakerRegistry {
        &self.registry
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Invoke a named method once.
    pub fn invoke(&mut self, method: &str) -> Result<String, UnknownMethod> {
        let fake = self
            .registry
            .lookup(method)
            .ok_or_else(|| UnknownMethod(method.to_string()))?;
        Ok(fake(&mut self.rng))
    }

    /// Uniform random date in the inclusive range `[start, end]`.
    ///
    /// Returns `start` when the range is empty or inverted.
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days();
        if span <= 0 {
            return start;
        }
        let offset = self.rng.random_range(0..=span as u64);
        start.checked_add_days(Days::new(offset)).unwrap_or(end)
    }
}

impl fmt::Debug for FakeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeSource")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
