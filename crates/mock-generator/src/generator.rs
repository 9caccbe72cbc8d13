//! Main data generator for producing mock tables.

use crate::dispatch;
use crate::error::GeneratorError;
use crate::faker::{FakeSource, FakerRegistry};
use mock_core::{ColumnSpec, MockConfig, Table};

/// Data generator that owns a fake-data source.
///
/// With a seed, the same schema always produces the same table. Without
/// one, the RNG is seeded from OS entropy.
#[derive(Debug)]
pub struct DataGenerator {
    /// Registry and RNG shared by every column
    source: FakeSource,
    /// Seed the RNG was created from, if any
    seed: Option<u64>,
}

impl DataGenerator {
    /// Create a new data generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            source: FakeSource::seeded(seed),
            seed: Some(seed),
        }
    }

    /// Create a non-reproducible data generator.
    pub fn from_entropy() -> Self {
        Self {
            source: FakeSource::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is set, entropy-seeded otherwise.
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Replace the faker registry.
    pub fn with_registry(mut self, registry: FakerRegistry) -> Self {
        self.source = self.source.with_registry(registry);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn registry(&self) -> &FakerRegistry {
        self.source.registry()
    }

    /// Generate a table from column specifications.
    pub fn generate_table(
        &mut self,
        schema: &[ColumnSpec],
        num_rows: usize,
    ) -> Result<Table, GeneratorError> {
        dispatch::generate_table(schema, num_rows, &mut self.source)
    }

    /// Generate a table from a loaded configuration.
    pub fn generate_config(&mut self, config: &MockConfig) -> Result<Table, GeneratorError> {
        self.generate_table(&config.schema, config.num_rows)
    }

    /// Check every column against this generator's registry.
    pub fn validate_schema(&self, schema: &[ColumnSpec]) -> Vec<GeneratorError> {
        dispatch::validate_schema(schema, self.source.registry())
    }
}
