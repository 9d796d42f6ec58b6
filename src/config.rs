//! Configuration for the quadtree and the grid clusterer.
//!
//! Every field has a serde default, so partial JSON or TOML documents are
//! accepted and missing values fall back to the reference behaviour
//! (capacity 4, a 4x4 clustering grid).

use crate::error::{QuadError, Result};
use serde::{Deserialize, Serialize};

/// Default number of points a node stores before it subdivides.
pub const DEFAULT_CAPACITY: usize = 4;

/// Default depth below which nodes stop subdividing and overflow instead.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Largest accepted `max_depth`. Halving an `f64` extent more often than this
/// produces cells too small to separate distinct coordinates anyway.
pub const MAX_DEPTH_LIMIT: usize = 64;

/// Top-level configuration.
///
/// # Example
///
/// ```rust
/// use quadcluster::Config;
///
/// let json = r#"{
///     "index": { "capacity": 8 },
///     "grid": { "columns": 6, "rows": 4 }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.index.capacity, 8);
/// assert_eq!(config.index.max_depth, 32);
/// assert_eq!(config.grid.columns, 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub grid: GridConfig,
}

/// Shape parameters of a quadtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Points a node holds directly before delegating to its quadrants
    #[serde(default = "IndexConfig::default_capacity")]
    pub capacity: usize,

    /// Nodes at this depth never subdivide; further points overflow there
    #[serde(default = "IndexConfig::default_max_depth")]
    pub max_depth: usize,
}

impl IndexConfig {
    const fn default_capacity() -> usize {
        DEFAULT_CAPACITY
    }

    const fn default_max_depth() -> usize {
        DEFAULT_MAX_DEPTH
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Node capacity must be greater than zero");

        if capacity > 1024 {
            log::warn!(
                "Node capacity of {} is very large; queries will scan long point lists \
                at every visited node.",
                capacity
            );
        }

        self.capacity = capacity;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        assert!(
            max_depth <= MAX_DEPTH_LIMIT,
            "Maximum depth must be at most {}",
            MAX_DEPTH_LIMIT
        );
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(QuadError::InvalidConfig(
                "Node capacity must be greater than zero".to_string(),
            ));
        }

        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(QuadError::InvalidConfig(format!(
                "Maximum depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            )));
        }

        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
            max_depth: Self::default_max_depth(),
        }
    }
}

/// Lattice used by the grid clusterer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    #[serde(default = "GridConfig::default_columns")]
    pub columns: usize,

    #[serde(default = "GridConfig::default_rows")]
    pub rows: usize,
}

impl GridConfig {
    const fn default_columns() -> usize {
        4
    }

    const fn default_rows() -> usize {
        4
    }

    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(QuadError::InvalidConfig(format!(
                "Grid must have at least one column and one row, got {}x{}",
                self.columns, self.rows
            )));
        }

        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: Self::default_columns(),
            rows: Self::default_rows(),
        }
    }
}

impl Config {
    pub fn with_index(mut self, index: IndexConfig) -> Self {
        self.index = index;
        self
    }

    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.index.validate()?;
        self.grid.validate()
    }

    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as a TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
