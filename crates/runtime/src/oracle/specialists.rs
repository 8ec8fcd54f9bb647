//! Specialist capability table loaded from JSON.
use std::collections::HashMap;
use std::path::Path;

use galaxy_core::{Specialist, SpecialistId, SpecialistOracle};

use crate::api::{Result, RuntimeError};

/// SpecialistOracle backed by a static table.
#[derive(Clone, Debug, Default)]
pub struct SpecialistTable {
    specialists: HashMap<SpecialistId, Specialist>,
}

impl SpecialistTable {
    pub fn new(specialists: impl IntoIterator<Item = Specialist>) -> Self {
        Self {
            specialists: specialists
                .into_iter()
                .map(|specialist| (specialist.id, specialist))
                .collect(),
        }
    }

    /// Parses a JSON array of specialist definitions.
    ///
    /// Later entries replace earlier ones with the same id.
    pub fn from_json(json: &str) -> Result<Self> {
        let specialists: Vec<Specialist> =
            serde_json::from_str(json).map_err(RuntimeError::SpecialistTable)?;
        Ok(Self::new(specialists))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| RuntimeError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::from_json(&json)?;

        tracing::debug!(path = %path.display(), count = table.len(), "loaded specialist table");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.specialists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specialists.is_empty()
    }
}

impl SpecialistOracle for SpecialistTable {
    fn carrier_specialist(&self, id: SpecialistId) -> Option<Specialist> {
        self.specialists.get(&id).cloned()
    }
}
