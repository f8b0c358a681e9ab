// src/io/scenario.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::model::inputs::PolicyInputs;
use crate::model::series::InventorySeries;

/// A saved dashboard setup: the calculator inputs plus the chart-7 series.
///
/// Both sections and every field inside them are optional in the file, but a
/// key that names no field is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub inputs: PolicyInputs,
    pub series: InventorySeries,
}

impl Scenario {
    /// Reads a scenario from a JSON file without range checks.
    ///
    /// Callers layer their own overrides on top and then call
    /// [`Scenario::validate`] once on the merged result.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let scenario = Self::parse(&data)?;
        info!(path = %path.display(), "loaded scenario");
        Ok(scenario)
    }

    /// Deserializes only. Field names are still checked.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Deserializes and validates in one step.
    pub fn from_json(data: &str) -> Result<Self> {
        let scenario = Self::parse(data)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        self.inputs.validate()?;
        self.series.validate()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "wrote scenario");
        Ok(())
    }
}
