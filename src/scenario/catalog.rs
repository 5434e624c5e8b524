use super::builtin;
use super::definition::Scenario;
use super::working::WorkingCopy;
use crate::error::ScenarioError;
use ahash::AHashMap;

/// A fixed, read-only set of scenario templates.
///
/// Templates are never mutated after construction. Per-session edits go
/// through a [`WorkingCopy`], so re-selecting a scenario always restores its
/// canonical layout.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
    index: AHashMap<String, usize>,
}

impl ScenarioCatalog {
    /// The four diagrams shipped with the crate, in presentation order.
    pub fn builtin() -> Self {
        let scenarios = vec![
            builtin::sequential(),
            builtin::hierarchical(),
            builtin::rail_hive(),
            builtin::financial_swarm(),
        ];
        let index = scenarios
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        Self { scenarios, index }
    }

    /// Builds a catalog from custom templates. Scenario ids must be unique.
    pub fn from_templates(scenarios: Vec<Scenario>) -> Result<Self, ScenarioError> {
        let mut index = AHashMap::with_capacity(scenarios.len());
        for (i, scenario) in scenarios.iter().enumerate() {
            if index.insert(scenario.id.clone(), i).is_some() {
                return Err(ScenarioError::ConversionError(format!(
                    "scenario id '{}' is used more than once",
                    scenario.id
                )));
            }
        }
        Ok(Self { scenarios, index })
    }

    pub fn get(&self, id: &str) -> Result<&Scenario, ScenarioError> {
        self.index
            .get(id)
            .map(|&i| &self.scenarios[i])
            .ok_or_else(|| ScenarioError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Scenario ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|s| s.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Clones a template into an editable working copy.
    pub fn working_copy(&self, id: &str) -> Result<WorkingCopy, ScenarioError> {
        self.get(id).map(WorkingCopy::from_template)
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
