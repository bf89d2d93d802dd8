//! Manifest parsing for `.seqmerge.toml` files

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::outcome::FaultPolicy;
use crate::{Error, Result};

/// `[merge]` section
///
/// Fields left out of a file stay `None`, so a later layer only overrides
/// what it actually sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSection {
    /// How non-conflict merge failures are reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_fault: Option<FaultPolicy>,

    /// Run the branch existence check before merging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_branches: Option<bool>,
}

impl MergeSection {
    /// Effective fault policy, [`FaultPolicy::Propagate`] when unset
    pub fn on_fault(&self) -> FaultPolicy {
        self.on_fault.unwrap_or_default()
    }

    /// Whether to check branches before merging, `true` when unset
    pub fn check_branches(&self) -> bool {
        self.check_branches.unwrap_or(true)
    }

    /// Apply every setting `other` defines.
    pub fn merge(&mut self, other: &MergeSection) {
        if let Some(on_fault) = other.on_fault {
            self.on_fault = Some(on_fault);
        }
        if let Some(check_branches) = other.check_branches {
            self.check_branches = Some(check_branches);
        }
    }
}

/// Configuration parsed from a single manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Merge settings
    #[serde(default)]
    pub merge: MergeSection,

    /// Named branch chains, each merged front to back
    #[serde(default)]
    pub chains: BTreeMap<String, Vec<String>>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use seqmerge_core::config::Manifest;
    /// use seqmerge_core::FaultPolicy;
    ///
    /// let manifest = Manifest::parse(r#"
    /// [merge]
    /// on_fault = "fold"
    ///
    /// [chains]
    /// release = ["main", "release/1.x"]
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.merge.on_fault(), FaultPolicy::Fold);
    /// assert_eq!(manifest.chain("release").unwrap(), ["main", "release/1.x"]);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Create a manifest with default values
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a named chain.
    pub fn chain(&self, name: &str) -> Result<&[String]> {
        self.chains
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::ChainNotFound {
                name: name.to_string(),
            })
    }

    /// Merge another manifest into this one
    ///
    /// Settings that `other` defines win, including ones set back to their
    /// default. Chains from `other` replace chains of the same name.
    pub fn merge(&mut self, other: &Manifest) {
        self.merge.merge(&other.merge);

        for (name, branches) in &other.chains {
            self.chains.insert(name.clone(), branches.clone());
        }
    }
}
