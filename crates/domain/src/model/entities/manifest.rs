use gostats_shared_kernel::ModulePath;
use serde::{Deserialize, Serialize};

/// One `require` entry of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub path: String,
    pub version: String,
    pub indirect: bool,
}

/// What the manifest says about the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFacts {
    pub module: ModulePath,
    pub go_version: Option<String>,
    pub requirements: Vec<Requirement>,
}

impl ManifestFacts {
    pub fn direct_count(&self) -> usize {
        self.requirements.iter().filter(|r| !r.indirect).count()
    }

    pub fn indirect_count(&self) -> usize {
        self.requirements.len() - self.direct_count()
    }

    pub fn all_count(&self) -> usize {
        self.requirements.len()
    }
}
