use crate::generator::Generator;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter, EnumString};

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
/// Emulators this frontend knows how to configure and launch
pub enum EmulatorId {
    Eduke32,
    Melonds,
    Odcommander,
}

#[derive(Default)]
/// Dispatch table from emulator identifier to its adapter
///
/// Populated once at shell startup, no dynamic lookup
pub struct GeneratorRegistry {
    generators: HashMap<EmulatorId, Box<dyn Generator + Send + Sync>, FxBuildHasher>,
}

impl GeneratorRegistry {
    pub fn register(
        &mut self,
        id: EmulatorId,
        generator: impl Generator + Send + Sync + 'static,
    ) {
        tracing::debug!("Registering generator for {}", id);
        self.generators.insert(id, Box::new(generator));
    }

    pub fn get(&self, id: EmulatorId) -> Option<&(dyn Generator + Send + Sync)> {
        self.generators.get(&id).map(Box::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmulatorId, &(dyn Generator + Send + Sync))> {
        self.generators.iter().map(|(id, g)| (*id, g.as_ref()))
    }
}
