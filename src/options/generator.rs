use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::structure::MAX_ATOMS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Generator", inline)]
#[serde(default)]
/// Parameters of the placeholder structure generator.
pub struct GeneratorOptions {
    /// Seed for charge assignment. The same seed and notation always give
    /// the same charges.
    #[schemars(title = "Seed")]
    pub seed: u64,
    /// Probability that an atom receives a nonzero charge.
    #[schemars(title = "Charge Probability", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub charge_probability: f64,
    /// Maximum number of atoms generated from one notation, capped at
    /// [`MAX_ATOMS`].
    #[schemars(skip)]
    pub max_atoms: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            charge_probability: 0.2,
            max_atoms: MAX_ATOMS,
        }
    }
}
