use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Visual style used for the whole molecule.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Element-sized spheres joined by thin sticks.
    #[default]
    BallAndStick,
    /// Enlarged spheres that mostly hide the bonds.
    SpaceFilling,
    /// Tiny atom markers and hairline bonds.
    Wireframe,
}

impl DisplayMode {
    /// Every mode, in cycling order.
    pub const ALL: [DisplayMode; 3] = [
        DisplayMode::BallAndStick,
        DisplayMode::SpaceFilling,
        DisplayMode::Wireframe,
    ];

    /// The mode after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::BallAndStick => Self::SpaceFilling,
            Self::SpaceFilling => Self::Wireframe,
            Self::Wireframe => Self::BallAndStick,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BallAndStick => "Ball and Stick",
            Self::SpaceFilling => "Space Filling",
            Self::Wireframe => "Wireframe",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display style and overlay toggles.
pub struct DisplayOptions {
    /// Molecule rendering style.
    #[schemars(title = "Display Mode")]
    pub display_mode: DisplayMode,
    /// Whether labels show a charge sign and the info panel a charge.
    #[schemars(title = "Show Charges")]
    pub show_charges: bool,
    /// Whether each atom carries an element label.
    #[schemars(title = "Show Labels")]
    pub show_labels: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::BallAndStick,
            show_charges: true,
            show_labels: true,
        }
    }
}
