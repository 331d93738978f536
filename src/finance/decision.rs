//! Binary investment recommendation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which option the figures favour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Smart grid wins on both NPV and ROI.
    SmartGridPreferred,
    /// Any other outcome, including ties and split results.
    NewPlantPreferred,
}

impl Decision {
    /// Picks the smart grid only when it is strictly better on NPV *and* ROI.
    ///
    /// NaN on either side compares false and therefore favours the plant.
    pub fn select(npv_plant: f64, roi_plant: f64, npv_smart: f64, roi_smart: f64) -> Self {
        if npv_smart > npv_plant && roi_smart > roi_plant {
            Self::SmartGridPreferred
        } else {
            Self::NewPlantPreferred
        }
    }

    /// Whether the smart grid is the recommended option.
    pub fn is_smart_grid(self) -> bool {
        self == Self::SmartGridPreferred
    }

    /// Fixed recommendation text shown to users and sent to the report
    /// collaborator.
    pub fn text(self) -> &'static str {
        match self {
            Self::SmartGridPreferred => {
                "Upgrade to a smart grid is the better choice (higher ROI and NPV)."
            }
            Self::NewPlantPreferred => {
                "Building a new plant is financially preferable with current inputs."
            }
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
