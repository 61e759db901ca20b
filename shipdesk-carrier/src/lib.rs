pub mod column;
pub mod context;
pub mod customers;
pub mod derived;
pub mod fields;
pub mod profile;
pub mod seino;
pub mod shipper;
pub mod yamato;

use serde::{Deserialize, Serialize};
use shipdesk_core::CoreError;
use shipdesk_shared::NormalizedOrder;
use std::str::FromStr;

pub use column::{ColumnSpec, ColumnValue};
pub use context::{RowContext, ShipmentType};
pub use fields::{CustomerField, FieldSource, OrderField};
pub use profile::{CarrierProfile, ProfileError};
pub use shipper::{SeinoShipper, ShipperProfile, YamatoShipper};

/// Shipping carriers with a manifest profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CarrierKind {
    Yamato,
    Seino,
}

impl CarrierKind {
    pub fn name(self) -> &'static str {
        match self {
            CarrierKind::Yamato => yamato::PROFILE_NAME,
            CarrierKind::Seino => seino::PROFILE_NAME,
        }
    }

    /// Build the manifest profile for this carrier, stamped with `shipper`.
    pub fn profile(
        self,
        shipper: &ShipperProfile,
    ) -> Result<CarrierProfile<NormalizedOrder>, ProfileError> {
        match self {
            CarrierKind::Yamato => yamato::profile(&shipper.yamato),
            CarrierKind::Seino => seino::profile(&shipper.seino),
        }
    }
}

impl FromStr for CarrierKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yamato" => Ok(CarrierKind::Yamato),
            "seino" => Ok(CarrierKind::Seino),
            other => Err(CoreError::InvalidInput(format!("Unknown carrier: {other}"))),
        }
    }
}
