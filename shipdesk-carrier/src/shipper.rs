use serde::{Deserialize, Serialize};

/// Sender block printed on Yamato manifests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct YamatoShipper {
    pub phone: String,
    pub postal_code: String,
    pub address: String,
    pub building: String,
    pub name: String,
    /// 品名 printed on every label.
    pub item_category: String,
    pub billing_code: String,
    pub web_collect_flag: String,
}

impl Default for YamatoShipper {
    fn default() -> Self {
        Self {
            phone: "06-6352-0156".to_string(),
            postal_code: "5300044".to_string(),
            address: "大阪府大阪市北区東天満1-10-20".to_string(),
            building: "ECC本社ビル4F".to_string(),
            name: "株式会社ECC".to_string(),
            item_category: "化粧品".to_string(),
            billing_code: "0663520156".to_string(),
            web_collect_flag: "01".to_string(),
        }
    }
}

/// Sender block printed on Seino manifests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeinoShipper {
    pub phone: String,
    pub name: String,
    pub address: String,
    pub building: String,
    /// Prepended to the order number to build the shipper reference.
    pub reference_prefix: String,
}

impl Default for SeinoShipper {
    fn default() -> Self {
        Self {
            phone: "0663520156".to_string(),
            name: "株式会社 ECC".to_string(),
            address: "大阪府 大阪市北区 東天満 1-10-20".to_string(),
            building: "ECC本社ビル4F".to_string(),
            reference_prefix: "ECC".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShipperProfile {
    pub yamato: YamatoShipper,
    pub seino: SeinoShipper,
}
