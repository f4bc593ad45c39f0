use serde::{Deserialize, Serialize};

/// Which of the seller's price lists is published to the network
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceList {
    #[default]
    Retail,
    Wholesale,
}

/// Participation in the spare part network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkSettings {
    pub is_active: bool,
    pub price_list: PriceList,
    pub share_quantity: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            is_active: false,
            price_list: PriceList::Retail,
            share_quantity: true,
        }
    }
}
