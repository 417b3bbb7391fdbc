//! Status and classification enums for catalog, orders, and banners.
//!
//! Serialized forms match the persisted snapshot schema: kebab-case for
//! statuses and categories, uppercase two-letter codes for locales.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Processing,
    InTransit,
    Shipped,
    Delivered,
    Cancelled,
    Pending,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Processing => "processing",
            Self::InTransit => "in-transit",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Pending => "pending",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(Self::Processing),
            "in-transit" => Ok(Self::InTransit),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            "pending" => Ok(Self::Pending),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Grocery catalog category.
///
/// Category filtering in product listings is an exact match on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    Bakery,
    MeatFish,
    Beverages,
    Snacks,
    Pantry,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 8] = [
        Self::Fruits,
        Self::Vegetables,
        Self::Dairy,
        Self::Bakery,
        Self::MeatFish,
        Self::Beverages,
        Self::Snacks,
        Self::Pantry,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Fruits => "fruits",
            Self::Vegetables => "vegetables",
            Self::Dairy => "dairy",
            Self::Bakery => "bakery",
            Self::MeatFish => "meat-fish",
            Self::Beverages => "beverages",
            Self::Snacks => "snacks",
            Self::Pantry => "pantry",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fruits" => Ok(Self::Fruits),
            "vegetables" => Ok(Self::Vegetables),
            "dairy" => Ok(Self::Dairy),
            "bakery" => Ok(Self::Bakery),
            "meat-fish" => Ok(Self::MeatFish),
            "beverages" => Ok(Self::Beverages),
            "snacks" => Ok(Self::Snacks),
            "pantry" => Ok(Self::Pantry),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Product listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Lowest price first.
    PriceLow,
    /// Highest price first.
    PriceHigh,
    /// Alphabetical by name.
    NameAz,
    /// Most recently added first (descending id).
    #[default]
    Newest,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "name-az" => Ok(Self::NameAz),
            "newest" => Ok(Self::Newest),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Promotional banner kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerKind {
    Ad,
    WeeklySale,
}

impl std::fmt::Display for BannerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ad => write!(f, "ad"),
            Self::WeeklySale => write!(f, "weekly-sale"),
        }
    }
}

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Bn,
    De,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "EN"),
            Self::Bn => write!(f, "BN"),
            Self::De => write!(f, "DE"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EN" => Ok(Self::En),
            "BN" => Ok(Self::Bn),
            "DE" => Ok(Self::De),
            _ => Err(format!("invalid language: {s}")),
        }
    }
}

/// Address kind for a user's saved addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Work => write!(f, "work"),
            Self::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InTransit).unwrap(),
            "\"in-transit\""
        );
        let status: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
    }

    #[test]
    fn test_order_status_display_roundtrips() {
        for status in [
            OrderStatus::Processing,
            OrderStatus::InTransit,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Pending,
        ] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_category_display_roundtrips() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_sort_key_default_is_newest() {
        assert_eq!(SortKey::default(), SortKey::Newest);
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert!("oldest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_language_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Language::Bn).unwrap(), "\"BN\"");
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
    }

    #[test]
    fn test_banner_kind_serde() {
        assert_eq!(
            serde_json::to_string(&BannerKind::WeeklySale).unwrap(),
            "\"weekly-sale\""
        );
    }
}
