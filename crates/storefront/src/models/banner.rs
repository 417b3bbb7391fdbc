//! Promotional banner domain types.

use serde::{Deserialize, Serialize};

use baksho_core::{BannerId, BannerKind};

/// A promotional banner shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Generated unique id.
    pub id: BannerId,
    /// Headline.
    pub title: String,
    /// Supporting line under the headline.
    pub subtitle: String,
    /// Image to render behind the copy.
    pub image_url: String,
    /// Where the banner links to.
    pub link: String,
    /// Ad or weekly-sale placement.
    pub kind: BannerKind,
    /// Whether the rotating banner UI should show this entry.
    pub active: bool,
    /// Rotation ordering hint consumed by the banner UI.
    pub priority: u8,
}

/// Input for creating a banner. The id is generated and `active` starts
/// `true`.
#[derive(Debug, Clone)]
pub struct NewBanner {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub link: String,
    pub kind: BannerKind,
    pub priority: u8,
}

/// Partial banner edit; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct BannerUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub kind: Option<BannerKind>,
    pub priority: Option<u8>,
}
