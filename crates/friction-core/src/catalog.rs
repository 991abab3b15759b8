//! Static presentational catalog for the mock shopping domain.
//!
//! The client never mutates or queries this data beyond reading fields;
//! it exists so the dashboard and conversation views have something to
//! show. Shipped as preset functions rather than loaded content.

use serde::{Deserialize, Serialize};

/// A product the user is being talked out of buying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name of the product
    pub name: String,
    /// Display price, already formatted (e.g. "$399")
    pub price: String,
    /// Marketing-style product description
    pub description: String,
    /// Image URL for the product card
    pub image: String,
}

/// A purchase the user decided against, shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelledPurchase {
    /// Position in the dashboard list (stable, 1-based)
    pub id: u32,
    /// Display name of the product or subscription
    pub name: String,
    /// Display price, already formatted
    pub price: String,
    /// Why the purchase was cancelled
    pub reason: String,
    /// Image URL for the card
    pub image: String,
    /// Whether the image is a logo (rendered without cropping)
    #[serde(default)]
    pub is_logo: bool,
}

/// Duration of the longest argument, for the stats tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDuration {
    pub hours: u32,
    pub minutes: u32,
}

/// Aggregate numbers shown on the signed-in dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total dollars saved across cancelled purchases
    pub total_saved: u32,
    /// Longest single argument with the assistant
    pub longest_argument: ArgumentDuration,
    /// The cancellation reason that comes up most
    pub strongest_reason: String,
}

/// Returns the product a new conversation argues about.
pub fn featured_product() -> Product {
    Product {
        name: "Apple Watch Series 9".to_string(),
        price: "$399".to_string(),
        description: "The most advanced Apple Watch yet, featuring a brighter display, faster S9 SiP chip, and new Double Tap gesture.".to_string(),
        image: "https://www.apple.com/newsroom/images/2023/09/apple-introduces-the-advanced-new-apple-watch-series-9/article/Apple-Watch-S9-pink-aluminum-Sport-Band-pink-230912_inline.jpg.large_2x.jpg".to_string(),
    }
}

/// Returns the cancelled purchases shown on the dashboard.
pub fn cancelled_purchases() -> Vec<CancelledPurchase> {
    vec![
        CancelledPurchase {
            id: 1,
            name: "Apple Watch Series 9".to_string(),
            price: "$399".to_string(),
            reason: "Not Needed".to_string(),
            image: "https://www.apple.com/newsroom/images/2023/09/apple-introduces-the-advanced-new-apple-watch-series-9/article/Apple-Watch-S9-pink-aluminum-Sport-Band-pink-230912_inline.jpg.large_2x.jpg".to_string(),
            is_logo: false,
        },
        CancelledPurchase {
            id: 2,
            name: "Sony WH-1000XM5".to_string(),
            price: "$399".to_string(),
            reason: "Too Expensive".to_string(),
            image: "https://images.topgear.com.ph/topgear/images/2022/12/31/sony-wh-1000xm5-03-1672468069.jpg".to_string(),
            is_logo: false,
        },
        CancelledPurchase {
            id: 3,
            name: "Netflix".to_string(),
            price: "$15.99/mo".to_string(),
            reason: "Too Expensive".to_string(),
            image: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/08/Netflix_2015_logo.svg/320px-Netflix_2015_logo.svg.png".to_string(),
            is_logo: true,
        },
        CancelledPurchase {
            id: 4,
            name: "Logitech G Pro X".to_string(),
            price: "$149".to_string(),
            reason: "Impulse Buy".to_string(),
            image: "https://www.gamespot.com/a/uploads/original/1574/15747411/4142368-logitechgprox2wirelessgamingheadsetreview.jpg".to_string(),
            is_logo: false,
        },
        CancelledPurchase {
            id: 5,
            name: "Spotify Premium".to_string(),
            price: "$9.99/mo".to_string(),
            reason: "Redundant service".to_string(),
            image: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/19/Spotify_logo_without_text.svg/512px-Spotify_logo_without_text.svg.png".to_string(),
            is_logo: true,
        },
    ]
}

/// Returns the aggregate stats for the signed-in dashboard.
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_saved: 1228,
        longest_argument: ArgumentDuration {
            hours: 2,
            minutes: 15,
        },
        strongest_reason: "Impulse Buy".to_string(),
    }
}
