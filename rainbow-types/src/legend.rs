//! Static band legend, ordered from the lowest band to the highest.

use serde::{Deserialize, Serialize};

use crate::config::BOUNDARY_COUNT;

/// One of the seven bands between consecutive boundary curves.
///
/// Serializes as its [`key`](Band::key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    /// Between boundaries 0 and 1.
    #[serde(rename = "fire_sale")]
    FireSale,
    /// Between boundaries 1 and 2.
    #[serde(rename = "buy")]
    Buy,
    /// Between boundaries 2 and 3.
    #[serde(rename = "accumulate")]
    Accumulate,
    /// Between boundaries 3 and 4.
    #[serde(rename = "cheap")]
    StillCheap,
    /// Between boundaries 4 and 5.
    #[serde(rename = "bubble?")]
    Bubble,
    /// Between boundaries 5 and 6.
    #[serde(rename = "sell")]
    Sell,
    /// Between boundaries 6 and 7.
    #[serde(rename = "max_bubble")]
    MaxBubble,
}

impl Band {
    /// All bands in multiplier order.
    pub const ALL: [Self; BOUNDARY_COUNT - 1] = [
        Self::FireSale,
        Self::Buy,
        Self::Accumulate,
        Self::StillCheap,
        Self::Bubble,
        Self::Sell,
        Self::MaxBubble,
    ];

    /// Position of the band; band `k` lies between boundaries `k` and `k + 1`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Band at position `idx`, if any.
    #[must_use]
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Stable machine key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FireSale => "fire_sale",
            Self::Buy => "buy",
            Self::Accumulate => "accumulate",
            Self::StillCheap => "cheap",
            Self::Bubble => "bubble?",
            Self::Sell => "sell",
            Self::MaxBubble => "max_bubble",
        }
    }

    /// Human-readable legend label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FireSale => "Fire sale!",
            Self::Buy => "BUY!",
            Self::Accumulate => "Accumulate",
            Self::StillCheap => "Still cheap",
            Self::Bubble => "Is this a bubble?",
            Self::Sell => "Sell. Seriously, sell!",
            Self::MaxBubble => "Maximum bubble territory",
        }
    }

    /// Hex fill color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::FireSale => "#4575b4",
            Self::Buy => "#91bfdb",
            Self::Accumulate => "#a6d96a",
            Self::StillCheap => "#ffffbf",
            Self::Bubble => "#fee08b",
            Self::Sell => "#f46d43",
            Self::MaxBubble => "#d73027",
        }
    }

    /// Classify a price against one row of ordered boundaries.
    ///
    /// Prices below the lowest boundary map to `FireSale` and prices at or above
    /// the highest boundary map to `MaxBubble`.
    #[must_use]
    pub fn classify(price: f64, boundaries: &[f64; BOUNDARY_COUNT]) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|band| price < boundaries[band.index() + 1])
            .unwrap_or(Self::MaxBubble)
    }
}

impl core::fmt::Display for Band {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
