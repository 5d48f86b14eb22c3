//! Static tables: palette, token metadata, sector categories and network benchmarks.

use std::collections::HashMap;

use lazy_static::lazy_static;

pub mod palette {
    pub const TEXT_SECONDARY: &str = "#94a3b8";
    pub const TEXT_MUTED: &str = "#64748b";
    pub const ACCENT: &str = "#06b6d4";
    pub const COMPUTE: &str = "#8b5cf6";
    pub const STORAGE: &str = "#10b981";
    pub const WIRELESS: &str = "#f59e0b";
    pub const SENSORS: &str = "#ec4899";
    pub const ENERGY: &str = "#22c55e";
    pub const SERVICES: &str = "#6366f1";
    pub const UP: &str = "#22c55e";
    pub const DOWN: &str = "#ef4444";
}

pub const DASHBOARD_TITLE: &str = "DePIN Sector Intelligence";
pub const DASHBOARD_SUBTITLE: &str = "Decentralized Physical Infrastructure Analytics";
pub const FOOTER: &str = "Live data: CoinGecko | Static metrics last updated: Jan 7, 2026";

/// Category label and color used when an id is missing from [`TOKEN_METADATA`].
pub const DEFAULT_TOKEN_CATEGORY: &str = "Other";
pub const DEFAULT_TOKEN_COLOR: &str = palette::ACCENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMetadata {
    pub category: &'static str,
    pub color: &'static str,
}

lazy_static! {
    pub static ref TOKEN_METADATA: HashMap<&'static str, TokenMetadata> = {
        let entries = [
            ("chainlink", "Data", "#375BD2"),
            ("filecoin", "Storage", palette::STORAGE),
            ("render-token", "Compute", palette::COMPUTE),
            ("bittensor", "AI/ML", palette::SERVICES),
            ("internet-computer", "Compute", palette::COMPUTE),
            ("the-graph", "Data", "#6747ED"),
            ("helium", "Wireless", palette::WIRELESS),
            ("arweave", "Storage", palette::STORAGE),
            ("akash-network", "Compute", palette::COMPUTE),
            ("iotex", "IoT", "#00D4D5"),
            ("io-net", "Compute", palette::ACCENT),
            ("storj", "Storage", palette::STORAGE),
        ];

        entries
            .into_iter()
            .map(|(id, category, color)| (id, TokenMetadata { category, color }))
            .collect()
    };
}

/// Metadata for `id`, or the "Other" fallback.
pub fn token_metadata(id: &str) -> TokenMetadata {
    TOKEN_METADATA.get(id).copied().unwrap_or(TokenMetadata {
        category: DEFAULT_TOKEN_CATEGORY,
        color: DEFAULT_TOKEN_COLOR,
    })
}

#[derive(Debug, Clone, Copy)]
pub struct SectorCategory {
    pub name: &'static str,
    pub color: &'static str,
}

pub const SECTOR_CATEGORIES: [SectorCategory; 5] = [
    SectorCategory { name: "Compute", color: palette::COMPUTE },
    SectorCategory { name: "Bandwidth", color: palette::WIRELESS },
    SectorCategory { name: "Data", color: palette::SERVICES },
    SectorCategory { name: "Energy", color: palette::ENERGY },
    SectorCategory { name: "Sensors", color: palette::SENSORS },
];

pub const SECTOR_CATEGORIES_SOURCE: &str = "DePIN Pulse";

/// A hardcoded figure with the place it was taken from.
#[derive(Debug, Clone, Copy)]
pub struct StaticMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub source: &'static str,
}

pub const SECTOR_METRICS: [StaticMetric; 3] = [
    StaticMetric { label: "Active Devices", value: "42.7M", source: "DePINscan" },
    StaticMetric { label: "Sector ARR", value: "$47.12M", source: "DePIN Pulse" },
    StaticMetric { label: "Total Projects", value: "2,354", source: "DePIN Pulse" },
];

#[derive(Debug, Clone, Copy)]
pub struct NetworkMetric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NetworkBenchmark {
    pub name: &'static str,
    pub metrics: [NetworkMetric; 3],
    pub source: &'static str,
    pub color: &'static str,
}

const fn metric(label: &'static str, value: &'static str) -> NetworkMetric {
    NetworkMetric { label, value }
}

pub const NETWORKS: [NetworkBenchmark; 5] = [
    NetworkBenchmark {
        name: "Akash Network",
        metrics: [
            metric("Active Providers", "71"),
            metric("GPU Utilization", "50%"),
            metric("Q3 Revenue", "$820K"),
        ],
        source: "Messari Q3 2025",
        color: palette::COMPUTE,
    },
    NetworkBenchmark {
        name: "io.net",
        metrics: [
            metric("Connected GPUs", "100K+"),
            metric("Compute Hours", "1M+"),
            metric("Countries", "130+"),
        ],
        source: "io.net Explorer",
        color: palette::ACCENT,
    },
    NetworkBenchmark {
        name: "Helium",
        metrics: [
            metric("Total Hotspots", "962K"),
            metric("Cities", "81K"),
            metric("Countries", "191"),
        ],
        source: "Helium Explorer",
        color: palette::WIRELESS,
    },
    NetworkBenchmark {
        name: "Filecoin",
        metrics: [
            metric("Raw Capacity", "7.6 EiB"),
            metric("Data Stored", "2.1 EiB"),
            metric("Utilization", "32%"),
        ],
        source: "Filscan",
        color: palette::STORAGE,
    },
    NetworkBenchmark {
        name: "Render Network",
        metrics: [
            metric("Frames/Month", "1.49M"),
            metric("Fee Burned", "$208K"),
            metric("YoY Growth", "+17.7%"),
        ],
        source: "Render Foundation",
        color: palette::SENSORS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::aggregator::TRACKED_TOKEN_IDS;

    #[test]
    fn test_every_tracked_token_has_metadata() {
        for id in TRACKED_TOKEN_IDS {
            assert!(TOKEN_METADATA.contains_key(id), "missing metadata for {}", id);
        }
        assert_eq!(TOKEN_METADATA.len(), TRACKED_TOKEN_IDS.len());
    }

    #[test]
    fn test_unknown_token_falls_back_to_other() {
        let meta = token_metadata("bitcoin");
        assert_eq!(meta.category, "Other");
        assert_eq!(meta.color, palette::ACCENT);
    }

    #[test]
    fn test_known_token_metadata() {
        let meta = token_metadata("helium");
        assert_eq!(meta.category, "Wireless");
        assert_eq!(meta.color, palette::WIRELESS);
    }
}
