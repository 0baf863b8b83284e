//! Group-relative comparison tables
//!
//! The report is a fixed catalogue of named comparison groups. Within a
//! group, the first entry is the baseline every other entry is compared
//! against, pair by pair.

use crate::fmt::format_percent;
use crate::infra::FileSystem;
use crate::report::delta::delta_percent;
use crate::snapshot::SnapshotStore;
use crate::table::{Cell, MarkdownRenderer, Table, TableRenderer};

/// Token pairs every group is evaluated over
pub const PAIRS: &[&str] = &["USDC-WETH", "DAI-WETH", "USDT-WETH", "WETH-USDC"];

/// One row definition inside a comparison group
#[derive(Debug, Clone, Copy)]
pub struct GroupEntry {
    /// Human-readable row label
    pub label: &'static str,
    /// DEX/category label
    pub dex: &'static str,
    /// Snapshot name, resolved to `<name>_<pair>.snap`
    pub snapshot: &'static str,
}

/// A named sequence of entries sharing one baseline (the first entry)
#[derive(Debug, Clone, Copy)]
pub struct ComparisonGroup {
    /// Group name, shown as the table's leading header
    pub name: &'static str,
    /// Ordered entries; index 0 is the baseline
    pub entries: &'static [GroupEntry],
}

/// Rendering variant for group tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    /// Gas plus a percentage column against the group baseline; rows with a
    /// missing current snapshot are omitted
    Percentage,
    /// Gas only; missing snapshots render as `N/A`
    Plain,
}

macro_rules! entry {
    ($label:expr, $dex:expr, $snapshot:expr) => {
        GroupEntry {
            label: $label,
            dex: $dex,
            snapshot: $snapshot,
        }
    };
}

/// The full report catalogue
pub const CATALOGUE: &[ComparisonGroup] = &[
    ComparisonGroup {
        name: "VIP",
        entries: &[
            entry!("0x V4 VIP", "Uniswap V3", "zeroEx_uniswapV3VIP"),
            entry!("0x V4 Multiplex", "Uniswap V3", "zeroEx_uniswapV3VIP_multiplex1"),
            entry!("Settler VIP (warm)", "Uniswap V3", "settler_uniswapV3VIP"),
            entry!("Settler VIP (cold)", "Uniswap V3", "settler_uniswapV3VIP_cold"),
            entry!("AllowanceHolder VIP", "Uniswap V3", "allowanceHolder_uniswapV3VIP"),
            entry!("UniswapRouter V3", "Uniswap V3", "uniswapRouter_uniswapV3"),
        ],
    },
    ComparisonGroup {
        name: "Custody",
        entries: &[
            entry!("0x V4 TransformERC20", "Uniswap V3", "zeroEx_uniswapV3_transformERC20"),
            entry!("Settler", "Uniswap V3", "settler_uniswapV3"),
            entry!("AllowanceHolder", "Uniswap V3", "allowanceHolder_uniswapV3"),
        ],
    },
    ComparisonGroup {
        name: "MetaTransactions",
        entries: &[
            entry!("0x V4 Multiplex", "Uniswap V3", "zeroEx_metaTxn_uniswapV3"),
            entry!("Settler", "Uniswap V3", "settler_metaTxn_uniswapV3"),
        ],
    },
    ComparisonGroup {
        name: "RFQ",
        entries: &[
            entry!("0x V4", "0x V4", "zeroEx_otcOrder"),
            entry!("Settler", "Settler", "settler_rfq"),
            entry!("Settler", "0x V4", "settler_zeroExOtc"),
            entry!("AllowanceHolder", "Settler", "allowanceHolder_rfq"),
        ],
    },
    ComparisonGroup {
        name: "UniversalRouter",
        entries: &[
            entry!("UniversalRouter", "UniswapV2", "universalRouter_uniswapV2"),
            entry!("Settler", "UniswapV2", "settler_uniswapV2_toNative"),
            entry!("Settler", "UniswapV2", "settler_uniswapV2_fromNative"),
            entry!("UniversalRouter", "UniswapV3", "universalRouter_uniswapV3"),
            entry!("Settler", "UniswapV3", "settler_uniswapV3VIP_toNative"),
            entry!("Settler", "UniswapV3", "settler_uniswapV3_fromNative"),
            entry!("UniversalRouter", "UniswapV4", "universalRouter_uniswapV4"),
            entry!("Settler", "UniswapV4", "settler_uniswapV4VIP_toNative"),
            entry!("Settler", "UniswapV4", "settler_uniswapV4_fromNative"),
        ],
    },
    ComparisonGroup {
        name: "Curve",
        entries: &[
            entry!("0x V4", "Curve", "zeroEx_curveV2VIP"),
            entry!("Settler", "Curve", "settler_basic_curve"),
            entry!("Settler", "CurveV2 Tricrypto VIP", "settler_curveTricrypto"),
            entry!("Curve", "Curve", "curveV2Pool"),
            entry!("Curve Swap Router", "Curve", "curveV2Pool_swapRouter"),
        ],
    },
    ComparisonGroup {
        name: "DODO V1",
        entries: &[entry!("Settler", "DODO V1", "settler_dodoV1")],
    },
    ComparisonGroup {
        name: "Buy token fee",
        entries: &[
            entry!(
                "Settler - custody",
                "Uniswap V3",
                "settler_uniswapV3_buyToken_fee_single_custody"
            ),
            entry!("Settler", "RFQ", "settler_rfq_buyToken_fee"),
        ],
    },
    ComparisonGroup {
        name: "Sell token fee",
        entries: &[
            entry!("Settler", "Uniswap V3", "settler_uniswapV3_sellToken_fee_full_custody"),
            entry!("Settler", "RFQ", "settler_rfq_sellToken_fee"),
            entry!("Settler", "Curve", "settler_curveV2_fee"),
        ],
    },
    ComparisonGroup {
        name: "AllowanceHolder",
        entries: &[
            entry!("execute", "Uniswap V3 VIP", "allowanceHolder_uniswapV3VIP"),
            entry!(
                "Settler - external move then execute",
                "Uniswap V3",
                "settler_externalMoveExecute_uniswapV3"
            ),
            entry!("execute", "RFQ", "allowanceHolder_rfq"),
        ],
    },
    ComparisonGroup {
        name: "AllowanceHolder sell token fees",
        entries: &[
            entry!("no fee", "RFQ", "allowanceHolder_rfq"),
            entry!("proportional fee", "RFQ", "allowanceHolder_rfq_proportionalFee_sellToken"),
            entry!("fixed fee", "RFQ", "allowanceHolder_rfq_fixedFee_sellToken"),
        ],
    },
];

/// Render one group's table over the given pairs.
pub fn render_group<FS: FileSystem>(
    store: &SnapshotStore<FS>,
    group: &ComparisonGroup,
    pairs: &[&str],
    mode: GroupMode,
) -> String {
    let mut table = match mode {
        GroupMode::Percentage => Table::new([group.name, "DEX", "Pair", "Gas", "%"]),
        GroupMode::Plain => Table::new([group.name, "DEX", "Pair", "Gas"]),
    };

    for pair in pairs {
        let baseline = store.read(group.entries[0].snapshot, pair);
        for entry in group.entries {
            let value = store.read(entry.snapshot, pair);
            let display_pair = pair.replace('-', "/");

            match mode {
                GroupMode::Percentage => {
                    let Some(value) = value else { continue };
                    let percent = baseline
                        .and_then(|b| delta_percent(value, b))
                        .map(format_percent)
                        .unwrap_or_else(|| "N/A".to_string());
                    table.push_row([
                        Cell::Text(entry.label.to_string()),
                        Cell::Text(entry.dex.to_string()),
                        Cell::Text(display_pair),
                        Cell::Value(value),
                        Cell::Text(percent),
                    ]);
                }
                GroupMode::Plain => {
                    let gas = match value {
                        Some(v) => Cell::Value(v),
                        None => Cell::Text("N/A".to_string()),
                    };
                    table.push_row([
                        Cell::Text(entry.label.to_string()),
                        Cell::Text(entry.dex.to_string()),
                        Cell::Text(display_pair),
                        gas,
                    ]);
                }
            }
        }
        table.push_blank_row();
    }

    MarkdownRenderer.render(&table)
}

/// Render the full catalogue, tables separated by a blank line.
pub fn render_catalogue<FS: FileSystem>(store: &SnapshotStore<FS>, mode: GroupMode) -> String {
    CATALOGUE
        .iter()
        .map(|group| render_group(store, group, PAIRS, mode))
        .collect::<Vec<_>>()
        .join("\n\n")
}
