// ── Row projection ──
//
// Flattens admin-service messages into fixed-arity string rows for table
// rendering. Every projector is pure, preserves source order, and fills
// missing optional sub-fields with `UNKNOWN` instead of dropping the row.

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq};

use squeakdash_api::models::{
    LightningPeer, LndInfo, SqueakDisplayEntry, SqueakPeer, SqueakProfile, WalletBalance,
};

use crate::address::{ParsedAddress, parse_address};

/// Placeholder rendered for any absent or empty optional field.
pub const UNKNOWN: &str = "unknown";

/// Rendered in place of the content of a squeak that is still locked.
pub const LOCKED: &str = "[locked]";

// ── Column headers ───────────────────────────────────────────────────

pub const PROFILE_COLUMNS: [&str; 4] = ["Name", "Address", "Following", "Sharing"];
pub const SQUEAK_COLUMNS: [&str; 4] = ["Hash", "Author", "Content", "Block"];
pub const PEER_COLUMNS: [&str; 6] = ["ID", "Name", "Host", "Port", "Uploading", "Downloading"];
pub const LIGHTNING_PEER_COLUMNS: [&str; 4] = ["Pubkey", "Host", "Port", "Direction"];
pub const FIELD_COLUMNS: [&str; 2] = ["Field", "Value"];

// ── Table ────────────────────────────────────────────────────────────

/// One table row: exactly one string per column.
pub type DisplayRow<const N: usize> = [String; N];

/// Header plus rows. The row arity is the header arity by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<const N: usize> {
    header: [&'static str; N],
    rows: Vec<DisplayRow<N>>,
}

impl<const N: usize> Table<N> {
    pub fn new(header: [&'static str; N], rows: Vec<DisplayRow<N>>) -> Self {
        Self { header, rows }
    }

    pub fn empty(header: [&'static str; N]) -> Self {
        Self::new(header, Vec::new())
    }

    pub fn header(&self) -> &[&'static str; N] {
        &self.header
    }

    pub fn rows(&self) -> &[DisplayRow<N>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&DisplayRow<N>> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn arity(&self) -> usize {
        N
    }
}

/// Serializes as a list of `{ column: value }` objects, in row order.
impl<const N: usize> Serialize for Table<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Row<'a, const N: usize> {
            header: &'a [&'static str; N],
            cells: &'a DisplayRow<N>,
        }

        impl<const N: usize> Serialize for Row<'_, N> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(N))?;
                for (column, cell) in self.header.iter().zip(self.cells.iter()) {
                    map.serialize_entry(column, cell)?;
                }
                map.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for cells in &self.rows {
            seq.serialize_element(&Row {
                header: &self.header,
                cells,
            })?;
        }
        seq.end()
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Render an optional string, substituting `UNKNOWN` when absent or empty.
pub fn or_unknown(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_owned()
}

// ── Profiles ─────────────────────────────────────────────────────────

/// `[name, address, following, sharing]` per profile, flags as `"true"`/`"false"`.
pub fn profile_rows(profiles: &[SqueakProfile]) -> Table<4> {
    let rows = profiles
        .iter()
        .map(|p| {
            [
                or_unknown(p.profile_name.as_deref()),
                or_unknown(p.address.as_deref()),
                p.following.to_string(),
                p.sharing.to_string(),
            ]
        })
        .collect();
    Table::new(PROFILE_COLUMNS, rows)
}

// ── Squeak displays ──────────────────────────────────────────────────

/// `[hash, author, content, block height]` per squeak.
///
/// Unknown authors fall back to their address; locked squeaks render `LOCKED`.
pub fn squeak_rows(entries: &[SqueakDisplayEntry]) -> Table<4> {
    let rows = entries
        .iter()
        .map(|e| {
            let author = e
                .author_name
                .as_deref()
                .filter(|n| e.is_author_known && !n.is_empty())
                .or(e.author_address.as_deref());
            let content = if e.is_unlocked {
                or_unknown(e.content_str.as_deref())
            } else {
                LOCKED.to_owned()
            };
            [
                or_unknown(Some(e.squeak_hash.as_str())),
                or_unknown(author),
                content,
                e.block_height.to_string(),
            ]
        })
        .collect();
    Table::new(SQUEAK_COLUMNS, rows)
}

// ── Squeak peers ─────────────────────────────────────────────────────

/// `[id, name, host, port, uploading, downloading]` per squeak peer.
pub fn peer_rows(peers: &[SqueakPeer]) -> Table<6> {
    let rows = peers
        .iter()
        .map(|p| {
            [
                p.peer_id.to_string(),
                or_unknown(p.peer_name.as_deref()),
                or_unknown(p.host.as_deref()),
                p.port.map_or_else(|| UNKNOWN.to_owned(), |port| port.to_string()),
                p.uploading.to_string(),
                p.downloading.to_string(),
            ]
        })
        .collect();
    Table::new(PEER_COLUMNS, rows)
}

// ── Lightning peers ──────────────────────────────────────────────────

/// Navigation-relevant fields of one Lightning peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerTarget<'a> {
    pub pubkey: Option<&'a str>,
    pub address: ParsedAddress<'a>,
}

/// Derive pubkey and host/port from a Lightning peer.
pub fn peer_target(peer: &LightningPeer) -> PeerTarget<'_> {
    PeerTarget {
        pubkey: Some(peer.pub_key.as_str()).filter(|k| !k.is_empty()),
        address: parse_address(peer.address.as_deref()),
    }
}

/// `[pubkey, host, port, direction]` per Lightning peer.
pub fn lightning_peer_rows(peers: &[LightningPeer]) -> Table<4> {
    let rows = peers
        .iter()
        .map(|peer| {
            let target = peer_target(peer);
            [
                or_unknown(target.pubkey),
                or_unknown(target.address.host),
                or_unknown(target.address.port),
                if peer.inbound { "inbound" } else { "outbound" }.to_owned(),
            ]
        })
        .collect();
    Table::new(LIGHTNING_PEER_COLUMNS, rows)
}

// ── Node summaries ───────────────────────────────────────────────────

/// Key/value rows describing the paired Lightning node.
pub fn node_info_rows(info: &LndInfo) -> Table<2> {
    let field = |name: &str, value: String| [name.to_owned(), value];
    Table::new(
        FIELD_COLUMNS,
        vec![
            field("Alias", or_unknown(Some(info.alias.as_str()))),
            field("Pubkey", or_unknown(Some(info.identity_pubkey.as_str()))),
            field("Version", or_unknown(Some(info.version.as_str()))),
            field("Block height", info.block_height.to_string()),
            field("Synced to chain", info.synced_to_chain.to_string()),
            field("Peers", info.num_peers.to_string()),
            field("Active channels", info.num_active_channels.to_string()),
            field("Pending channels", info.num_pending_channels.to_string()),
        ],
    )
}

/// Key/value rows for the on-chain wallet balance, in satoshis.
pub fn wallet_rows(balance: &WalletBalance) -> Table<2> {
    let field = |name: &str, sats: i64| [name.to_owned(), format!("{sats} sat")];
    Table::new(
        FIELD_COLUMNS,
        vec![
            field("Total", balance.total_balance),
            field("Confirmed", balance.confirmed_balance),
            field("Unconfirmed", balance.unconfirmed_balance),
        ],
    )
}
