// ── Navigation targets ──
//
// Detail-page paths of the form `/app/<entity-kind>/<field>[/<field>...]`.
// Every segment is non-empty: absent fields render as `UNKNOWN`.

use crate::projection::{PeerTarget, UNKNOWN};

fn segment(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(UNKNOWN)
}

/// `/app/lightningnode/<pubkey>/<host>/<port>`
pub fn lightning_node_path(target: &PeerTarget<'_>) -> String {
    format!(
        "/app/lightningnode/{}/{}/{}",
        segment(target.pubkey),
        segment(target.address.host),
        segment(target.address.port),
    )
}

/// `/app/squeakaddress/<address>`
pub fn squeak_address_path(address: Option<&str>) -> String {
    format!("/app/squeakaddress/{}", segment(address))
}

/// `/app/peer/<peer_id>`
pub fn peer_path(peer_id: Option<&str>) -> String {
    format!("/app/peer/{}", segment(peer_id))
}

/// `/app/squeak/<hash>`
pub fn squeak_path(hash: Option<&str>) -> String {
    format!("/app/squeak/{}", segment(hash))
}
