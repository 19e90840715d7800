//! Text report for a calculated network.

use crate::models::{format_quad, NetworkInfo, Quad};

/// Render the fixed-order report shown to users.
pub fn render_report(info: &NetworkInfo) -> String {
    let host = |quad: &Option<Quad>| {
        quad.as_ref()
            .map(format_quad)
            .unwrap_or_else(|| "none".to_string())
    };

    format!(
        "Address: {address}/{prefix}\n\
         Netmask: {netmask}\n\
         Wildcard: {wildcard}\n\
         Network: {network}\n\
         Broadcast: {broadcast}\n\
         Host Min Address: {host_min}\n\
         Host Max Address: {host_max}\n\
         Hosts quantity: {hosts}",
        address = format_quad(&info.address),
        prefix = info.netmask.prefix_len,
        netmask = format_quad(&info.netmask.dotted),
        wildcard = format_quad(&info.wildcard),
        network = format_quad(&info.network),
        broadcast = format_quad(&info.broadcast),
        host_min = host(&info.host_min),
        host_max = host(&info.host_max),
        hosts = info.hosts_quantity,
    )
}
