//! Network calculation from an address and a netmask.

use super::mask::{Mask, MAX_LENGTH};
use super::quad::{format_quad, parse_quad, Quad};
use crate::error::CalcError;

/// Everything derived from one address/mask pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub address: Quad,
    pub netmask: Mask,
    pub wildcard: Quad,
    pub network: Quad,
    pub broadcast: Quad,
    /// First usable host, `None` for /31 and /32.
    pub host_min: Option<Quad>,
    /// Last usable host, `None` for /31 and /32.
    pub host_max: Option<Quad>,
    pub hosts_quantity: u32,
}

/// Calculate the network of a dotted address and a dotted netmask.
///
/// # Examples
/// ```
/// use netcalc_bot::models::{calculate, format_quad};
/// let info = calculate("192.168.1.10", "255.255.255.0").unwrap();
/// assert_eq!(format_quad(&info.broadcast), "192.168.1.255");
/// assert_eq!(info.hosts_quantity, 254);
/// ```
pub fn calculate(address: &str, netmask: &str) -> Result<NetworkInfo, CalcError> {
    let address = parse_quad(address)?;
    let netmask = Mask::from_dotted(parse_quad(netmask)?);
    calculate_with_mask(address, netmask)
}

/// Calculate the network of an already parsed address and mask.
///
/// Masks with non-contiguous bits are rejected.
pub fn calculate_with_mask(address: Quad, netmask: Mask) -> Result<NetworkInfo, CalcError> {
    if !netmask.is_contiguous() {
        return Err(CalcError::NonContiguousMask(netmask.to_string()));
    }

    let wildcard = netmask.wildcard();
    let mut network: Quad = [0; 4];
    let mut broadcast: Quad = [0; 4];
    for i in 0..network.len() {
        network[i] = address[i] & netmask.dotted[i];
        // network and wildcard bits never overlap, so this equals network + wildcard
        broadcast[i] = network[i] | wildcard[i];
    }

    let (host_min, host_max) = if has_host_range(netmask.prefix_len) {
        let mut host_min = network;
        host_min[3] += 1;
        let mut host_max = broadcast;
        host_max[3] -= 1;
        (Some(host_min), Some(host_max))
    } else {
        (None, None)
    };

    let info = NetworkInfo {
        address,
        netmask,
        wildcard,
        network,
        broadcast,
        host_min,
        host_max,
        hosts_quantity: hosts_quantity(netmask.prefix_len),
    };
    log::debug!(
        "calculated {}/{} -> network={} broadcast={} hosts={}",
        format_quad(&info.address),
        info.netmask.prefix_len,
        format_quad(&info.network),
        format_quad(&info.broadcast),
        info.hosts_quantity
    );
    Ok(info)
}

/// Usable hosts for a prefix length: 2^(32 - len) - 2, or 0 for /31 and /32.
pub fn hosts_quantity(prefix_len: u8) -> u32 {
    if has_host_range(prefix_len) {
        (u32::MAX >> prefix_len) - 1
    } else {
        0
    }
}

fn has_host_range(prefix_len: u8) -> bool {
    prefix_len < MAX_LENGTH - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_class_c() {
        let info = calculate("192.168.1.10", "255.255.255.0").unwrap();
        assert_eq!(info.address, [192, 168, 1, 10]);
        assert_eq!(info.netmask.prefix_len, 24);
        assert_eq!(info.netmask.dotted, [255, 255, 255, 0]);
        assert_eq!(info.wildcard, [0, 0, 0, 255]);
        assert_eq!(info.network, [192, 168, 1, 0]);
        assert_eq!(info.broadcast, [192, 168, 1, 255]);
        assert_eq!(info.host_min, Some([192, 168, 1, 1]));
        assert_eq!(info.host_max, Some([192, 168, 1, 254]));
        assert_eq!(info.hosts_quantity, 254);
    }

    #[test]
    fn test_calculate_class_a() {
        let info = calculate("10.0.0.1", "255.0.0.0").unwrap();
        assert_eq!(info.network, [10, 0, 0, 0]);
        assert_eq!(info.broadcast, [10, 255, 255, 255]);
        assert_eq!(info.hosts_quantity, 16777214);
    }

    #[test]
    fn test_calculate_slash_30() {
        let info = calculate("172.16.5.5", "255.255.255.252").unwrap();
        assert_eq!(info.netmask.prefix_len, 30);
        assert_eq!(info.network, [172, 16, 5, 4]);
        assert_eq!(info.broadcast, [172, 16, 5, 7]);
        assert_eq!(info.host_min, Some([172, 16, 5, 5]));
        assert_eq!(info.host_max, Some([172, 16, 5, 6]));
        assert_eq!(info.hosts_quantity, 2);
    }

    #[test]
    fn test_calculate_slash_31_has_no_host_range() {
        let info = calculate("192.168.1.255", "255.255.255.254").unwrap();
        assert_eq!(info.network, [192, 168, 1, 254]);
        assert_eq!(info.broadcast, [192, 168, 1, 255]);
        assert_eq!(info.host_min, None);
        assert_eq!(info.host_max, None);
        assert_eq!(info.hosts_quantity, 0);
    }

    #[test]
    fn test_calculate_slash_32_has_no_host_range() {
        let info = calculate("10.1.2.255", "255.255.255.255").unwrap();
        assert_eq!(info.network, [10, 1, 2, 255]);
        assert_eq!(info.broadcast, [10, 1, 2, 255]);
        assert_eq!(info.wildcard, [0, 0, 0, 0]);
        assert_eq!(info.host_min, None);
        assert_eq!(info.host_max, None);
        assert_eq!(info.hosts_quantity, 0);
    }

    #[test]
    fn test_calculate_slash_0() {
        let info = calculate("8.8.8.8", "0.0.0.0").unwrap();
        assert_eq!(info.network, [0, 0, 0, 0]);
        assert_eq!(info.broadcast, [255, 255, 255, 255]);
        assert_eq!(info.host_min, Some([0, 0, 0, 1]));
        assert_eq!(info.host_max, Some([255, 255, 255, 254]));
        assert_eq!(info.hosts_quantity, 4294967294);
    }

    #[test]
    fn test_calculate_rejects_non_contiguous_mask() {
        assert_eq!(
            calculate("10.1.2.3", "255.0.255.0").unwrap_err(),
            CalcError::NonContiguousMask("255.0.255.0".to_string())
        );
    }

    #[test]
    fn test_calculate_parse_errors_before_arithmetic() {
        assert!(matches!(
            calculate("abc.1.2.3", "255.255.255.0"),
            Err(CalcError::MalformedQuad { .. })
        ));
        assert!(matches!(
            calculate("10.0.0.1", "255.255.x.0"),
            Err(CalcError::MalformedQuad { .. })
        ));
        assert!(matches!(
            calculate("300.1.1.1", "255.0.0.0"),
            Err(CalcError::OctetOutOfRange { value: 300, .. })
        ));
    }

    #[test]
    fn test_network_and_wildcard_never_overlap() {
        let address = [203, 0, 113, 77];
        for p in 0..=32u32 {
            let info = calculate_with_mask(address, Mask::from_prefix_len(p).unwrap()).unwrap();
            for i in 0..4 {
                assert_eq!(info.network[i] & info.wildcard[i], 0, "overlap at /{p}");
                assert_eq!(
                    info.network[i] as u16 + info.wildcard[i] as u16,
                    info.broadcast[i] as u16
                );
            }
        }
    }

    #[test]
    fn test_hosts_quantity() {
        assert_eq!(hosts_quantity(0), 4294967294);
        assert_eq!(hosts_quantity(8), 16777214);
        assert_eq!(hosts_quantity(16), 65534);
        assert_eq!(hosts_quantity(24), 254);
        assert_eq!(hosts_quantity(29), 6);
        assert_eq!(hosts_quantity(30), 2);
        assert_eq!(hosts_quantity(31), 0);
        assert_eq!(hosts_quantity(32), 0);
    }
}
