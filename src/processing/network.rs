//! IP address arithmetic.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{FilterError, FilterResult};

/// The address `offset` positions away from `address`, in canonical text form.
///
/// Works for IPv4 and IPv6. Fails with [`FilterError::InvalidArgument`] if `address` does not
/// parse or the result leaves the address space.
///
/// ```rust
/// use rust_data_filters::processing::ip_offset;
///
/// assert_eq!(ip_offset("10.0.0.254", 3).unwrap(), "10.0.1.1");
/// ```
pub fn ip_offset(address: &str, offset: i64) -> FilterResult<String> {
    let ip: IpAddr = address
        .trim()
        .parse()
        .map_err(|e| FilterError::invalid_argument(format!("'{address}' is not an ip address: {e}")))?;

    let out_of_range = || FilterError::invalid_argument(format!("{address} offset by {offset} is out of range"));

    let shifted = match ip {
        IpAddr::V4(v4) => {
            let base = i64::from(u32::from(v4));
            let n = base.checked_add(offset).ok_or_else(out_of_range)?;
            let n = u32::try_from(n).map_err(|_| out_of_range())?;
            IpAddr::V4(Ipv4Addr::from(n))
        }
        IpAddr::V6(v6) => {
            let base = u128::from(v6);
            let n = if offset >= 0 {
                base.checked_add(u128::from(offset.unsigned_abs()))
            } else {
                base.checked_sub(u128::from(offset.unsigned_abs()))
            }
            .ok_or_else(out_of_range)?;
            IpAddr::V6(Ipv6Addr::from(n))
        }
    };
    Ok(shifted.to_string())
}
