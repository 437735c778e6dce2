//! Network address rules: IP, CIDR and MAC.

use std::net::IpAddr;

/// IPv4 or IPv6 address.
pub fn is_ip(s: String) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Address usable as IPv4, including the IPv4-mapped IPv6 form
/// (`::ffff:a.b.c.d`).
pub fn is_ipv4(s: String) -> bool {
    s.parse::<IpAddr>().is_ok_and(|ip| is_v4_like(&ip))
}

/// IPv6 address that is not IPv4-mapped.
pub fn is_ipv6(s: String) -> bool {
    s.parse::<IpAddr>().is_ok_and(|ip| !is_v4_like(&ip))
}

fn is_v4_like(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(_) => true,
        IpAddr::V6(v6) => v6.to_ipv4_mapped().is_some(),
    }
}

/// Parses `addr/prefix`. The prefix is plain decimal within the address
/// family's bit width.
fn parse_cidr(s: &str) -> Option<IpAddr> {
    let (addr, prefix) = s.split_once('/')?;
    let ip = addr.parse::<IpAddr>().ok()?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let bits: u8 = prefix.parse().ok()?;
    let max = if ip.is_ipv4() { 32 } else { 128 };
    (bits <= max).then_some(ip)
}

/// CIDR notation for either family.
pub fn is_cidr(s: String) -> bool {
    parse_cidr(&s).is_some()
}

/// CIDR notation with an IPv4 address.
pub fn is_cidr_v4(s: String) -> bool {
    parse_cidr(&s).is_some_and(|ip| is_v4_like(&ip))
}

/// CIDR notation with an IPv6 address.
pub fn is_cidr_v6(s: String) -> bool {
    parse_cidr(&s).is_some_and(|ip| !is_v4_like(&ip))
}

/// Hardware address of 6, 8 or 20 octets in one of three notations:
/// `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` or `aabb.ccdd.eeff`.
pub fn is_mac(s: String) -> bool {
    parse_mac(&s).is_some_and(|octets| matches!(octets, 6 | 8 | 20))
}

/// Counts octets of a well-formed hardware address.
fn parse_mac(s: &str) -> Option<usize> {
    let is_hex = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_hexdigit());

    for sep in [':', '-'] {
        if s.contains(sep) {
            let parts: Vec<&str> = s.split(sep).collect();
            return parts
                .iter()
                .all(|p| p.len() == 2 && is_hex(p))
                .then_some(parts.len());
        }
    }

    if s.contains('.') {
        let groups: Vec<&str> = s.split('.').collect();
        return groups
            .iter()
            .all(|g| g.len() == 4 && is_hex(g))
            .then_some(groups.len() * 2);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[rstest]
    #[case("192.168.0.1", true, true, false)]
    #[case("::1", true, false, true)]
    #[case("2001:db8::68", true, false, true)]
    #[case("::ffff:10.0.0.1", true, true, false)]
    #[case("256.0.0.1", false, false, false)]
    #[case("localhost", false, false, false)]
    #[case("", false, false, false)]
    fn ip_families(#[case] input: &str, #[case] any: bool, #[case] v4: bool, #[case] v6: bool) {
        assert_eq!(is_ip(s(input)), any, "ip");
        assert_eq!(is_ipv4(s(input)), v4, "v4");
        assert_eq!(is_ipv6(s(input)), v6, "v6");
    }

    #[rstest]
    #[case("10.0.0.0/8", true, true, false)]
    #[case("10.0.0.0/33", false, false, false)]
    #[case("2001:db8::/32", true, false, true)]
    #[case("2001:db8::/129", false, false, false)]
    #[case("10.0.0.0/+8", false, false, false)]
    #[case("10.0.0.0", false, false, false)]
    fn cidr_families(#[case] input: &str, #[case] any: bool, #[case] v4: bool, #[case] v6: bool) {
        assert_eq!(is_cidr(s(input)), any, "cidr");
        assert_eq!(is_cidr_v4(s(input)), v4, "v4");
        assert_eq!(is_cidr_v6(s(input)), v6, "v6");
    }

    #[rstest]
    #[case("00:00:5e:00:53:01", true)]
    #[case("02-00-5E-10-00-00-00-01", true)]
    #[case("0000.5e00.5301", true)]
    #[case("00:00:5e:00:53", false)]
    #[case("00:00:5e:00:53:0g", false)]
    #[case("00:00-5e:00:53:01", false)]
    #[case("00005e005301", false)]
    #[case("0000.5e00", false)]
    fn mac_addresses(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_mac(s(input)), expected);
    }
}
