//! Random IPv4 addresses for the greeting lookup.

use rand::Rng;
use std::net::Ipv4Addr;

/// Draw an address from the thread-local RNG.
pub fn random_ipv4() -> Ipv4Addr {
    random_ipv4_with(&mut rand::thread_rng())
}

/// Draw a `u32` uniformly from `1..=u32::MAX` and read it as a big-endian address.
///
/// `0.0.0.0` is never produced.
pub fn random_ipv4_with<R: Rng>(rng: &mut R) -> Ipv4Addr {
    Ipv4Addr::from(rng.gen_range(1..=u32::MAX))
}
