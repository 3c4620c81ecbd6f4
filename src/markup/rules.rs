//! Named acceptance rules for caller-supplied values.
//!
//! Each rule is a plain predicate so it can be tested on its own and swapped
//! for a stricter parser without touching the insertion code.

use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</?[a-z][\s\S]*>").expect("tag pattern is valid"))
}

fn dimension_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\d*\.)?\d+ *(?:in|cm)$").expect("dimension pattern is valid"))
}

fn font_size_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\d*\.)?\d+ *(?:pt|px|em)$").expect("font size pattern is valid"))
}

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)^(?:(?:https?|ftp)://)?",
            r"(?:(?P<ip>\d{1,3}(?:\.\d{1,3}){3})",
            r"|(?:(?:[a-z\x{00a1}-\x{ffff}0-9]-*)*[a-z\x{00a1}-\x{ffff}0-9]+)",
            r"(?:\.(?:[a-z\x{00a1}-\x{ffff}0-9]-*)*[a-z\x{00a1}-\x{ffff}0-9]+)*",
            r"(?:\.[a-z\x{00a1}-\x{ffff}]{2,}))",
            r"(?::\d{2,5})?(?:/\S*)?$",
        ))
        .expect("url pattern is valid")
    })
}

/// Whether the input contains something shaped like a tag.
///
/// Input without a tag is plain text no matter what else it contains.
pub fn looks_like_markup(input: &str) -> bool {
    tag_pattern().is_match(input)
}

/// A page dimension: a number followed by `in` or `cm` (e.g. `8.5in`, `2 cm`).
pub fn is_valid_dimension(value: &str) -> bool {
    dimension_pattern().is_match(value.trim())
}

/// A font size: a number followed by `pt`, `px` or `em`.
pub fn is_valid_font_size(value: &str) -> bool {
    font_size_pattern().is_match(value.trim())
}

/// A remote image URL: optional http/https/ftp scheme, a host name with a
/// top-level domain or a public IPv4 address, optional port and path.
pub fn is_valid_url(url: &str) -> bool {
    let Some(caps) = url_pattern().captures(url) else {
        return false;
    };

    match caps.name("ip") {
        Some(ip) => is_public_ipv4(ip.as_str()),
        None => true,
    }
}

/// Private, loopback, link-local, multicast and network/broadcast host
/// addresses are not image sources.
fn is_public_ipv4(addr: &str) -> bool {
    let Ok(ip) = addr.parse::<Ipv4Addr>() else {
        return false;
    };
    let [first, .., last] = ip.octets();

    (1..=223).contains(&first)
        && (1..=254).contains(&last)
        && !ip.is_private()
        && !ip.is_loopback()
        && !ip.is_link_local()
}
