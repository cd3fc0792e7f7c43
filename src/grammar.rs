//! Grammar definitions for network identifier forms.
//!
//! Every grammar is an anchored, whole-string rule: no substring matches,
//! no tolerance for surrounding whitespace. Pattern source fragments are
//! `const` strings so composite grammars can be assembled from the same
//! sub-rules the standalone validators use; the IPv6 grammar embeds the
//! IPv4 octet rule rather than duplicating it.
//!
//! Compiled patterns live in process-lifetime statics. Compilation happens
//! once on first use and the resulting matchers are immutable, so concurrent
//! callers share them without locking and no match-position state survives
//! between calls.

use regex::Regex;
use std::sync::LazyLock;

/// Decimal octet in [0,255]: one or two digits (a single leading zero on
/// short forms is tolerated), or a three-digit value in 100-255.
const IPV4_OCTET: &str = "(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})";

/// Hostname label: alphanumeric with internal hyphens, never starting or
/// ending with a hyphen.
const HOST_LABEL: &str = "[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?";

/// One group of an IPv6 address: 1-4 hex digits, case-insensitive.
const HEX_GROUP: &str = "[0-9A-Fa-f]{1,4}";

/// `http`/`https` URL: mandatory scheme and authority, optional path.
///
/// The authority is any run of characters excluding `/` and whitespace;
/// everything after a single `/` is accepted as the path.
pub(crate) static URL_WITH_PROTOCOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/\s]+(?:/.*)?$").expect("URL grammar is invalid"));

/// Dot-separated hostname labels, matched end-to-end.
pub(crate) static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{HOST_LABEL}\\.)*{HOST_LABEL}$")).expect("hostname grammar is invalid")
});

/// Dotted-quad IPv4: exactly four octet groups, written as an explicit
/// four-way split so the grammar cannot drift from dotted-quad semantics
/// the way repeated-group encodings do.
pub(crate) static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^{IPV4_OCTET}\\.{IPV4_OCTET}\\.{IPV4_OCTET}\\.{IPV4_OCTET}$"
    ))
    .expect("IPv4 grammar is invalid")
});

/// IPv6 in all standard textual forms.
///
/// Alternatives, in order: the full eight-group form, every placement of a
/// single `::` compression, the bare-`::` forms, the link-local zone-id
/// form (`fe80::1%eth0`), and the IPv4-mapped embeds which reuse
/// [`IPV4_OCTET`] for the trailing dotted quad.
pub(crate) static IPV6: LazyLock<Regex> = LazyLock::new(|| {
    let h = HEX_GROUP;
    let v4 = format!("(?:{IPV4_OCTET}\\.){{3}}{IPV4_OCTET}");
    let pattern = format!(
        "^(?:\
        (?:{h}:){{7}}{h}|\
        (?:{h}:){{1,7}}:|\
        (?:{h}:){{1,6}}:{h}|\
        (?:{h}:){{1,5}}(?::{h}){{1,2}}|\
        (?:{h}:){{1,4}}(?::{h}){{1,3}}|\
        (?:{h}:){{1,3}}(?::{h}){{1,4}}|\
        (?:{h}:){{1,2}}(?::{h}){{1,5}}|\
        {h}:(?::{h}){{1,6}}|\
        :(?:(?::{h}){{1,7}}|:)|\
        [Ff][Ee]80:(?::[0-9A-Fa-f]{{0,4}}){{0,4}}%[0-9A-Za-z]+|\
        ::(?:[Ff]{{4}}(?::0{{1,4}})?:)?{v4}|\
        (?:{h}:){{1,4}}:{v4}\
        )$"
    );
    Regex::new(&pattern).expect("IPv6 grammar is invalid")
});

/// MAC address: six 2-hex-digit octets joined uniformly by colons or
/// hyphens, or three 4-hex-digit groups joined by dots (Cisco form).
/// Mixing separator styles within one string is rejected.
pub(crate) static MAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "^(?:\
        (?:[0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}|\
        (?:[0-9A-Fa-f]{2}-){5}[0-9A-Fa-f]{2}|\
        (?:[0-9A-Fa-f]{4}\\.){2}[0-9A-Fa-f]{4}\
        )$",
    )
    .expect("MAC grammar is invalid")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_grammars_compile() {
        // Force every lazy static so a malformed pattern fails here,
        // not in whichever validator happens to run first.
        LazyLock::force(&URL_WITH_PROTOCOL);
        LazyLock::force(&HOSTNAME);
        LazyLock::force(&IPV4);
        LazyLock::force(&IPV6);
        LazyLock::force(&MAC);
    }

    #[test]
    fn test_octet_rule_range() {
        let octet = Regex::new(&format!("^{IPV4_OCTET}$")).unwrap();
        assert!(octet.is_match("0"));
        assert!(octet.is_match("07"));
        assert!(octet.is_match("199"));
        assert!(octet.is_match("255"));
        assert!(!octet.is_match("256"));
        assert!(!octet.is_match("007"));
        assert!(!octet.is_match(""));
    }

    #[test]
    fn test_grammars_are_anchored() {
        // Whole-string rules: valid cores with trailing garbage must fail.
        assert!(!IPV4.is_match("192.168.1.1 "));
        assert!(!IPV6.is_match("::1garbage"));
        assert!(!MAC.is_match("00:1A:2B:3C:4D:5Ex"));
        assert!(!HOSTNAME.is_match(" example.com"));
    }
}
