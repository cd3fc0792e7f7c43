//! Stateless identifier validation and classification.
//!
//! Every predicate here is a pure function over its input: the same text
//! always yields the same answer, malformed input yields `false` rather
//! than an error, and nothing is retained between calls.

use crate::grammar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The network identifier forms understood by the validator.
///
/// A string may satisfy more than one grammar (an IPv4 literal is also a
/// valid hostname-shaped token), so kinds are never treated as mutually
/// exclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    /// URL with an explicit `http`/`https` scheme.
    Url,
    /// Dot-separated DNS hostname.
    Hostname,
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// IPv6 address (compressed, IPv4-mapped, and zone-id forms).
    Ipv6,
    /// MAC address (colon, hyphen, or Cisco dotted form).
    Mac,
}

impl IdentifierKind {
    /// All kinds, in declaration order. `classify` reports matches in
    /// this order.
    pub const ALL: [IdentifierKind; 5] = [
        IdentifierKind::Url,
        IdentifierKind::Hostname,
        IdentifierKind::Ipv4,
        IdentifierKind::Ipv6,
        IdentifierKind::Mac,
    ];
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Url => "url",
            Self::Hostname => "hostname",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Mac => "mac",
        };
        write!(f, "{}", name)
    }
}

/// Check whether `text` is a URL carrying an explicit `http`/`https`
/// scheme. Any other scheme is rejected.
pub fn is_valid_url_with_protocol(text: &str) -> bool {
    grammar::URL_WITH_PROTOCOL.is_match(text)
}

/// Check whether `text` is a valid DNS hostname: one or more dot-separated
/// labels, each alphanumeric with internal hyphens only.
pub fn is_valid_hostname(text: &str) -> bool {
    grammar::HOSTNAME.is_match(text)
}

/// Check whether `text` is a dotted-quad IPv4 address: exactly four
/// dot-separated decimal octets, each in [0,255], nothing else.
pub fn is_valid_ipv4(text: &str) -> bool {
    grammar::IPV4.is_match(text)
}

/// Check whether `text` is an IPv6 address in any standard textual form,
/// including `::` compression, IPv4-mapped embeds, and link-local zone ids.
pub fn is_valid_ipv6(text: &str) -> bool {
    grammar::IPV6.is_match(text)
}

/// Check whether `text` is a MAC address in colon, hyphen, or Cisco
/// dotted form. Separator styles must not be mixed.
pub fn is_valid_mac_address(text: &str) -> bool {
    grammar::MAC.is_match(text)
}

/// Test `text` against the grammar for a single identifier kind.
pub fn validate(kind: IdentifierKind, text: &str) -> bool {
    match kind {
        IdentifierKind::Url => is_valid_url_with_protocol(text),
        IdentifierKind::Hostname => is_valid_hostname(text),
        IdentifierKind::Ipv4 => is_valid_ipv4(text),
        IdentifierKind::Ipv6 => is_valid_ipv6(text),
        IdentifierKind::Mac => is_valid_mac_address(text),
    }
}

/// Test `text` against every grammar and return the kinds that accept it.
///
/// The result is empty for text no grammar accepts (including the empty
/// string) and may contain several kinds for overlapping forms.
pub fn classify(text: &str) -> Vec<IdentifierKind> {
    IdentifierKind::ALL
        .into_iter()
        .filter(|&kind| validate(kind, text))
        .collect()
}

/// The result of checking one identifier form, for reporting layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// The grammar that was tested.
    pub kind: IdentifierKind,
    /// Whether the input satisfied it.
    pub is_valid: bool,
}

impl ValidationOutcome {
    /// Run a single-kind check and record the result.
    pub fn new(kind: IdentifierKind, text: &str) -> Self {
        Self {
            kind,
            is_valid: validate(kind, text),
        }
    }
}
