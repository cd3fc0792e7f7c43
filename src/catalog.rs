//! Static configuration tables for the filtering control panel.
//!
//! Pure data with no behavior: blockable-service and language catalogs,
//! the status color palette, form timing constants, and display-name
//! mappings. Everything here is a compile-time constant shared by all
//! callers; nothing is built per call.

use serde::Serialize;
use std::time::Duration;

/// Listen address meaning "all interfaces".
pub const ALL_INTERFACES_IP: &str = "0.0.0.0";

/// Debounce applied to form field validation while the user is typing.
pub const DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(300);
/// Poll interval while waiting for the backend to apply a change.
pub const CHECK_TIMEOUT: Duration = Duration::from_millis(1000);
/// Deadline after which a pending backend change is considered failed.
pub const STOP_TIMEOUT: Duration = Duration::from_millis(10_000);

/// A service that can be blocked wholesale by the filtering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockedService {
    /// Stable identifier used by the backend API.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
}

/// The blockable-service catalog, in display order.
pub const BLOCKED_SERVICES: &[BlockedService] = &[
    BlockedService { id: "facebook", name: "Facebook" },
    BlockedService { id: "whatsapp", name: "WhatsApp" },
    BlockedService { id: "instagram", name: "Instagram" },
    BlockedService { id: "twitter", name: "Twitter" },
    BlockedService { id: "youtube", name: "YouTube" },
    BlockedService { id: "netflix", name: "Netflix" },
    BlockedService { id: "snapchat", name: "Snapchat" },
    BlockedService { id: "messenger", name: "Messenger" },
    BlockedService { id: "twitch", name: "Twitch" },
    BlockedService { id: "discord", name: "Discord" },
    BlockedService { id: "skype", name: "Skype" },
    BlockedService { id: "steam", name: "Steam" },
    BlockedService { id: "ok", name: "OK" },
    BlockedService { id: "vk", name: "VK" },
    BlockedService { id: "mail_ru", name: "mail.ru" },
];

/// Look up a blockable service by its backend identifier.
pub fn blocked_service(id: &str) -> Option<&'static BlockedService> {
    BLOCKED_SERVICES.iter().find(|s| s.id == id)
}

/// A user-interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// BCP 47-style language key.
    pub key: &'static str,
    /// Name in the language itself.
    pub name: &'static str,
}

/// Languages the control panel ships translations for.
pub const LANGUAGES: &[Language] = &[
    Language { key: "en", name: "English" },
    Language { key: "es", name: "Español" },
    Language { key: "fr", name: "Français" },
    Language { key: "pt-br", name: "Portuguese (BR)" },
    Language { key: "sv", name: "Svenska" },
    Language { key: "vi", name: "Tiếng Việt" },
    Language { key: "bg", name: "Български" },
    Language { key: "ru", name: "Русский" },
    Language { key: "ja", name: "日本語" },
    Language { key: "zh-tw", name: "正體中文" },
    Language { key: "zh-cn", name: "简体中文" },
];

/// Display names for backend statistics counters.
pub const STAT_NAMES: &[(&str, &str)] = &[
    ("avg_processing_time", "average_processing_time"),
    ("blocked_filtering", "Blocked by filters"),
    ("dns_queries", "DNS queries"),
    ("replaced_parental", "stats_adult"),
    ("replaced_safebrowsing", "stats_malware_phishing"),
    ("replaced_safesearch", "enforced_save_search"),
];

/// Status color palette used for state badges and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Blue,
    Red,
    Green,
    Yellow,
}

impl StatusColor {
    /// The fixed hex value for this palette entry.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#467fcf",
            Self::Red => "#cd201f",
            Self::Green => "#5eba00",
            Self::Yellow => "#f1c40f",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(BLOCKED_SERVICES.len(), 15);
        assert_eq!(LANGUAGES.len(), 11);
        assert_eq!(STAT_NAMES.len(), 6);
    }

    #[test]
    fn test_service_lookup() {
        let service = blocked_service("youtube").unwrap();
        assert_eq!(service.name, "YouTube");
        assert!(blocked_service("myspace").is_none());
    }

    #[test]
    fn test_service_ids_are_unique() {
        for (i, a) in BLOCKED_SERVICES.iter().enumerate() {
            for b in &BLOCKED_SERVICES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_palette_values() {
        assert_eq!(StatusColor::Green.hex(), "#5eba00");
        assert_eq!(StatusColor::Red.hex(), "#cd201f");
    }

    #[test]
    fn test_timeouts() {
        assert!(DEBOUNCE_TIMEOUT < CHECK_TIMEOUT);
        assert!(CHECK_TIMEOUT < STOP_TIMEOUT);
    }
}
