//! Deep links to the company's direct contact channels.
//!
//! These are fire-and-forget: the rendering surface opens them in a new
//! browsing context and no response is handled.
//!
//! Query values are percent-encoded, not form-urlencoded: `wa.me` and
//! `mailto:` (RFC 6068) both read `+` literally, so spaces must become
//! `%20`.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

/// The company WhatsApp number, international format without `+`.
pub const WHATSAPP_NUMBER: &str = "243846378116";

/// The company contact address.
pub const CONTACT_EMAIL: &str = "contact@neuronova.com";

const CALENDAR_URL: &str = "https://cal.com/neuronova/decouverte";

/// Builds a `https://wa.me/...` link with a prefilled message.
pub fn whatsapp_link(text: &str) -> String {
    link_with_query(
        &format!("https://wa.me/{WHATSAPP_NUMBER}"),
        "text",
        text,
    )
}

/// Builds a `mailto:` link with a prefilled subject.
pub fn email_link(subject: &str) -> String {
    link_with_query(&format!("mailto:{CONTACT_EMAIL}"), "subject", subject)
}

/// The appointment-booking page.
pub fn calendar_link() -> String {
    CALENDAR_URL.to_owned()
}

fn link_with_query(base: &str, key: &str, value: &str) -> String {
    let mut url = Url::parse(base).expect("static link base is valid");
    let value = utf8_percent_encode(value, NON_ALPHANUMERIC);
    // The value is already encoded; `set_query` leaves `%` sequences
    // alone instead of re-encoding them.
    url.set_query(Some(&format!("{key}={value}")));
    url.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_percent_encodes_text() {
        let link = whatsapp_link("Bonjour Neuronova, j'aimerais un devis");
        assert_eq!(
            link,
            "https://wa.me/243846378116?text=\
             Bonjour%20Neuronova%2C%20j%27aimerais%20un%20devis"
        );
    }

    #[test]
    fn test_email_link_percent_encodes_subject() {
        let link = email_link("Demande de devis");
        assert_eq!(
            link,
            "mailto:contact@neuronova.com?subject=Demande%20de%20devis"
        );
    }

    #[test]
    fn test_spaces_never_become_plus() {
        // Mail clients and wa.me read `+` literally, so a space must
        // come out as `%20`, never as the form-urlencoded `+`.
        for link in [
            whatsapp_link("à très vite"),
            email_link("Création de logo"),
        ] {
            assert!(!link.contains('+'), "unexpected `+` in {link}");
            assert!(link.contains("%20"), "missing %20 in {link}");
        }
    }

    #[test]
    fn test_accents_are_utf8_encoded() {
        let link = email_link("Réponse");
        assert_eq!(
            link,
            "mailto:contact@neuronova.com?subject=R%C3%A9ponse"
        );
    }
}
