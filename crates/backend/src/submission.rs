use serde::{Deserialize, Serialize};

/// A finalized quote, as posted to `POST /api/quotes`.
///
/// This is the only entity that crosses the system boundary: client info
/// collected by the assistant, the selected service names, and the totals
/// in both currencies.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteSubmission {
    /// Full name of the client.
    pub client_name: String,
    /// Email address, when the client gave one.
    ///
    /// Exactly one of `client_email` and `client_phone` is set; the
    /// other serializes as `null`.
    pub client_email: Option<String>,
    /// Phone number, when the client gave one instead of an email.
    pub client_phone: Option<String>,
    /// Company name of the client.
    pub company_name: String,
    /// Display names of the selected services (or the selected pack).
    pub services: Vec<String>,
    /// Total in US dollars.
    pub total_usd: u32,
    /// Total in Congolese francs.
    pub total_fc: u64,
    /// Free-form note attached by the assistant.
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let submission = QuoteSubmission {
            client_name: "Marie Kabongo".to_owned(),
            client_email: Some("marie@example.com".to_owned()),
            client_phone: None,
            company_name: "TechStart RDC".to_owned(),
            services: vec!["Site Vitrine".to_owned()],
            total_usd: 400,
            total_fc: 880_000,
            notes: "Demande via l'assistante Julia".to_owned(),
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["client_name"], "Marie Kabongo");
        assert_eq!(value["client_phone"], serde_json::Value::Null);
        assert_eq!(value["total_fc"], 880_000);

        let back: QuoteSubmission = serde_json::from_value(value).unwrap();
        assert_eq!(back, submission);
    }
}
