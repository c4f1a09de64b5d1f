//! The free-text intent matcher.
//!
//! Matching is substring membership over a lowercased copy of the
//! input. The tables form a deliberate priority list, checked in this
//! exact order: price keywords, then delay keywords, then greeting
//! keywords; anything else falls back to the generic reply.

/// The recognized free-text intents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Intent {
    Pricing,
    Timeline,
    Greeting,
}

static PRICE_KEYWORDS: &[&str] =
    &["prix", "tarif", "coût", "cout", "combien", "cher"];

static DELAY_KEYWORDS: &[&str] =
    &["délai", "delai", "durée", "duree", "temps", "quand", "livraison"];

static GREETING_KEYWORDS: &[&str] =
    &["bonjour", "bonsoir", "salut", "hello", "bjr"];

pub(crate) fn match_intent(text: &str) -> Option<Intent> {
    let lowered = text.to_lowercase();
    let contains_any =
        |keywords: &[&str]| keywords.iter().any(|kw| lowered.contains(kw));

    if contains_any(PRICE_KEYWORDS) {
        Some(Intent::Pricing)
    } else if contains_any(DELAY_KEYWORDS) {
        Some(Intent::Timeline)
    } else if contains_any(GREETING_KEYWORDS) {
        Some(Intent::Greeting)
    } else {
        None
    }
}

pub(crate) fn reply_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Pricing => {
            "Nos tarifs démarrent à 40$ selon le service. Le plus simple \
             est de construire un devis personnalisé : cliquez sur \
             « Demander un devis » et sélectionnez les services qui vous \
             intéressent."
        }
        Intent::Timeline => {
            "Nos délais dépendent du projet : comptez 1 à 2 semaines pour \
             un site vitrine et 4 à 8 semaines pour une application \
             complète. Nous précisons toujours le délai dans le devis."
        }
        Intent::Greeting => {
            "Bonjour ! 👋 Je suis Julia, votre assistante Neuronova. \
             Souhaitez-vous un devis, découvrir nos services ou parler à \
             un conseiller ?"
        }
    }
}

pub(crate) const FALLBACK_REPLY: &str =
    "Merci pour votre message ! Un membre de notre équipe vous répondra \
     très bientôt. En attendant, je peux vous préparer un devis ou vous \
     mettre en contact avec un conseiller.";
