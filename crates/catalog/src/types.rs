use serde::Serialize;

/// A single catalog line: one service with its price in both currencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Service {
    /// Stable identifier, unique across services and packs.
    pub id: &'static str,
    /// Display name (French).
    pub name: &'static str,
    /// Price in US dollars.
    pub price_usd: u32,
    /// Price in Congolese francs, at the catalog's fixed rate.
    pub price_fc: u64,
}

/// A group of services shown together in the browsing view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ServiceCategory {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name (French).
    pub name: &'static str,
    /// The services in this category, in display order.
    pub services: &'static [Service],
}

/// A discounted bundle sold as a single catalog line.
///
/// A pack is an alternative to itemized selection: choosing one replaces
/// the whole selection instead of being added to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pack {
    /// Stable identifier, unique across services and packs.
    pub id: &'static str,
    /// Display name (French).
    pub name: &'static str,
    /// What the bundle contains.
    pub description: &'static str,
    /// Bundle price in US dollars.
    pub price_usd: u32,
    /// Bundle price in Congolese francs, at the catalog's fixed rate.
    pub price_fc: u64,
    /// Savings blurb compared to buying the lines separately.
    pub savings: &'static str,
}

/// One question of the diagnostic quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct QuizQuestion {
    /// The question text (French).
    pub prompt: &'static str,
    /// The closed set of answers.
    pub choices: &'static [QuizChoice],
}

/// One selectable answer of a quiz question.
///
/// By construction of the shipped data, a choice carries either `tags`
/// or a `budget`, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct QuizChoice {
    /// The answer label (French).
    pub label: &'static str,
    /// Interest tags accumulated by the quiz.
    pub tags: &'static [&'static str],
    /// The budget this answer stands for, for budget questions.
    pub budget: Option<u32>,
}
