use crate::types::{QuizChoice, QuizQuestion};

const fn tagged(label: &'static str, tags: &'static [&'static str]) -> QuizChoice {
    QuizChoice {
        label,
        tags,
        budget: None,
    }
}

const fn budget(label: &'static str, budget: u32) -> QuizChoice {
    QuizChoice {
        label,
        tags: &[],
        budget: Some(budget),
    }
}

static QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "Quel est votre objectif principal ?",
        choices: &[
            tagged("Gagner en visibilité", &["web", "design"]),
            tagged("Vendre en ligne", &["ecommerce", "marketing"]),
            tagged("Automatiser mon activité", &["ai"]),
            tagged("Sécuriser mes données", &["security"]),
        ],
    },
    QuizQuestion {
        prompt: "Où en est votre projet ?",
        choices: &[
            tagged("J'ai une idée, je me lance", &["coaching", "branding"]),
            tagged("Je démarre mon activité", &["web"]),
            tagged("Mon entreprise existe déjà", &["maintenance", "consulting"]),
        ],
    },
    QuizQuestion {
        prompt: "Quel budget envisagez-vous ?",
        choices: &[
            budget("Moins de 200$", 150),
            budget("Entre 200$ et 500$", 350),
            budget("Entre 500$ et 1000$", 800),
            budget("Plus de 1000$", 2000),
        ],
    },
];

/// Returns the fixed, ordered diagnostic quiz questions.
#[inline]
pub fn quiz_questions() -> &'static [QuizQuestion] {
    QUESTIONS
}
