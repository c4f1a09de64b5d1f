//! The diagnostic quiz engine.

use julia_catalog::{Pack, QuizChoice, QuizQuestion, find_pack, quiz_questions};

/// The budget assumed when no answer carried one.
const DEFAULT_BUDGET: u32 = 500;

/// What the quiz suggests once all questions are answered.
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    /// The recommendation text (French).
    pub text: String,
    /// The suggested pack, when the budget lands in a pack bracket.
    pub pack: Option<Pack>,
}

/// What happens after recording an answer.
#[derive(Debug, PartialEq)]
pub(crate) enum QuizStep {
    /// Ask the next question.
    Ask(&'static QuizQuestion),
    /// The quiz is over; present the recommendation.
    Recommend(Recommendation),
}

/// A walk through the fixed question sequence.
#[derive(Clone, Debug)]
pub(crate) struct QuizRun {
    index: usize,
    answers: Vec<QuizChoice>,
}

impl QuizRun {
    /// Starts a run and returns the first question.
    pub(crate) fn start() -> (Self, &'static QuizQuestion) {
        let run = Self {
            index: 0,
            answers: Vec::new(),
        };
        (run, &quiz_questions()[0])
    }

    /// Records the answer to the current question and advances.
    pub(crate) fn answer(&mut self, choice: QuizChoice) -> QuizStep {
        self.answers.push(choice);
        self.index += 1;

        let questions = quiz_questions();
        if self.index < questions.len() {
            QuizStep::Ask(&questions[self.index])
        } else {
            QuizStep::Recommend(recommend(&self.answers))
        }
    }
}

/// Maps the accumulated answers to a recommendation.
///
/// Only the budget-bearing answer matters; the collected tags are
/// carried in the answers but deliberately not consulted.
fn recommend(answers: &[QuizChoice]) -> Recommendation {
    let budget = answers
        .iter()
        .find_map(|answer| answer.budget)
        .unwrap_or(DEFAULT_BUDGET);

    match budget {
        0..=200 => Recommendation {
            text: "Avec ce budget, je vous conseille de démarrer par un \
                   service essentiel comme la création de logo ou des \
                   flyers, puis d'étendre votre présence au fil du temps."
                .to_owned(),
            pack: None,
        },
        201..=500 => pack_recommendation("pack-lancement"),
        501..=1000 => pack_recommendation("pack-pme"),
        _ => custom_recommendation(),
    }
}

fn custom_recommendation() -> Recommendation {
    Recommendation {
        text: "Votre projet mérite un accompagnement sur mesure ! Le \
               mieux est de construire un devis personnalisé ou \
               d'échanger directement avec un conseiller."
            .to_owned(),
        pack: None,
    }
}

fn pack_recommendation(id: &str) -> Recommendation {
    // The quiz brackets are aligned with the shipped packs.
    debug_assert!(find_pack(id).is_some(), "unknown pack id {id}");
    let Some(pack) = find_pack(id).copied() else {
        return custom_recommendation();
    };
    Recommendation {
        text: format!(
            "D'après vos réponses, le pack {} à {}$ est fait pour vous : \
             {} {}",
            pack.name, pack.price_usd, pack.description, pack.savings
        ),
        pack: Some(pack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget_choice(budget: u32) -> QuizChoice {
        QuizChoice {
            label: "budget",
            tags: &[],
            budget: Some(budget),
        }
    }

    fn tagged_choice() -> QuizChoice {
        QuizChoice {
            label: "objectif",
            tags: &["web"],
            budget: None,
        }
    }

    fn run_with_budget(budget: u32) -> Recommendation {
        let (mut run, _) = QuizRun::start();
        assert!(matches!(run.answer(tagged_choice()), QuizStep::Ask(_)));
        assert!(matches!(run.answer(tagged_choice()), QuizStep::Ask(_)));
        match run.answer(budget_choice(budget)) {
            QuizStep::Recommend(rec) => rec,
            step => panic!("expected a recommendation, got {step:?}"),
        }
    }

    #[test]
    fn test_low_budget_has_no_pack() {
        let rec = run_with_budget(150);
        assert!(rec.pack.is_none());
    }

    #[test]
    fn test_mid_budget_recommends_launch_pack() {
        let rec = run_with_budget(500);
        assert_eq!(rec.pack.unwrap().name, "Lancement d'Entreprise");
    }

    #[test]
    fn test_upper_budget_recommends_sme_pack() {
        let rec = run_with_budget(800);
        assert_eq!(rec.pack.unwrap().name, "Digitalisation PME");
    }

    #[test]
    fn test_high_budget_offers_custom_quote() {
        let rec = run_with_budget(2000);
        assert!(rec.pack.is_none());
        assert!(rec.text.contains("devis"));
    }

    #[test]
    fn test_missing_budget_defaults_to_500() {
        let (mut run, _) = QuizRun::start();
        run.answer(tagged_choice());
        run.answer(tagged_choice());
        let step = run.answer(tagged_choice());
        match step {
            QuizStep::Recommend(rec) => {
                assert_eq!(rec.pack.unwrap().id, "pack-lancement");
            }
            step => panic!("expected a recommendation, got {step:?}"),
        }
    }

    #[test]
    fn test_every_bracket_yields_a_recommendation() {
        // Each bracket must produce a recommendation with text, and
        // the pack brackets must resolve to a shipped pack.
        for budget in [0, 150, 200, 201, 350, 500, 501, 800, 1000, 1001, 2000] {
            let rec = run_with_budget(budget);
            assert!(!rec.text.is_empty(), "empty text for budget {budget}");
            match budget {
                201..=1000 => {
                    let pack = rec.pack.expect("bracket should carry a pack");
                    assert!(find_pack(pack.id).is_some());
                }
                _ => assert!(rec.pack.is_none()),
            }
        }
    }

    #[test]
    fn test_first_budget_wins() {
        // Only the first budget-bearing answer is consulted.
        let (mut run, _) = QuizRun::start();
        run.answer(budget_choice(150));
        run.answer(budget_choice(2000));
        match run.answer(tagged_choice()) {
            QuizStep::Recommend(rec) => assert!(rec.pack.is_none()),
            step => panic!("expected a recommendation, got {step:?}"),
        }
    }
}
