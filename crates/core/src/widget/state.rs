use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use julia_actor::{Addr, Event};
use julia_backend::{BackendError, QuoteSubmission};
use julia_catalog::{Pack, QuizChoice, QuizQuestion, Service, categories};
use tokio::sync::oneshot;
use tokio::time::sleep;

use super::builder::WidgetBuilder;
use super::{WidgetEvent, WidgetSnapshot};
use crate::backend_client::BackendClient;
use crate::intent;
use crate::lead::{LeadFlow, LeadStep};
use crate::links;
use crate::quiz::{QuizRun, QuizStep, Recommendation};
use crate::quote::Selection;
use crate::transcript::{Action, ChatMessage, ChatOption, Speaker, View};

/// Delay before a scripted (option-driven) bot turn lands.
const SCRIPTED_TURN_DELAY: Duration = Duration::from_millis(800);
/// Delay for a keyword-matched free-text reply.
const INTENT_TURN_DELAY: Duration = Duration::from_millis(1000);
/// Delay for the generic free-text fallback.
const FALLBACK_TURN_DELAY: Duration = Duration::from_millis(1500);

const GREETING: &str =
    "Bonjour ! 👋 Je suis Julia, votre assistante virtuelle Neuronova. \
     Comment puis-je vous aider aujourd'hui ?";

const QUOTE_INTRO: &str =
    "Avec plaisir ! Sélectionnez les services qui vous intéressent, puis \
     validez votre sélection pour recevoir un devis personnalisé.";

const ADVISOR_TEXT: &str =
    "Nos conseillers sont disponibles du Lundi au Vendredi, 8h-18h. Vous \
     pouvez nous joindre via WhatsApp au +243 846 378 116 ou par email à \
     contact@neuronova.com.";

const QUIZ_INTRO: &str =
    "C'est parti pour le diagnostic express ! Trois questions suffisent \
     pour cerner votre besoin.";

const CANCEL_TEXT: &str =
    "Pas de souci, votre sélection a été annulée. Que puis-je faire \
     d'autre pour vous ?";

const EMPTY_SELECTION_NOTICE: &str =
    "Veuillez sélectionner au moins un service avant de valider.";

const SUBMISSION_NOTES: &str = "Demande créée via l'assistante Julia.";

const SUBMISSION_FAILED: &str =
    "Oups, une erreur est survenue lors de l'envoi de votre demande. \
     Vous pouvez nous joindre directement sur WhatsApp, nous répondrons \
     sans attendre.";

const WHATSAPP_PREFILL: &str =
    "Bonjour Neuronova, j'aimerais parler à un conseiller.";

/// A bot turn waiting for its typing delay.
struct BotTurn {
    text: String,
    options: Vec<ChatOption>,
    is_quote: bool,
    delay: Duration,
}

impl BotTurn {
    fn scripted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
            is_quote: false,
            delay: SCRIPTED_TURN_DELAY,
        }
    }

    fn with_options(mut self, options: Vec<ChatOption>) -> Self {
        self.options = options;
        self
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn as_quote(mut self) -> Self {
        self.is_quote = true;
        self
    }
}

pub(super) struct WidgetState {
    backend: BackendClient,
    transcript: Vec<ChatMessage>,
    next_message_id: u64,
    view: View,
    is_open: bool,
    greeted: bool,
    is_typing: bool,
    pending_turns: VecDeque<BotTurn>,
    submitting: bool,
    selection: Selection,
    lead: Option<LeadFlow>,
    quiz: Option<QuizRun>,
    on_event: Option<Arc<dyn Fn(WidgetEvent) + Send + Sync>>,
}

impl WidgetState {
    pub(super) fn from_builder(builder: WidgetBuilder) -> Self {
        let WidgetBuilder { backend, on_event } = builder;
        Self {
            backend,
            transcript: Vec::new(),
            next_message_id: 1,
            view: View::Chat,
            is_open: false,
            greeted: false,
            is_typing: false,
            pending_turns: VecDeque::new(),
            submitting: false,
            selection: Selection::default(),
            lead: None,
            quiz: None,
            on_event,
        }
    }

    fn emit(&self, event: WidgetEvent) {
        if let Some(on_event) = &self.on_event {
            on_event(event);
        }
    }

    fn push_message(
        &mut self,
        speaker: Speaker,
        text: String,
        options: Vec<ChatOption>,
        is_quote: bool,
    ) {
        let message = ChatMessage {
            id: self.next_message_id,
            speaker,
            text,
            options,
            is_quote,
        };
        self.next_message_id += 1;
        self.transcript.push(message.clone());
        self.emit(WidgetEvent::MessageAppended(message));
    }

    fn push_user(&mut self, text: String) {
        self.push_message(Speaker::User, text, Vec::new(), false);
    }

    fn set_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.emit(WidgetEvent::ViewChanged(view));
        }
    }

    /// Queues a bot turn behind every turn initiated before it.
    ///
    /// One typing timer runs at a time; a turn initiated while another
    /// is pending waits its turn, which keeps the transcript in strict
    /// initiation order even under rapid clicks.
    fn queue_turn(&mut self, turn: BotTurn, addr: &Addr<Self>) {
        self.pending_turns.push_back(turn);
        if !self.is_typing {
            self.is_typing = true;
            self.emit(WidgetEvent::TypingChanged(true));
            self.start_turn_timer(addr);
        }
    }

    fn start_turn_timer(&self, addr: &Addr<Self>) {
        let delay = self
            .pending_turns
            .front()
            .map(|turn| turn.delay)
            .unwrap_or_default();
        let addr = addr.clone();
        tokio::spawn(async move {
            sleep(delay).await;
            addr.send(TurnTimerFired).ok();
        });
    }

    fn finish_turn(&mut self, addr: &Addr<Self>) {
        let Some(turn) = self.pending_turns.pop_front() else {
            // A stale timer; nothing to deliver.
            return;
        };
        self.push_message(
            Speaker::Bot,
            turn.text,
            turn.options,
            turn.is_quote,
        );

        if self.pending_turns.is_empty() {
            self.is_typing = false;
            self.emit(WidgetEvent::TypingChanged(false));
            self.maybe_emit_idle();
        } else {
            self.start_turn_timer(addr);
        }
    }

    fn maybe_emit_idle(&self) {
        if !self.is_typing && self.pending_turns.is_empty() && !self.submitting
        {
            self.emit(WidgetEvent::Idle);
        }
    }

    fn handle_opened(&mut self, addr: &Addr<Self>) {
        self.is_open = true;
        if !self.greeted {
            self.greeted = true;
            let turn = BotTurn::scripted(GREETING)
                .with_options(greeting_options());
            self.queue_turn(turn, addr);
        }
    }

    fn handle_option(&mut self, option: ChatOption, addr: &Addr<Self>) {
        self.push_user(option.label.clone());

        match option.action {
            Action::StartQuote => {
                self.set_view(View::Quote);
                self.queue_turn(BotTurn::scripted(QUOTE_INTRO), addr);
            }
            Action::BrowseServices => {
                self.set_view(View::Services);
                let turn = BotTurn::scripted(services_overview())
                    .with_options(services_options());
                self.queue_turn(turn, addr);
            }
            Action::StartQuiz => self.start_quiz(addr),
            Action::ContactAdvisor => {
                let turn = BotTurn::scripted(ADVISOR_TEXT)
                    .with_options(contact_options());
                self.queue_turn(turn, addr);
            }
            Action::OpenWhatsApp => {
                self.emit(WidgetEvent::OpenLink(links::whatsapp_link(
                    WHATSAPP_PREFILL,
                )));
                self.queue_turn(
                    BotTurn::scripted(
                        "Je vous redirige vers WhatsApp, à tout de suite !",
                    ),
                    addr,
                );
            }
            Action::OpenEmail => {
                self.emit(WidgetEvent::OpenLink(links::email_link(
                    "Demande d'information",
                )));
                self.queue_turn(
                    BotTurn::scripted(
                        "J'ouvre votre messagerie, nous lisons chaque \
                         message !",
                    ),
                    addr,
                );
            }
            Action::OpenCalendar => {
                self.emit(WidgetEvent::OpenLink(links::calendar_link()));
                self.queue_turn(
                    BotTurn::scripted(
                        "J'ouvre notre agenda, choisissez le créneau qui \
                         vous arrange.",
                    ),
                    addr,
                );
            }
            Action::CannedQuestion | Action::FreeText => {
                self.respond_free_text(&option.label, addr);
            }
            Action::AnswerQuiz(choice) => {
                self.handle_quiz_answer(choice, addr);
            }
            Action::ChoosePack(pack) => self.handle_pack(pack, addr),
            Action::CancelFlow => self.handle_cancel(addr),
        }
    }

    fn handle_user_text(&mut self, text: String, addr: &Addr<Self>) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.push_user(trimmed.to_owned());

        if self.view == View::CollectInfo && self.lead.is_some() {
            self.advance_lead(trimmed.to_owned(), addr);
        } else {
            self.respond_free_text(trimmed, addr);
        }
    }

    fn respond_free_text(&mut self, text: &str, addr: &Addr<Self>) {
        let turn = match intent::match_intent(text) {
            Some(matched) => BotTurn::scripted(intent::reply_for(matched))
                .with_delay(INTENT_TURN_DELAY),
            None => BotTurn::scripted(intent::FALLBACK_REPLY)
                .with_options(fallback_options())
                .with_delay(FALLBACK_TURN_DELAY),
        };
        self.queue_turn(turn, addr);
    }

    fn start_quiz(&mut self, addr: &Addr<Self>) {
        self.set_view(View::Quiz);
        let (run, first_question) = QuizRun::start();
        self.quiz = Some(run);
        self.queue_turn(BotTurn::scripted(QUIZ_INTRO), addr);
        self.queue_turn(question_turn(first_question), addr);
    }

    fn handle_quiz_answer(&mut self, choice: QuizChoice, addr: &Addr<Self>) {
        let Some(quiz) = &mut self.quiz else {
            debug!("quiz answer received with no active quiz, ignoring");
            return;
        };
        match quiz.answer(choice) {
            QuizStep::Ask(question) => {
                self.queue_turn(question_turn(question), addr);
            }
            QuizStep::Recommend(recommendation) => {
                self.quiz = None;
                self.set_view(View::Chat);
                let options = recommendation_options(&recommendation);
                let turn = BotTurn::scripted(recommendation.text)
                    .with_options(options);
                self.queue_turn(turn, addr);
            }
        }
    }

    fn handle_service_toggled(&mut self, service: Service) {
        let added = self.selection.toggle_service(service);
        debug!(
            service = service.id,
            added, "selection toggled, {} item(s)",
            self.selection.len()
        );
    }

    fn handle_confirm(&mut self, addr: &Addr<Self>) {
        if self.selection.is_empty() {
            self.emit(WidgetEvent::Notice(
                EMPTY_SELECTION_NOTICE.to_owned(),
            ));
            return;
        }

        let totals = self.selection.totals();
        let summary = format!(
            "Excellent choix ! Vous avez sélectionné {} service(s) pour un \
             total de {}$ (≈ {} FC). Pour finaliser votre devis, puis-je \
             avoir votre nom ?",
            self.selection.len(),
            totals.usd,
            totals.fc,
        );
        self.begin_lead_capture(summary, addr);
    }

    fn handle_pack(&mut self, pack: Pack, addr: &Addr<Self>) {
        self.selection.replace_with_pack(pack);
        let summary = format!(
            "Très bon choix ! Le pack {} à {}$ (≈ {} FC) : {} Pour \
             finaliser votre devis, puis-je avoir votre nom ?",
            pack.name, pack.price_usd, pack.price_fc, pack.description,
        );
        self.begin_lead_capture(summary, addr);
    }

    fn begin_lead_capture(&mut self, summary: String, addr: &Addr<Self>) {
        self.set_view(View::CollectInfo);
        self.lead = Some(LeadFlow::new());
        let turn = BotTurn::scripted(summary).as_quote();
        self.queue_turn(turn, addr);
    }

    fn handle_cancel(&mut self, addr: &Addr<Self>) {
        self.selection.clear();
        self.lead = None;
        self.quiz = None;
        self.set_view(View::Chat);
        let turn =
            BotTurn::scripted(CANCEL_TEXT).with_options(greeting_options());
        self.queue_turn(turn, addr);
    }

    fn advance_lead(&mut self, reply: String, addr: &Addr<Self>) {
        let Some(lead) = &mut self.lead else {
            return;
        };
        let step = lead.record(&reply);
        let name = lead.name().to_owned();
        match step {
            LeadStep::NeedContact => {
                let prompt = format!(
                    "Enchantée {name} ! Quelle est votre adresse e-mail ou \
                     votre numéro WhatsApp ?",
                );
                self.queue_turn(BotTurn::scripted(prompt), addr);
            }
            LeadStep::NeedCompany => {
                self.queue_turn(
                    BotTurn::scripted(
                        "Parfait. Quel est le nom de votre entreprise ? \
                         (ou votre nom si vous êtes indépendant)",
                    ),
                    addr,
                );
            }
            LeadStep::Complete(info) => {
                self.lead = None;
                let totals = self.selection.totals();
                let submission = QuoteSubmission {
                    client_name: info.name,
                    client_email: info.email,
                    client_phone: info.phone,
                    company_name: info.company,
                    services: self.selection.names(),
                    total_usd: totals.usd,
                    total_fc: totals.fc,
                    notes: SUBMISSION_NOTES.to_owned(),
                };
                self.submit(submission, addr);
            }
        }
    }

    fn submit(&mut self, submission: QuoteSubmission, addr: &Addr<Self>) {
        self.submitting = true;
        let backend = self.backend.clone();
        let addr = addr.clone();
        tokio::spawn(async move {
            let result = backend.record_quote(submission.clone()).await;
            addr.send(SubmissionFinished { submission, result }).ok();
        });
    }

    fn handle_submission_finished(
        &mut self,
        submission: QuoteSubmission,
        result: Result<(), Box<dyn BackendError>>,
        addr: &Addr<Self>,
    ) {
        self.submitting = false;
        // Success and failure both end the flow; the selection and the
        // client info are discarded either way.
        self.selection.clear();
        self.set_view(View::Chat);

        let turn = match result {
            Ok(()) => {
                let text = format!(
                    "Merci {} ! Votre demande de devis ({}$) a bien été \
                     enregistrée. Notre équipe vous contactera sous 24h.",
                    submission.client_name, submission.total_usd,
                );
                BotTurn::scripted(text).with_options(followup_options())
            }
            Err(err) => {
                warn!("quote submission failed: {err}");
                BotTurn::scripted(SUBMISSION_FAILED).with_options(vec![
                    ChatOption::new(
                        "Continuer sur WhatsApp",
                        Action::OpenWhatsApp,
                    ),
                ])
            }
        };
        self.queue_turn(turn, addr);
    }

    fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            messages: self.transcript.clone(),
            view: self.view,
            is_typing: self.is_typing,
            is_open: self.is_open,
            selection: self.selection.items().to_vec(),
            totals: self.selection.totals(),
        }
    }
}

fn greeting_options() -> Vec<ChatOption> {
    vec![
        ChatOption::new("Demander un devis", Action::StartQuote),
        ChatOption::new("Découvrir nos services", Action::BrowseServices),
        ChatOption::new("Faire le diagnostic express", Action::StartQuiz),
        ChatOption::new("Parler à un conseiller", Action::ContactAdvisor),
    ]
}

fn fallback_options() -> Vec<ChatOption> {
    vec![
        ChatOption::new("Demander un devis", Action::StartQuote),
        ChatOption::new("Parler à un conseiller", Action::ContactAdvisor),
    ]
}

fn contact_options() -> Vec<ChatOption> {
    vec![
        ChatOption::new("Continuer sur WhatsApp", Action::OpenWhatsApp),
        ChatOption::new("Envoyer un e-mail", Action::OpenEmail),
        ChatOption::new("Prendre rendez-vous", Action::OpenCalendar),
    ]
}

fn followup_options() -> Vec<ChatOption> {
    vec![
        ChatOption::new("Continuer sur WhatsApp", Action::OpenWhatsApp),
        ChatOption::new("Nous écrire un e-mail", Action::OpenEmail),
    ]
}

fn services_overview() -> String {
    let categories = categories();
    let service_count: usize = categories
        .iter()
        .map(|category| category.services.len())
        .sum();
    let names: Vec<&str> =
        categories.iter().map(|category| category.name).collect();
    format!(
        "Nous offrons {service_count} services dans {} catégories : {}. \
         Quel domaine vous intéresse ?",
        names.len(),
        names.join(", "),
    )
}

fn services_options() -> Vec<ChatOption> {
    vec![
        ChatOption::new("Quels sont vos prix ?", Action::CannedQuestion),
        ChatOption::new("Quels sont vos délais ?", Action::CannedQuestion),
        ChatOption::new("Demander un devis", Action::StartQuote),
    ]
}

fn question_turn(question: &'static QuizQuestion) -> BotTurn {
    let options = question
        .choices
        .iter()
        .map(|choice| {
            ChatOption::new(choice.label, Action::AnswerQuiz(*choice))
        })
        .collect();
    BotTurn::scripted(question.prompt).with_options(options)
}

fn recommendation_options(
    recommendation: &Recommendation,
) -> Vec<ChatOption> {
    match recommendation.pack {
        Some(pack) => vec![
            ChatOption::new(
                format!("Choisir le pack {}", pack.name),
                Action::ChoosePack(pack),
            ),
            ChatOption::new("Voir autre chose", Action::CancelFlow),
        ],
        None => vec![
            ChatOption::new("Demander un devis", Action::StartQuote),
            ChatOption::new("Parler à un conseiller", Action::ContactAdvisor),
        ],
    }
}

#[derive(Debug)]
pub(super) struct Opened;

impl Event<WidgetState> for Opened {
    fn apply(self, state: &mut WidgetState, addr: &Addr<WidgetState>) {
        state.handle_opened(addr);
    }
}

#[derive(Debug)]
pub(super) struct Closed;

impl Event<WidgetState> for Closed {
    fn apply(self, state: &mut WidgetState, _addr: &Addr<WidgetState>) {
        // Pending turn timers keep running; a scheduled reply still
        // lands after a reopen.
        state.is_open = false;
    }
}

#[derive(Debug)]
pub(super) struct UserText(pub String);

impl Event<WidgetState> for UserText {
    fn apply(self, state: &mut WidgetState, addr: &Addr<WidgetState>) {
        state.handle_user_text(self.0, addr);
    }
}

#[derive(Debug)]
pub(super) struct OptionChosen(pub ChatOption);

impl Event<WidgetState> for OptionChosen {
    fn apply(self, state: &mut WidgetState, addr: &Addr<WidgetState>) {
        state.handle_option(self.0, addr);
    }
}

#[derive(Debug)]
pub(super) struct ServiceToggled(pub Service);

impl Event<WidgetState> for ServiceToggled {
    fn apply(self, state: &mut WidgetState, _addr: &Addr<WidgetState>) {
        state.handle_service_toggled(self.0);
    }
}

#[derive(Debug)]
pub(super) struct QuoteConfirmed;

impl Event<WidgetState> for QuoteConfirmed {
    fn apply(self, state: &mut WidgetState, addr: &Addr<WidgetState>) {
        state.handle_confirm(addr);
    }
}

#[derive(Debug)]
struct TurnTimerFired;

impl Event<WidgetState> for TurnTimerFired {
    fn apply(self, state: &mut WidgetState, addr: &Addr<WidgetState>) {
        state.finish_turn(addr);
    }
}

#[derive(Debug)]
struct SubmissionFinished {
    submission: QuoteSubmission,
    result: Result<(), Box<dyn BackendError>>,
}

impl Event<WidgetState> for SubmissionFinished {
    fn apply(self, state: &mut WidgetState, addr: &Addr<WidgetState>) {
        state.handle_submission_finished(self.submission, self.result, addr);
    }
}

#[derive(Debug)]
pub(super) struct TakeSnapshot(pub oneshot::Sender<WidgetSnapshot>);

impl Event<WidgetState> for TakeSnapshot {
    fn apply(self, state: &mut WidgetState, _addr: &Addr<WidgetState>) {
        self.0.send(state.snapshot()).ok();
    }
}
