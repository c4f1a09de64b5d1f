//! A terminal client for chatting with the Neuronova assistant.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use julia::SessionBuilder;
use julia::catalog::categories;
use julia::catalog::find_service;
use julia::core::{ChatOption, Speaker, View, WidgetEvent};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt};
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::sleep;

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = env::var("NEURONOVA_BACKEND_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_owned());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let session = SessionBuilder::with_backend_url(base_url)
        .on_event(move |event| {
            event_tx.send(event).ok();
        })
        .build();

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    let mut last_options: Vec<ChatOption> = Vec::new();

    session.open();
    if !pump(&mut event_rx, &mut last_options, &progress_style).await {
        return;
    }

    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // A number clicks the matching option button, `+id` toggles a
        // service in the quote, `ok` confirms the selection; everything
        // else is sent as free text.
        if let Ok(index) = line.parse::<usize>() {
            let Some(option) =
                index.checked_sub(1).and_then(|i| last_options.get(i))
            else {
                println!("Aucune option numéro {line}.");
                continue;
            };
            session.select_option(option.clone());
        } else if let Some(id) = line.strip_prefix('+') {
            let Some(service) = find_service(id) else {
                println!("Service inconnu : {id}");
                continue;
            };
            session.toggle_service(*service);
            let snapshot = session.snapshot().await;
            println!(
                "Sélection : {} service(s), total {}$ (≈ {} FC)",
                snapshot.selection.len(),
                snapshot.totals.usd,
                snapshot.totals.fc,
            );
            continue;
        } else if line.eq_ignore_ascii_case("ok") {
            session.confirm_quote();
            let snapshot = session.snapshot().await;
            if snapshot.view != View::CollectInfo {
                // The rejection notice is already in the channel.
                while let Ok(event) = event_rx.try_recv() {
                    handle_event(event, &mut last_options);
                }
                continue;
            }
        } else {
            session.send_message(line);
        }

        if !pump(&mut event_rx, &mut last_options, &progress_style).await {
            break;
        }
    }
}

/// Pumps events until the assistant settles, animating a spinner while
/// a reply is being typed. Returns `false` when the session is gone.
async fn pump(
    event_rx: &mut mpsc::UnboundedReceiver<WidgetEvent>,
    last_options: &mut Vec<ChatOption>,
    progress_style: &ProgressStyle,
) -> bool {
    let mut progress_bar = None;

    loop {
        // Create a new progress bar if it has been finished.
        progress_bar
            .get_or_insert_with(|| {
                let progress_bar = ProgressBar::new_spinner();
                progress_bar.set_style(progress_style.clone());
                progress_bar.set_message("Julia est en train d'écrire...");
                progress_bar
            })
            .inc(1);

        let sleep = sleep(Duration::from_millis(100));
        let event = select! {
            event = event_rx.recv() => {
                let Some(event) = event else {
                    return false;
                };
                event
            },
            _ = sleep => {
                continue;
            }
        };

        // Finish the progress bar before printing anything else.
        if let Some(progress_bar) = &progress_bar {
            progress_bar.finish_and_clear();
        }
        progress_bar = None;

        if handle_event(event, last_options) {
            return true;
        }
    }
}

/// Prints one event. Returns `true` when the assistant went idle.
fn handle_event(
    event: WidgetEvent,
    last_options: &mut Vec<ChatOption>,
) -> bool {
    match event {
        WidgetEvent::MessageAppended(message) => {
            // The user's own messages are echoed into the transcript;
            // the terminal already shows what was typed.
            if message.speaker != Speaker::Bot {
                return false;
            }
            println!(
                "{}🤖 {}",
                BAR_CHAR.bright_cyan(),
                message.text.bright_white()
            );
            if !message.options.is_empty() {
                for (index, option) in message.options.iter().enumerate() {
                    println!(
                        "{}   [{}] {}",
                        BAR_CHAR.bright_cyan(),
                        index + 1,
                        option.label
                    );
                }
                *last_options = message.options;
            }
        }
        WidgetEvent::TypingChanged(_) => {}
        WidgetEvent::ViewChanged(view) => {
            if view == View::Quote {
                print_catalog();
            }
        }
        WidgetEvent::Notice(text) => {
            println!("{}⚠️  {}", BAR_CHAR.bright_yellow(), text);
        }
        WidgetEvent::OpenLink(url) => {
            println!("{}🔗 {}", BAR_CHAR.bright_cyan(), url.underline());
        }
        WidgetEvent::Idle => {
            return true;
        }
    }
    false
}

fn print_catalog() {
    for category in categories() {
        println!("{}", category.name.bold());
        for service in category.services {
            println!(
                "  +{:<24} {}$ (≈ {} FC)",
                service.id, service.price_usd, service.price_fc
            );
        }
    }
    println!(
        "Tapez {} pour ajouter ou retirer un service, puis {} pour valider.",
        "+id".bold(),
        "ok".bold()
    );
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
