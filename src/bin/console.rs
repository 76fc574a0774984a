//! Console host for the prompt dialogs
//!
//! Each stdin line is one inbound message. A line of the form
//! `attach:<content-type>[ <url>]` carries an attachment instead of text.
//! Outbound messages are printed to stdout as JSON, logs go to stderr.

use tokio::io::{AsyncBufReadExt, BufReader};
use toybox_prompts::dialog::{begin, continue_active};
use toybox_prompts::{
    Activity, Attachment, AttachmentPrompt, ConfirmPrompt, DialogTurn, PromptConfig,
    PromptError, PromptOptions, TurnContext,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy)]
enum Stage {
    Confirming,
    Uploading,
}

fn parse_line(line: &str) -> Activity {
    match line.strip_prefix("attach:") {
        Some(rest) => {
            let mut parts = rest.split_whitespace();
            let content_type = parts.next().unwrap_or("application/octet-stream");
            let mut attachment = Attachment::new(content_type);
            if let Some(url) = parts.next() {
                attachment = attachment.with_url(url);
            }
            Activity::default().with_attachments(vec![attachment])
        }
        None => Activity::message(line),
    }
}

fn require_attachment(
    _ctx: &TurnContext,
    values: Option<Vec<Attachment>>,
) -> Result<Option<Vec<Attachment>>, PromptError> {
    match values {
        Some(v) if !v.is_empty() => Ok(Some(v)),
        _ => Err(PromptError::validation("no attachment in reply")),
    }
}

fn flush(turn: &mut TurnContext) -> Result<(), serde_json::Error> {
    for activity in turn.take_responses() {
        println!("{}", serde_json::to_string(&activity)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toybox_prompts=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = PromptConfig::from_env();
    tracing::info!(locale = %config.locale, "Prompt console started");

    let confirm = ConfirmPrompt::with_config(&config);
    let upload = AttachmentPrompt::with_validator(require_attachment).with_config(config);

    let mut slot = None;
    let mut turn = TurnContext::empty();
    let args = PromptOptions::new()
        .with_prompt("Do you want to upload a file?")
        .with_retry_prompt("Please answer yes or no.");
    begin(&confirm, &mut slot, &mut turn, args).await?;
    flush(&mut turn)?;

    let mut stage = Stage::Confirming;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let mut turn = TurnContext::new(parse_line(line.trim()));

        match stage {
            Stage::Confirming => match continue_active(&confirm, &mut slot, &mut turn).await? {
                Some(DialogTurn::Complete(true)) => {
                    upload.prompt(&mut turn, "Send me a file.", Some("Send me a file."));
                    stage = Stage::Uploading;
                }
                Some(DialogTurn::Complete(false)) => {
                    turn.push_response(Activity::message("Okay, maybe later."));
                    flush(&mut turn)?;
                    break;
                }
                Some(DialogTurn::Waiting) | None => {}
            },
            Stage::Uploading => match upload.recognize(&turn).await {
                Ok(Some(files)) => {
                    let types: Vec<_> = files.iter().map(|a| a.content_type.as_str()).collect();
                    tracing::info!(count = files.len(), "Attachments received");
                    turn.push_response(Activity::message(format!("Got {}.", types.join(", "))));
                    flush(&mut turn)?;
                    break;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Upload rejected");
                    upload.prompt(&mut turn, "That had no file in it. Send me a file.", None);
                }
            },
        }

        flush(&mut turn)?;
    }

    Ok(())
}
