//! lead-form - submit a lead from the command line
//!
//! Wires the form controller to a console renderer and the HTTP transport,
//! feeds it field values from the arguments, and submits once.

use std::time::Instant;

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lead_form::config::FormConfig;
use lead_form::controller::FormController;
use lead_form::render::ConsoleRenderer;
use lead_form::transport::{HttpTransport, SubmissionOutcome};

struct Args {
    preset: Option<String>,
    endpoint: Option<String>,
    name: String,
    email: String,
    phone: String,
    message: String,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        preset: None,
        endpoint: None,
        name: String::new(),
        email: String::new(),
        phone: String::new(),
        message: String::new(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let value = match flag.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => iter
                .next()
                .ok_or_else(|| anyhow!("missing value for {flag}"))?,
        };
        match flag.as_str() {
            "--preset" => args.preset = Some(value),
            "--endpoint" => args.endpoint = Some(value),
            "--name" => args.name = value,
            "--email" => args.email = value,
            "--phone" => args.phone = value,
            "--message" => args.message = value,
            other => return Err(anyhow!("unknown flag {other}")),
        }
    }

    Ok(args)
}

fn print_usage() {
    eprintln!(
        "usage: lead-form [--preset ebook|local-service|course|writer] \
         [--endpoint URL] --name NAME --email EMAIL [--phone PHONE] [--message TEXT]"
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {err}");
            print_usage();
            std::process::exit(2);
        }
    };

    let mut config = match &args.preset {
        Some(name) => {
            FormConfig::preset(name).ok_or_else(|| anyhow!("unknown preset {name}"))?
        }
        None => FormConfig::load()?,
    };
    if args.endpoint.is_some() {
        config.endpoint = args.endpoint.clone();
    }
    if let Ok(endpoint) = std::env::var("LEAD_FORM_ENDPOINT") {
        config.endpoint = Some(endpoint);
    }

    let endpoint = config
        .endpoint
        .clone()
        .ok_or_else(|| anyhow!("no endpoint configured (use --endpoint or LEAD_FORM_ENDPOINT)"))?;

    let transport = HttpTransport::new(&endpoint, config.submit_timeout())?;
    let success_feedback = config.success_feedback();
    let mut controller = FormController::new(config, transport, ConsoleRenderer);

    controller.field_changed("name", &args.name);
    controller.field_changed("email", &args.email);
    controller.field_changed("phone", &args.phone);
    if !args.message.is_empty() {
        controller.field_changed("message", &args.message);
    }

    match controller.submit_requested().await {
        Some(SubmissionOutcome::Success) => {
            // Let timed feedback run its course before exiting
            if let Some(duration) = success_feedback {
                tokio::time::sleep(duration).await;
                controller.tick(Instant::now());
            }
            Ok(())
        }
        Some(SubmissionOutcome::Failure(_)) | None => std::process::exit(1),
    }
}
