use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{FormController, FormFields, HttpFormSubmitter, StatusTone};
use shared::forms::{ApplicationForm, ContactForm, ResumeFile};
use tracing::info;

/// Submits the site's contact and recruitment forms from a terminal.
#[derive(Parser, Debug)]
#[command(name = "site-cli")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a message through the contact form.
    Contact {
        #[arg(long)]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Apply through the recruitment form with a resume attached.
    Apply {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        resume: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();
    let submitter = HttpFormSubmitter::new(args.server_url);
    info!(server = submitter.server_url(), "submitting form");

    match args.command {
        Command::Contact {
            first_name,
            last_name,
            email,
            message,
        } => {
            let form = ContactForm {
                first_name,
                last_name,
                email,
                message,
            };
            run(FormController::with_fields(form), &submitter).await
        }
        Command::Apply {
            first_name,
            last_name,
            email,
            phone,
            description,
            resume,
        } => {
            let form = ApplicationForm {
                first_name,
                last_name,
                email,
                phone,
                description,
                resume: Some(read_resume(&resume).await?),
            };
            run(FormController::with_fields(form), &submitter).await
        }
    }
}

async fn read_resume(path: &Path) -> Result<ResumeFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading resume {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("resume path {} has no usable file name", path.display()))?;
    let content_type = mime_guess::from_path(path).first_raw().map(str::to_string);
    Ok(ResumeFile {
        filename,
        content_type,
        bytes,
    })
}

async fn run<F: FormFields>(
    mut controller: FormController<F>,
    submitter: &HttpFormSubmitter,
) -> Result<()> {
    controller.submit(submitter).await;
    match controller.message() {
        Some(msg) if msg.tone == StatusTone::Success => {
            println!("{}", msg.text);
            Ok(())
        }
        Some(msg) => bail!("{}", msg.text),
        None => bail!("form was not submitted"),
    }
}
