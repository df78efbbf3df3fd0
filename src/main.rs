use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

use intake::{
    AttachedFile, BrandConfig, IntakeController, IntakeForm, JsonFileStore, SubmitError,
    TicketStore,
};

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Client intake for translation requests")]
#[command(version)]
struct Cli {
    /// Path to the record store (defaults to the platform data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Path to the branding config file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a translation request
    Submit(FieldArgs),

    /// Compose an outbound message link from the current field values
    Compose(FieldArgs),

    /// List stored intake records
    Ls,
}

#[derive(Args)]
struct FieldArgs {
    /// Full name
    #[arg(long)]
    name: Option<String>,

    /// Phone number with country code
    #[arg(long)]
    phone: Option<String>,

    /// Email address (optional)
    #[arg(long)]
    email: Option<String>,

    /// Document type: Passport, Birth Certificate, Marriage Certificate,
    /// Academic Record, Contract, Legal Document, Other
    #[arg(long)]
    doc_type: Option<String>,

    /// Description of the document when the type is Other
    #[arg(long)]
    doc_other: Option<String>,

    /// Source language
    #[arg(long)]
    from: Option<String>,

    /// Target language
    #[arg(long)]
    to: Option<String>,

    /// Translation type: Certified, Legal, General
    #[arg(long = "type")]
    translation_type: Option<String>,

    /// Requesting authority (optional)
    #[arg(long)]
    authority: Option<String>,

    /// Page count
    #[arg(long)]
    pages: Option<String>,

    /// Deadline date
    #[arg(long)]
    deadline: Option<String>,

    /// Free-form notes (optional)
    #[arg(long)]
    notes: Option<String>,

    /// File to attach by reference (repeatable); only its name and size are
    /// recorded, the content is never read
    #[arg(long = "file")]
    files: Vec<PathBuf>,

    /// Agree to processing of the submitted data
    #[arg(long)]
    consent: bool,
}

impl FieldArgs {
    fn into_form(self) -> intake::Result<IntakeForm> {
        let files = self
            .files
            .iter()
            .map(|path| AttachedFile::from_path(path))
            .collect::<intake::Result<Vec<_>>>()?;

        Ok(IntakeForm {
            full_name: self.name.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            doc_type: self.doc_type.unwrap_or_default(),
            doc_other: self.doc_other.unwrap_or_default(),
            from_lang: self.from.unwrap_or_default(),
            to_lang: self.to.unwrap_or_default(),
            translation_type: self.translation_type,
            authority: self.authority.unwrap_or_default(),
            pages: self.pages.unwrap_or_default(),
            deadline: self.deadline.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            files,
            consent: self.consent,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> intake::Result<ExitCode> {
    let store = match cli.store {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::open_default()?,
    };
    let config = match cli.config {
        Some(path) => BrandConfig::load(&path)?,
        None => BrandConfig::default(),
    };
    let controller = IntakeController::new(store, config);

    match cli.command {
        Commands::Submit(args) => cmd_submit(&controller, args),
        Commands::Compose(args) => cmd_compose(&controller, args),
        Commands::Ls => cmd_ls(&controller),
    }
}

fn cmd_submit(
    controller: &IntakeController<JsonFileStore>,
    args: FieldArgs,
) -> intake::Result<ExitCode> {
    let mut form = args.into_form()?;
    match controller.submit(&mut form) {
        Ok(outcome) => {
            println!("{}", "Request received.".green().bold());
            println!("Ticket: {}", outcome.ticket_id.bold());
            println!("Keep this reference for any follow-up.");
            Ok(ExitCode::SUCCESS)
        }
        Err(SubmitError::Invalid(errors)) => {
            eprintln!("{}", "Submission rejected:".red().bold());
            for error in errors.iter() {
                eprintln!("  {}: {}", error.field.yellow(), error.message);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(SubmitError::Storage(e)) => Err(e),
    }
}

fn cmd_compose(
    controller: &IntakeController<JsonFileStore>,
    args: FieldArgs,
) -> intake::Result<ExitCode> {
    let form = args.into_form()?;
    match controller.compose(&form) {
        Ok(url) => {
            println!("{url}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {e}", "cannot compose:".red().bold());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_ls(controller: &IntakeController<JsonFileStore>) -> intake::Result<ExitCode> {
    let records = controller.store().load()?;
    if records.is_empty() {
        println!("No records.");
        return Ok(ExitCode::SUCCESS);
    }
    for record in &records {
        println!(
            "{}  {}  {} → {}  {}",
            record.ticket_id.bold(),
            record.full_name,
            record.from_lang,
            record.to_lang,
            record.created_at.dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}
