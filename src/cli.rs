use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use otdb_application::{
    error::AppError,
    prelude as flows,
    state::{AppState, LoadPhase},
};
use otdb_core::{repositories::UserRepo, usecases};
use otdb_db_memory::MemoryDb;
use otdb_entities::{entry::EntryKind, user::Role};

use crate::{bootstrap, config, gateways};

#[derive(Parser, Debug)]
#[command(author, version, about = "Community tree map backend")]
pub struct Args {
    /// Configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the number of stored entries and users
    Stats,
    /// Write the whole store to a snapshot file
    Export {
        /// Target file
        file: PathBuf,
    },
    /// Load records from a snapshot file into the store
    Import {
        /// Source file
        file: PathBuf,
    },
    /// Change the role of a user account
    SetRole {
        /// Email of the admin account making the change
        #[arg(long)]
        actor: String,
        /// Email of the affected account
        #[arg(long)]
        email: String,
        /// New role: guest, user, moderator or admin
        #[arg(long)]
        role: String,
    },
    /// Assign a status to suggestions or damage reports
    Review {
        /// Email of the moderator account making the change
        #[arg(long)]
        actor: String,
        /// Entry kind: suggestion or report
        #[arg(long)]
        kind: String,
        /// Ids of the entries to review
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
        /// The status to assign
        #[arg(long)]
        status: String,
    },
}

pub async fn run(args: Args) -> Result<()> {
    let cfg = config::Config::try_load_from_file_or_default(args.config_file.as_deref())?;
    match args.command {
        None => run_app(&cfg).await,
        Some(Command::Stats) => stats(&cfg),
        Some(Command::Export { file }) => export(&cfg, &file),
        Some(Command::Import { file }) => import(&cfg, &file),
        Some(Command::SetRole { actor, email, role }) => set_role(&cfg, &actor, &email, &role),
        Some(Command::Review {
            actor,
            kind,
            ids,
            status,
        }) => review(&cfg, &actor, &kind, &ids, &status),
    }
}

async fn run_app(cfg: &config::Config) -> Result<()> {
    let db = open_store(cfg)?;

    // Wire the gateways first so a broken deployment fails before the
    // startup fetch.
    let _images = gateways::image_storage(&cfg.image_storage)?;
    let _notify = gateways::notification_gateway(&cfg.notifications);

    let fetch_limit = cfg.entries.fetch_limit;
    let state = {
        let db = db.clone();
        bootstrap::load_initial_state(
            cfg.region.center(),
            cfg.bootstrap.fetch_deadline,
            move |state| flows::fetch_snapshot(state, &db, fetch_limit),
        )
        .await
    };

    let collections = state.collections();
    println!(
        "Loaded {} suggestions, {} damage reports, {} highlights and {} users",
        collections.suggestions.len(),
        collections.reports.len(),
        collections.highlights.len(),
        collections.users.len()
    );
    if state.load_phase() == LoadPhase::Degraded {
        if let Some(notice) = state.notice() {
            println!("Warning: {}", notice.message);
        }
    }
    Ok(())
}

fn open_store(cfg: &config::Config) -> Result<MemoryDb> {
    let db = MemoryDb::init();
    let path = &cfg.db.snapshot_file;
    match flows::read_snapshot_file(path) {
        Ok(snapshot) => {
            let count = flows::import_snapshot(&db, snapshot)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            log::info!("Loaded {count} records from {}", path.display());
        }
        Err(AppError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            log::info!(
                "No snapshot at {} yet, the store starts empty",
                path.display()
            );
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    }
    Ok(db)
}

fn save_store(cfg: &config::Config, db: &MemoryDb) -> Result<()> {
    let path = &cfg.db.snapshot_file;
    let snapshot = flows::export_snapshot(db)?;
    flows::write_snapshot_file(path, &snapshot)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn signed_in_state(cfg: &config::Config, db: &MemoryDb, actor: &str) -> Result<AppState> {
    let account = db
        .try_get_user_by_email(actor)?
        .ok_or_else(|| anyhow!("No account with email {actor}"))?;
    let mut state = AppState::new(cfg.region.center());
    state.set_session(account);
    Ok(state)
}

fn stats(cfg: &config::Config) -> Result<()> {
    let db = open_store(cfg)?;
    let counts = usecases::entry_counts(&db)?;
    println!("Suggestions: {:>6}", counts.suggestions);
    println!("Reports:     {:>6}", counts.reports);
    println!("Highlights:  {:>6}", counts.highlights);
    println!("Users:       {:>6}", counts.users);
    Ok(())
}

fn export(cfg: &config::Config, file: &Path) -> Result<()> {
    let db = open_store(cfg)?;
    let snapshot = flows::export_snapshot(&db)?;
    flows::write_snapshot_file(file, &snapshot)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    println!("Exported the store to {}", file.display());
    Ok(())
}

fn import(cfg: &config::Config, file: &Path) -> Result<()> {
    let db = open_store(cfg)?;
    let snapshot = flows::read_snapshot_file(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let count = flows::import_snapshot(&db, snapshot)?;
    save_store(cfg, &db)?;
    println!("Imported {count} records from {}", file.display());
    Ok(())
}

fn set_role(cfg: &config::Config, actor: &str, email: &str, role: &str) -> Result<()> {
    let role: Role = role.parse().map_err(|_| anyhow!("Unknown role: {role}"))?;
    let db = open_store(cfg)?;
    let mut state = signed_in_state(cfg, &db, actor)?;
    let notify = gateways::notification_gateway(&cfg.notifications);
    flows::change_user_role(&mut state, &db, &notify, email, role)?;
    save_store(cfg, &db)?;
    println!("{email} is now a {role}");
    Ok(())
}

fn review(
    cfg: &config::Config,
    actor: &str,
    kind: &str,
    ids: &[String],
    status: &str,
) -> Result<()> {
    let kind: EntryKind = kind
        .parse()
        .map_err(|_| anyhow!("Unknown entry kind: {kind}"))?;
    let db = open_store(cfg)?;
    let mut state = signed_in_state(cfg, &db, actor)?;
    let notify = gateways::notification_gateway(&cfg.notifications);
    let ids: Vec<_> = ids.iter().map(String::as_str).collect();
    let count = match kind {
        EntryKind::Suggestion => {
            let status = status
                .parse()
                .map_err(|_| anyhow!("Unknown suggestion status: {status}"))?;
            flows::review_suggestions(&mut state, &db, &notify, &ids, status)?
        }
        EntryKind::Report => {
            let status = status
                .parse()
                .map_err(|_| anyhow!("Unknown report status: {status}"))?;
            flows::review_reports(&mut state, &db, &notify, &ids, status)?
        }
        EntryKind::Highlight => bail!("Highlights have no status to review"),
    };
    save_store(cfg, &db)?;
    println!("Updated {count} entries");
    Ok(())
}
