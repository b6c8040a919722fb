//! # Data Directory Subcommands
//!
//! Seed a data directory with demo fixtures and inspect the declarations
//! it holds. Both operate on the same JSON array files the file-backed
//! store serves from.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Args;

use bgts_store::file::GIFTS_FILE;
use bgts_store::{demo, CallerScope, Directory, FileStore, GiftStore};

/// Arguments for `bgts seed`.
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Data directory to seed.
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Overwrite existing files.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

/// Write demo users, agencies, and declarations into a data directory.
pub fn run_seed(args: &SeedArgs) -> Result<u8> {
    let gifts_path = args.data_dir.join(GIFTS_FILE);
    if gifts_path.exists() && !args.force {
        bail!(
            "refusing to overwrite {} (pass --force to replace it)",
            gifts_path.display()
        );
    }

    std::fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("failed to create {}", args.data_dir.display()))?;

    let directory = Directory {
        users: demo::demo_users(),
        agencies: demo::demo_agencies(),
    };
    directory
        .save(&args.data_dir)
        .context("failed to write directory files")?;

    let declarations = demo::demo_declarations(Utc::now());
    let json = serde_json::to_string_pretty(&declarations)?;
    std::fs::write(&gifts_path, json)
        .with_context(|| format!("failed to write {}", gifts_path.display()))?;

    println!(
        "OK: seeded {} with {} users, {} agencies, {} declarations",
        args.data_dir.display(),
        directory.users.len(),
        directory.agencies.len(),
        declarations.len()
    );
    Ok(0)
}

/// Arguments for `bgts list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Data directory holding the register.
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Restrict to declarations by this user.
    #[arg(long)]
    pub owner: Option<String>,

    /// Restrict to declarations under this agency.
    #[arg(long, conflicts_with = "owner")]
    pub agency: Option<String>,

    /// Output machine-readable JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Print the declarations held in a data directory.
pub fn run_list(args: &ListArgs) -> Result<u8> {
    let store = FileStore::open(&args.data_dir);
    let scope = match (&args.owner, &args.agency) {
        (Some(owner), _) => CallerScope::Owner(owner.clone()),
        (None, Some(agency)) => CallerScope::Agency(agency.clone()),
        (None, None) => CallerScope::Unrestricted,
    };

    let declarations = store
        .list(&scope)
        .context("failed to read the declaration register")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&declarations)?);
        return Ok(0);
    }

    if declarations.is_empty() {
        println!("No declarations.");
        return Ok(0);
    }

    for declaration in &declarations {
        println!(
            "{}  {:<10}  {:>12}  {}  ({})",
            declaration.reference,
            declaration.status,
            bgts_core::penalty::format_ngultrum(declaration.value),
            declaration.description,
            declaration.declared_by,
        );
    }
    println!("{} declaration(s)", declarations.len());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_writes_all_three_entity_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = SeedArgs {
            data_dir: dir.path().to_path_buf(),
            force: false,
        };
        assert_eq!(run_seed(&args).unwrap(), 0);
        assert!(dir.path().join("gifts.json").exists());
        assert!(dir.path().join("users.json").exists());
        assert!(dir.path().join("agencies.json").exists());
    }

    #[test]
    fn seed_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let args = SeedArgs {
            data_dir: dir.path().to_path_buf(),
            force: false,
        };
        run_seed(&args).unwrap();
        assert!(run_seed(&args).is_err());

        let forced = SeedArgs {
            data_dir: dir.path().to_path_buf(),
            force: true,
        };
        assert_eq!(run_seed(&forced).unwrap(), 0);
    }

    #[test]
    fn list_reads_back_seeded_declarations() {
        let dir = tempfile::tempdir().unwrap();
        run_seed(&SeedArgs {
            data_dir: dir.path().to_path_buf(),
            force: false,
        })
        .unwrap();

        let args = ListArgs {
            data_dir: dir.path().to_path_buf(),
            owner: None,
            agency: None,
            json: true,
        };
        assert_eq!(run_list(&args).unwrap(), 0);

        let scoped = ListArgs {
            data_dir: dir.path().to_path_buf(),
            owner: Some("tashi.sherpa".into()),
            agency: None,
            json: false,
        };
        assert_eq!(run_list(&scoped).unwrap(), 0);
    }

    #[test]
    fn list_of_empty_directory_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let args = ListArgs {
            data_dir: dir.path().to_path_buf(),
            owner: None,
            agency: None,
            json: false,
        };
        assert_eq!(run_list(&args).unwrap(), 0);
    }
}
