//! # Serve Subcommand
//!
//! Runs the HTTP service over an in-memory or file-backed register.
//! Bearer tokens for the static verifier are supplied as repeatable
//! `--token ROLE:TOKEN[:USER[:AGENCY]]` flags; with no tokens the
//! service runs in open development mode.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Args;

use bgts_api::auth::{AuthConfig, CallerIdentity, Role, StaticTokenVerifier};
use bgts_api::AppState;
use bgts_store::{demo, Directory, FileStore, GiftStore, MemoryStore, PenaltyRegister};

/// Arguments for `bgts serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Data directory for the file-backed register. In-memory when absent.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Static bearer token, ROLE:TOKEN[:USER[:AGENCY]] where ROLE is
    /// `admin` or `servant`. Repeatable. With no tokens, authentication
    /// is disabled (open development mode).
    #[arg(long = "token")]
    pub tokens: Vec<String>,

    /// Seed demo users, agencies, penalties, and declarations.
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}

/// Run the HTTP service until interrupted.
pub fn run_serve(args: &ServeArgs) -> Result<u8> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(serve(args))
}

async fn serve(args: &ServeArgs) -> Result<u8> {
    let state = build_state(args)?;
    let auth = build_auth(&args.tokens)?;
    if auth.verifier.is_none() {
        tracing::warn!("no tokens configured; serving in open development mode");
    }

    let app = bgts_api::app(state, auth);
    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "BGTS API listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(0)
}

/// Assemble application state from the chosen backend and demo flag.
fn build_state(args: &ServeArgs) -> Result<AppState> {
    let gifts: Arc<dyn GiftStore> = match &args.data_dir {
        Some(dir) => {
            tracing::info!(data_dir = %dir.display(), "using file-backed register");
            Arc::new(FileStore::open(dir))
        }
        None if args.demo => Arc::new(MemoryStore::with_declarations(demo::demo_declarations(
            Utc::now(),
        ))),
        None => Arc::new(MemoryStore::new()),
    };

    let mut state = AppState::with_store(gifts);
    if args.demo {
        state = state
            .with_penalties(PenaltyRegister::with_records(demo::demo_penalties()))
            .with_directory(Directory {
                users: demo::demo_users(),
                agencies: demo::demo_agencies(),
            });
    }
    Ok(state)
}

/// Build the auth configuration from `--token` specs.
pub(crate) fn build_auth(specs: &[String]) -> Result<AuthConfig> {
    if specs.is_empty() {
        return Ok(AuthConfig::default());
    }

    let mut verifier = StaticTokenVerifier::new();
    for spec in specs {
        let (token, identity) = parse_token_spec(spec)?;
        verifier.insert(token, identity);
    }
    Ok(AuthConfig {
        verifier: Some(Arc::new(verifier)),
    })
}

/// Parse a `ROLE:TOKEN[:USER[:AGENCY]]` token spec.
pub(crate) fn parse_token_spec(spec: &str) -> Result<(String, CallerIdentity)> {
    let mut parts = spec.splitn(4, ':');

    let role = match parts.next().unwrap_or_default() {
        "admin" | "administrator" => Role::Administrator,
        "servant" | "public-servant" => Role::PublicServant,
        other => bail!("unknown role {other:?} in token spec (use admin or servant)"),
    };

    let token = match parts.next() {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => bail!("token spec {spec:?} is missing the token"),
    };

    let user_id = parts
        .next()
        .filter(|u| !u.is_empty())
        .map(String::from)
        .unwrap_or_else(|| {
            match role {
                Role::Administrator => "admin",
                Role::PublicServant => "servant",
            }
            .to_string()
        });
    let agency = parts.next().filter(|a| !a.is_empty()).map(String::from);

    Ok((
        token,
        CallerIdentity {
            role,
            user_id,
            agency,
        },
    ))
}
