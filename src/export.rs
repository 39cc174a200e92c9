//! The chat-then-export workflow.
//!
//! One POST to `/api/chat`, then (only if a conversation id came back) one GET
//! to `/export/session`, then the archive is written to disk. Strictly
//! sequential; each call gets its own timeout.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    client::Client,
    config::DemoConfig,
    error::{Error, Result},
    types::ChatRequest,
};

/// How a run ended when nothing went fatally wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Archive downloaded and written.
    Exported {
        /// Where the archive was written.
        path: PathBuf,
        /// Archive size in bytes.
        bytes: usize,
    },
    /// The chat reply carried no conversation id, so nothing was exported.
    MissingConversationId,
}

impl RunOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Exported { .. } => 0,
            RunOutcome::MissingConversationId => 1,
        }
    }
}

/// `<out_dir>/<conversation_id>_session.zip`
///
/// The id is used as-is, so it may name a subdirectory of `out_dir`, but an id
/// that is absolute or climbs out with `..` is rejected.
pub fn session_archive_path(out_dir: &Path, conversation_id: &str) -> Result<PathBuf> {
    let file_name = format!("{conversation_id}_session.zip");
    let relative = Path::new(&file_name);
    let stays_inside = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !stays_inside {
        return Err(Error::Protocol(format!(
            "conversation_id {conversation_id:?} would write outside {}",
            out_dir.display()
        )));
    }
    Ok(out_dir.join(relative))
}

/// Run the demo against the configured server.
///
/// Transport, status and decoding failures are returned as errors. A reply
/// without a conversation id is a normal outcome and is reported on stdout.
pub async fn run(config: &DemoConfig) -> Result<RunOutcome> {
    let client = Client::new(&config.base_url)?;

    let request = ChatRequest::new(config.text.clone(), config.mock);
    let chat = client.chat(&request, config.timeout).await?;
    info!(
        name: "chat.response.received",
        base_url = %client.base_url(),
        conversation_id = ?chat.conversation_id,
        "Chat turn completed"
    );

    let Some(conversation_id) = chat.conversation_id else {
        warn!(name: "chat.response.missing_id", "Chat response had no conversation_id");
        println!("No conversation_id returned from /api/chat");
        return Ok(RunOutcome::MissingConversationId);
    };
    debug!(
        name: "chat.response.fields",
        fields = ?chat.extra.keys().collect::<Vec<_>>(),
        "Additional chat response fields"
    );

    let path = session_archive_path(&config.out_dir, &conversation_id)?;

    let archive = client
        .export_session(&conversation_id, config.timeout)
        .await?;
    info!(
        name: "export.session.fetched",
        conversation_id = %conversation_id,
        bytes = archive.len(),
        "Session export downloaded"
    );

    tokio::fs::create_dir_all(&config.out_dir).await?;
    tokio::fs::write(&path, &archive).await?;
    info!(
        name: "export.session.written",
        path = %path.display(),
        "Session archive written"
    );

    println!("Exported: {}", path.display());
    Ok(RunOutcome::Exported {
        path,
        bytes: archive.len(),
    })
}
