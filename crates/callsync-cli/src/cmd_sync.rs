use callsync_client::{ClientError, Destination, ElevenLabsClient, Source, TunerClient};
use callsync_core::{Config, SyncWindow};
use callsync_transcript::build_call_request;
use time::OffsetDateTime;

// ── Per-run report ──

pub struct SyncSuccess {
    pub conversation_id: String,
    /// Tuner-assigned call id; None for dry runs.
    pub tuner_call_id: Option<i64>,
}

pub struct SyncFailure {
    pub conversation_id: String,
    pub error: String,
}

pub struct SyncReport {
    pub attempted: usize,
    pub succeeded: Vec<SyncSuccess>,
    pub failed: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn summary(&self) -> String {
        format!(
            "{} attempted, {} succeeded, {} failed",
            self.attempted,
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

// ── Command entry ──

pub fn execute(
    config: &Config,
    hours: Option<u64>,
    start: Option<i64>,
    end: Option<i64>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let window = SyncWindow::resolve(
        now,
        hours.unwrap_or(config.window_hours),
        start.or(config.window_start),
        end.or(config.window_end),
    )?;

    println!(
        "Syncing agent {} over {}",
        config.elevenlabs_agent_id,
        window.describe()
    );
    if dry_run {
        println!("Dry run: nothing will be uploaded.");
    }

    let source = ElevenLabsClient::new(
        config.elevenlabs_api_key.clone(),
        config.elevenlabs_agent_id.clone(),
    );
    let destination = TunerClient::new(
        config.tuner_api_key.clone(),
        config.tuner_api_url.clone(),
        config.tuner_workspace_id.clone(),
        config.tuner_agent_remote_identifier.clone(),
    );

    let report = run_sync(&source, &destination, &window, now, dry_run)?;

    println!();
    println!("Summary: {}", report.summary());
    for failure in &report.failed {
        println!("  ERR {}: {}", failure.conversation_id, failure.error);
    }
    Ok(())
}

// ── Driver ──

/// One sync run: list, filter to the window, then fetch/map/submit each
/// conversation in listing order. A listing failure aborts the run; every
/// later failure is recorded against its conversation and the run
/// continues.
pub fn run_sync(
    source: &impl Source,
    destination: &impl Destination,
    window: &SyncWindow,
    now_unix: i64,
    dry_run: bool,
) -> Result<SyncReport, ClientError> {
    let summaries = source.list_conversations(window)?;
    let listed = summaries.len();

    // The API filters by window too, but its listing granularity may
    // return a superset. Membership here is exact and inclusive.
    let in_window: Vec<_> = summaries
        .into_iter()
        .filter(|s| s.start_time_unix_secs.is_some_and(|t| window.contains(t)))
        .collect();
    println!(
        "{} conversation(s) in window ({} listed)",
        in_window.len(),
        listed
    );

    let total = in_window.len();
    let mut succeeded = Vec::new();
    let mut failed = Vec::new();

    for (idx, summary) in in_window.iter().enumerate() {
        let conversation_id = &summary.conversation_id;
        match sync_one(source, destination, conversation_id, now_unix, dry_run) {
            Ok(tuner_call_id) => {
                match tuner_call_id {
                    Some(id) => println!("  [{}/{total}] OK {conversation_id} -> call {id}", idx + 1),
                    None => println!("  [{}/{total}] OK {conversation_id} (dry run)", idx + 1),
                }
                succeeded.push(SyncSuccess {
                    conversation_id: conversation_id.clone(),
                    tuner_call_id,
                });
            }
            Err(error) => {
                println!("  [{}/{total}] ERR {conversation_id}: {error}", idx + 1);
                failed.push(SyncFailure {
                    conversation_id: conversation_id.clone(),
                    error,
                });
            }
        }
    }

    Ok(SyncReport {
        attempted: total,
        succeeded,
        failed,
    })
}

fn sync_one(
    source: &impl Source,
    destination: &impl Destination,
    conversation_id: &str,
    now_unix: i64,
    dry_run: bool,
) -> Result<Option<i64>, String> {
    let conversation = source
        .fetch_conversation(conversation_id)
        .map_err(|e| e.to_string())?;
    let request = build_call_request(&conversation, now_unix).map_err(|e| e.to_string())?;
    if dry_run {
        return Ok(None);
    }
    let response = destination
        .create_call(&request)
        .map_err(|e| e.to_string())?;
    Ok(Some(response.id))
}
