use callsync_core::Config;

pub fn execute(config: &Config) -> anyhow::Result<()> {
    println!("ElevenLabs:");
    println!("  api_key:  {}", redact(&config.elevenlabs_api_key));
    println!("  agent_id: {}", config.elevenlabs_agent_id);
    println!("Tuner:");
    println!("  api_key:      {}", redact(&config.tuner_api_key));
    println!("  api_url:      {}", config.tuner_api_url);
    println!("  workspace_id: {}", config.tuner_workspace_id);
    println!(
        "  agent_remote_identifier: {}",
        config.tuner_agent_remote_identifier
    );
    println!("Window:");
    println!("  hours: {}", config.window_hours);
    match (config.window_start, config.window_end) {
        (Some(start), Some(end)) => println!("  explicit: {start} .. {end}"),
        _ => println!("  explicit: (not set)"),
    }
    Ok(())
}

fn redact(secret: &str) -> String {
    if secret.len() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", &secret[..4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_keeps_short_prefix_only() {
        assert_eq!(redact("sk-abcdef123456"), "sk-a****");
    }

    #[test]
    fn redact_short_secret_entirely() {
        assert_eq!(redact("abc"), "****");
        assert_eq!(redact(""), "****");
    }
}
