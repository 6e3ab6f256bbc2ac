use clap::Parser;
use showmail::utils::error::ErrorSeverity;
use showmail::utils::{logger, validation::Validate};
use showmail::{
    CliConfig, EpisodeSheet, Field, FormState, LocalStorage, Outputs, ProfileProvider,
    ShowProfile, ShowmailError, Storage, SystemClock,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting showmail CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match &config.profile {
        Some(path) => ShowProfile::from_file(path).and_then(|profile| {
            profile.validate()?;
            render(profile, &config)
        }),
        None => render(config.clone(), &config),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Render failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn render<P: ProfileProvider>(profile: P, config: &CliConfig) -> showmail::Result<()> {
    let mut form = FormState::new(profile, SystemClock);

    apply_field_flags(&mut form, config)?;

    if let Some(path) = &config.sheet {
        tracing::info!("Loading episode sheet from {}", path);
        let sheet = EpisodeSheet::from_file(path)?;
        sheet.populate(&mut form);
    }

    let outputs = form.outputs();

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    if let Some(dir) = &config.out_dir {
        let written = write_outputs(&LocalStorage::new(dir.clone()), &outputs)?;
        println!("✅ Wrote {} rendered file(s)", written);
        println!("📁 Output saved to: {}", dir);
        return Ok(());
    }

    print_outputs(&outputs);
    Ok(())
}

fn apply_field_flags<P: ProfileProvider, C: showmail::Clock>(
    form: &mut FormState<P, C>,
    config: &CliConfig,
) -> showmail::Result<()> {
    let flags = [
        (Field::EpisodeTitle, &config.title),
        (Field::EpisodeSeason, &config.season),
        (Field::EpisodeNumber, &config.number),
        (Field::EpisodeUuid, &config.uuid),
        (Field::Username, &config.username),
        (Field::PodcastTitle, &config.pod_title),
        (Field::PodcastDescription, &config.pod_description),
        (Field::PrerollAdvertisers, &config.preroll),
        (Field::AdLocations, &config.ad_locations),
        (Field::MidrollAdvertisers, &config.midroll),
        (Field::PostrollAdvertisers, &config.postroll),
    ];
    for (field, value) in flags {
        if let Some(value) = value {
            form.set(field, value);
        }
    }

    if let Some(count) = config.clip_count {
        form.set_clip_count(count);
    }
    form.set_date_override(config.date);

    for (index, raw) in config.clips.iter().enumerate() {
        let slot = (index + 1) as u8;
        let mut parts = raw.splitn(3, '|');
        let title = parts.next().unwrap_or_default();
        let description = parts.next();
        let uuid = parts.next();
        let (description, uuid) = match (description, uuid) {
            (Some(description), Some(uuid)) => (description, uuid),
            _ => {
                return Err(ShowmailError::InvalidConfigValueError {
                    field: format!("clip {}", slot),
                    value: raw.clone(),
                    reason: "expected 'TITLE|DESCRIPTION|UUID'".to_string(),
                })
            }
        };
        form.set(Field::ClipTitle(slot), title);
        form.set(Field::ClipDescription(slot), description);
        form.set(Field::ClipUuid(slot), uuid);
    }

    Ok(())
}

fn print_pane(label: &str, content: Option<&str>) {
    println!();
    println!("=== {} ===", label);
    match content {
        Some(text) => println!("{}", text),
        None => println!("(waiting on required fields)"),
    }
}

fn print_outputs(outputs: &Outputs) {
    println!("Broadcast day: {}", outputs.date);
    if let Some(guest) = &outputs.guest {
        println!("Guests: {}", guest);
    }
    print_pane("Episode URL", outputs.episode_url.as_deref());
    print_pane("Publish email", outputs.publish_email.as_deref());
    print_pane("Site email subject", outputs.site_subject.as_deref());
    print_pane("Site email body", outputs.site_body.as_deref());
    print_pane("Podcast email subject", outputs.podcast_subject.as_deref());
    print_pane("Podcast email body", outputs.podcast_body.as_deref());
}

fn write_outputs<S: Storage>(storage: &S, outputs: &Outputs) -> showmail::Result<usize> {
    let targets: [(&str, Option<&str>); 10] = [
        ("episode-url.txt", outputs.episode_url.as_deref()),
        ("publish-email.txt", outputs.publish_email.as_deref()),
        ("publish-note.html", outputs.publish_note.as_deref()),
        ("site-subject.txt", outputs.site_subject.as_deref()),
        ("site-body.txt", outputs.site_body.as_deref()),
        ("site-script-body.html", outputs.site_script_body.as_deref()),
        (
            "download-notice.html",
            outputs.download_notice_body.as_deref(),
        ),
        ("podcast-subject.txt", outputs.podcast_subject.as_deref()),
        ("podcast-body.txt", outputs.podcast_body.as_deref()),
        (
            "podcast-script-body.html",
            outputs.podcast_script_body.as_deref(),
        ),
    ];

    let mut written = 0;
    for (name, content) in targets {
        if let Some(text) = content {
            storage.write_file(name, text.as_bytes())?;
            written += 1;
        }
    }
    Ok(written)
}
