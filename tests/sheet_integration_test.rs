use anyhow::Result;
use chrono::{Local, TimeZone};
use showmail::utils::validation::Validate;
use showmail::{EpisodeSheet, FixedClock, FormState, ShowProfile};
use std::fs;
use tempfile::TempDir;

const PROFILE_TOML: &str = r#"
[site]
base_url = "${SHEET_TEST_SITE_BASE}"

[show]
name = "Night Owls"

[podcast]
feed_url = "https://feeds.example.com/night-owls"

[clips]
min = 2
max = 4
default = 2
"#;

const SHEET_TOML: &str = r#"
username = "First Last"
date = "2026-08-06"

[episode]
title = "Opening Night - Alice"
season = "1"
number = "2"
uuid = "ep-uuid"

[[clips]]
title = "Cold Open"
description = "How it starts"
uuid = "uuid-1"

[[clips]]
title = "Alice on Fame"
description = "The interview"
uuid = "uuid-2"

[podcast]
title = "After Dark"
description = "The extras"
preroll_advertisers = "Acme"
ad_locations = "12:30, 48:00"
midroll_advertisers = "Globex"
postroll_advertisers = "Initech"
"#;

fn noon_clock() -> FixedClock {
    FixedClock(Local.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap())
}

#[test]
fn test_profile_and_sheet_files_drive_a_full_render() -> Result<()> {
    let temp_dir = TempDir::new()?;

    std::env::set_var("SHEET_TEST_SITE_BASE", "https://shows.example.com");
    let profile_path = temp_dir.path().join("night-owls.toml");
    fs::write(&profile_path, PROFILE_TOML)?;
    let sheet_path = temp_dir.path().join("opening-night.toml");
    fs::write(&sheet_path, SHEET_TOML)?;

    let profile = ShowProfile::from_file(&profile_path)?;
    profile.validate()?;
    assert_eq!(profile.site.base_url, "https://shows.example.com");
    std::env::remove_var("SHEET_TEST_SITE_BASE");

    let sheet = EpisodeSheet::from_file(&sheet_path)?;
    let mut form = FormState::new(profile, noon_clock());
    sheet.populate(&mut form);

    // two clip slots by profile default, both provided by the sheet
    assert_eq!(form.clip_count(), 2);
    assert!(form.episode_ready());
    assert!(form.clips_ready());
    assert!(form.podcast_ready());

    let outputs = form.outputs();
    // the sheet's date wins over the noon clock
    assert_eq!(outputs.date, "08/06/26");
    assert_eq!(
        outputs.episode_url.as_deref(),
        Some("https://shows.example.com/full-episodes/ep-uuid/night-owls-opening-night-alice-season-1-ep-2")
    );
    assert!(outputs.publish_email.is_some());
    assert_eq!(
        outputs.site_subject.as_deref(),
        Some("[NEW CLIPS] Night Owls - 08/06/26 - Alice")
    );
    assert!(outputs.podcast_body.is_some());
    Ok(())
}

#[test]
fn test_sheet_with_fewer_clips_than_count_stays_locked() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let sheet_path = temp_dir.path().join("short.toml");
    fs::write(
        &sheet_path,
        r#"
username = "First Last"
clip_count = 3

[episode]
title = "Opening Night"
season = "1"
number = "2"
uuid = "ep-uuid"

[[clips]]
title = "Cold Open"
description = "How it starts"
uuid = "uuid-1"
"#,
    )?;

    let sheet = EpisodeSheet::from_file(&sheet_path)?;
    let mut form = FormState::new(ShowProfile::default(), noon_clock());
    sheet.populate(&mut form);

    assert!(form.episode_ready());
    assert!(!form.clips_ready());

    let outputs = form.outputs();
    assert!(outputs.episode_url.is_some());
    assert_eq!(outputs.publish_email, None);
    assert_eq!(outputs.site_body, None);
    Ok(())
}

#[test]
fn test_missing_sheet_file_reports_io_error() {
    let err = EpisodeSheet::from_file("/nonexistent/sheet.toml").unwrap_err();
    assert!(matches!(err, showmail::ShowmailError::IoError(_)));
}
