use clap::Parser;
use showmail::utils::{logger, validation::Validate};
use showmail::{EpisodeSheet, FormState, ShowProfile, SystemClock};

#[derive(Debug, Parser)]
#[command(name = "sheet_check")]
#[command(about = "Reports which sheet fields are filled and which panes would render")]
struct Args {
    /// Episode sheet (TOML)
    sheet: String,

    /// Show profile (TOML); defaults to the built-in show
    #[arg(long)]
    profile: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let profile = match &args.profile {
        Some(path) => ShowProfile::from_file(path)?,
        None => ShowProfile::default(),
    };
    profile.validate()?;

    let sheet = EpisodeSheet::from_file(&args.sheet)?;
    let mut form = FormState::new(profile, SystemClock);
    sheet.populate(&mut form);

    let mark = |ready: bool| if ready { "✅" } else { "❌" };

    println!("{} episode fields", mark(form.episode_ready()));
    println!(
        "{} clip fields ({} active slot(s))",
        mark(form.clips_ready()),
        form.clip_count()
    );
    println!("{} podcast fields", mark(form.podcast_ready()));
    println!("{} username", mark(form.username_ready()));

    let outputs = form.outputs();
    let panes = [
        ("episode URL", outputs.episode_url.is_some()),
        ("publish email", outputs.publish_email.is_some()),
        ("site email", outputs.site_body.is_some()),
        ("podcast email", outputs.podcast_body.is_some()),
    ];
    println!();
    for (name, renders) in panes {
        println!("{} {}", mark(renders), name);
    }

    if !(form.episode_ready() && form.clips_ready()) {
        std::process::exit(2);
    }

    Ok(())
}
