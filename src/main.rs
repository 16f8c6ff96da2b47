use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use star_date::{
    CalendarDate, DateError, DateReport, Locale, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
    RenderOptions, read_int_in_range, validate_date,
};

/// Weekday, leap year and age for a birth date, with the date drawn in stars.
#[derive(Parser, Debug)]
#[command(name = "star-date")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Birth date as DD.MM.YYYY or YYYY-MM-DD; prompts when omitted
    #[arg(short = 'd', long)]
    date: Option<String>,

    /// Reference date the age is computed against
    #[arg(short = 't', long, env = "STAR_DATE_TODAY")]
    today: Option<CalendarDate>,

    /// Output language
    #[arg(short = 'l', long, value_enum, default_value_t = Locale::English)]
    locale: Locale,

    /// Spaces between digits of the same group
    #[arg(long, default_value_t = star_date::DEFAULT_DIGIT_SPACING)]
    digit_spacing: usize,

    /// Spaces around the gap between day, month and year
    #[arg(long, default_value_t = star_date::DEFAULT_GROUP_SPACING)]
    group_spacing: usize,

    /// Character used for glyph strokes
    #[arg(long, default_value_t = star_date::GLYPH_STROKE)]
    fill: char,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("star_date={log_level}")),
        ))
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let reference = args.today.unwrap_or_else(CalendarDate::reference);
    tracing::debug!(%reference, locale = ?args.locale, "starting");

    let birth = match &args.date {
        Some(text) => text.parse::<CalendarDate>(),
        None => prompt_birth_date(args.locale)?,
    };

    let birth = match birth {
        Ok(date) => date,
        Err(err @ (DateError::InvalidFormat(_) | DateError::EmptyInput)) => {
            bail!("cannot read date {:?}: {err}", args.date.as_deref().unwrap_or_default())
        }
        Err(err) => {
            tracing::debug!(%err, "date does not exist");
            eprintln!("{}", args.locale.strings().invalid_date);
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = DateReport::new(birth, reference);
    let mut stdout = io::stdout().lock();

    if args.json {
        writeln!(stdout, "{}", report.to_json()?)?;
    } else {
        let options = RenderOptions {
            digit_spacing: args.digit_spacing,
            group_spacing: args.group_spacing,
            fill: args.fill,
        };
        writeln!(stdout)?;
        writeln!(stdout, "{}", report.to_text_with_stars(args.locale, &options))?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Asks for day, month and year, then validates the combination once.
fn prompt_birth_date(locale: Locale) -> Result<Result<CalendarDate, DateError>> {
    let strings = locale.strings();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    writeln!(output, "{}", strings.enter_birth_date)?;
    let day = read_int_in_range(
        &mut input,
        &mut output,
        strings.day_prompt,
        i64::from(MIN_DAY)..=i64::from(MAX_DAY),
        locale,
    )
    .context("reading day")?;
    let month = read_int_in_range(
        &mut input,
        &mut output,
        strings.month_prompt,
        1..=i64::from(MAX_MONTH),
        locale,
    )
    .context("reading month")?;
    let year = read_int_in_range(
        &mut input,
        &mut output,
        strings.year_prompt,
        i64::from(MIN_YEAR)..=i64::from(MAX_YEAR),
        locale,
    )
    .context("reading year")?;

    Ok(validate_date(day, month, year))
}
