// Showroom - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Catalog loading (built-in or user file)
// 4. Dispatching the chosen command to query, render and export code

use clap::{Parser, Subcommand, ValueEnum};
use showroom::app::booking::{BookingDesk, BookingRequest};
use showroom::app::rotation::{RotationTick, RotationTimer};
use showroom::app::{loader, session};
use showroom::app::state::BrowseState;
use showroom::core::carousel::Carousel;
use showroom::core::catalog::Catalog;
use showroom::core::export;
use showroom::core::query::{CategoryFilter, Lookup, PackageFilter, SortCriterion};
use showroom::platform::config::{self, AppConfig, PlatformPaths};
use showroom::ui::{cards, detail};
use showroom::util;
use showroom::util::constants;
use showroom::util::error::ShowroomError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

/// Showroom - browse an interior-design package catalog.
///
/// Lists, sorts and filters design packages, shows package details with
/// related suggestions, rotates featured slides and exports the catalog.
#[derive(Parser, Debug)]
#[command(name = "showroom", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    /// JSON catalog file to use instead of the built-in catalog.
    #[arg(long = "catalog", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List packages, optionally sorted and filtered.
    List {
        /// Sort key: recommended, price-low, price-high, rating, level-basic,
        /// level-premium, title-asc, title-desc, recent.
        #[arg(short = 's', long)]
        sort: Option<String>,

        /// Category label, or "all".
        #[arg(short = 'c', long)]
        category: Option<String>,

        /// Case-insensitive substring matched against titles.
        #[arg(long)]
        search: Option<String>,

        /// Regular expression matched against titles and descriptions.
        #[arg(long)]
        regex: Option<String>,

        /// Save the sort key and category for the next run.
        #[arg(long)]
        remember: bool,
    },

    /// Show one package by slug, with related packages.
    Show { slug: String },

    /// List distinct categories in catalog order.
    Categories,

    /// List packages related to a slug.
    Related {
        slug: String,

        /// Maximum number of related packages.
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Print every customer testimonial.
    Testimonials,

    /// Rotate through the featured slides (or testimonials) on a timer.
    Carousel {
        /// Number of automatic advances before exiting.
        #[arg(long, default_value_t = 3)]
        ticks: u32,

        /// Override the configured rotation interval.
        #[arg(long = "interval-ms")]
        interval_ms: Option<u64>,

        /// Rotate testimonials instead of featured packages.
        #[arg(long)]
        testimonials: bool,
    },

    /// Export the catalog in the given format.
    Export {
        #[arg(short = 'f', long, value_enum)]
        format: ExportFormat,

        /// Output file (stdout if omitted).
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Sort key applied before export.
        #[arg(short = 's', long)]
        sort: Option<String>,
    },

    /// Submit a consultation booking request.
    Book {
        /// Design option id.
        #[arg(long = "option", default_value = constants::DEFAULT_DESIGN_OPTION)]
        option: String,

        /// List the available design options and exit.
        #[arg(long)]
        list: bool,

        #[arg(long, default_value = "")]
        pickup: String,

        #[arg(long, default_value = "")]
        destination: String,

        /// Date as YYYY-MM-DD.
        #[arg(long, default_value = "")]
        date: String,

        /// Time as HH:MM.
        #[arg(long, default_value = "")]
        time: String,

        #[arg(long, default_value_t = 1)]
        passengers: u32,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        phone: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let (app_config, config_warnings) = config::load_config(&platform_paths.config_file());

    util::logging::init(
        cli.debug,
        app_config.log_level.as_deref(),
        app_config.log_file.as_deref(),
    );

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "Showroom starting"
    );

    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Configuration problem, using default");
    }

    match run(cli, &app_config, &platform_paths) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, app_config: &AppConfig, paths: &PlatformPaths) -> util::error::Result<ExitCode> {
    let user_catalog = cli.catalog.as_deref().or(app_config.catalog_file.as_deref());
    let (catalog, catalog_errors) = loader::load(user_catalog)?;
    for err in &catalog_errors {
        eprintln!("Warning: {err}; using the built-in catalog.");
    }
    let catalog = Arc::new(catalog);

    let card_opts = cards::CardOptions {
        description_chars: app_config.description_preview_chars,
        services_shown: app_config.card_services_shown,
    };

    match cli.command {
        Command::List {
            sort,
            category,
            search,
            regex,
            remember,
        } => {
            let session_file = session::session_path(&paths.data_dir);
            let saved = session::load(&session_file);

            let criterion = match sort {
                Some(key) => key.parse::<SortCriterion>()?,
                None => saved
                    .as_ref()
                    .map(|s| SortCriterion::from_key_or_default(&s.sort))
                    .unwrap_or_default(),
            };
            let category = category
                .or_else(|| saved.map(|s| s.category))
                .unwrap_or_else(|| constants::ALL_CATEGORIES.to_string());

            let mut filter = PackageFilter {
                category: CategoryFilter::parse(&category),
                text_search: search.unwrap_or_default(),
                ..Default::default()
            };
            if let Some(pattern) = regex {
                filter.set_regex(&pattern)?;
            }

            let mut state = BrowseState::new(Arc::clone(&catalog));
            state.sort = criterion;
            state.set_filter(filter);

            print!("{}", cards::render_list(&state.visible(), card_opts));

            if remember {
                let data = session::SessionData::new(
                    state.sort.key(),
                    state.filter.category.as_label(),
                );
                if let Err(e) = session::save(&data, &session_file) {
                    tracing::warn!(error = %e, "Could not save session preferences");
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Show { slug } => {
            let mut state = BrowseState::new(Arc::clone(&catalog));
            let absent = state.open(&slug).is_absent();
            let related = state.related(app_config.related_limit);
            print!("{}", detail::render(state.detail(), &slug, &related));
            Ok(exit_for(absent))
        }

        Command::Categories => {
            let state = BrowseState::new(Arc::clone(&catalog));
            println!("{}", constants::ALL_CATEGORIES);
            for category in state.engine().distinct_categories() {
                println!("{category}");
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Related { slug, limit } => {
            let state = BrowseState::new(Arc::clone(&catalog));
            let limit = limit.unwrap_or(app_config.related_limit);
            match state.engine().find_by_slug(&slug) {
                Lookup::Found(package) => {
                    let related = state.engine().related_to(package, limit);
                    print!("{}", cards::render_list(&related, card_opts));
                    Ok(ExitCode::SUCCESS)
                }
                Lookup::Absent | Lookup::Pending => {
                    println!("{}", detail::not_found_text(&slug));
                    Ok(exit_for(true))
                }
            }
        }

        Command::Testimonials => {
            let testimonials = catalog.testimonials();
            for (i, t) in testimonials.iter().enumerate() {
                print!("{}", cards::render_testimonial(t, i, testimonials.len()));
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Carousel {
            ticks,
            interval_ms,
            testimonials,
        } => {
            let interval = match interval_ms {
                Some(ms) => {
                    let (interval, problem) =
                        config::rotation_interval_override(ms, app_config.rotation_interval);
                    if let Some(problem) = problem {
                        tracing::warn!(error = %problem, "Rejected rotation interval");
                        eprintln!("Warning: {problem}");
                    }
                    interval
                }
                None => app_config.rotation_interval,
            };
            run_carousel(&catalog, app_config, ticks, interval, testimonials);
            Ok(ExitCode::SUCCESS)
        }

        Command::Export {
            format,
            output,
            sort,
        } => {
            let criterion = match sort {
                Some(key) => key.parse::<SortCriterion>()?,
                None => SortCriterion::default(),
            };
            let state = BrowseState::new(Arc::clone(&catalog));
            let packages = state.engine().sort_by(criterion);

            let count = match output {
                Some(path) => {
                    let file = std::fs::File::create(&path).map_err(|e| ShowroomError::Io {
                        path: path.clone(),
                        operation: "create export file",
                        source: e,
                    })?;
                    let count = write_export(format, &packages, std::io::BufWriter::new(file), &path)?;
                    eprintln!("Exported {count} packages to {}", path.display());
                    count
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut lock = stdout.lock();
                    let count = write_export(format, &packages, &mut lock, Path::new("-"))?;
                    if format == ExportFormat::Json {
                        let _ = writeln!(lock);
                    }
                    count
                }
            };
            tracing::info!(count, format = ?format, "Export complete");
            Ok(ExitCode::SUCCESS)
        }

        Command::Book {
            option,
            list,
            pickup,
            destination,
            date,
            time,
            passengers,
            name,
            phone,
        } => {
            let desk = BookingDesk::new(&catalog);
            if list {
                for opt in desk.options() {
                    println!("{:<14} {:<28} ${}", opt.id, opt.name, opt.price);
                }
                return Ok(ExitCode::SUCCESS);
            }

            let request = BookingRequest {
                pickup,
                destination,
                date,
                time,
                passengers,
                contact_name: name,
                contact_phone: phone,
            };
            let receipt = desk.submit(&option, &request)?;
            println!(
                "Booking {} received: {} on {} for {} guest(s).",
                receipt.reference,
                receipt.option_name,
                receipt.scheduled_for.format("%Y-%m-%d %H:%M"),
                receipt.passengers
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_for(absent: bool) -> ExitCode {
    if absent {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn write_export<W: Write>(
    format: ExportFormat,
    packages: &[&showroom::core::model::Package],
    writer: W,
    path: &Path,
) -> util::error::Result<usize> {
    let count = match format {
        ExportFormat::Csv => export::export_csv(packages, writer, path)?,
        ExportFormat::Json => export::export_json(packages, writer, path)?,
    };
    Ok(count)
}

/// Print the current slide, then one slide per timer tick.
fn run_carousel(
    catalog: &Arc<Catalog>,
    app_config: &AppConfig,
    ticks: u32,
    interval: Duration,
    testimonials: bool,
) {
    let state = BrowseState::new(Arc::clone(catalog));
    let featured = state.engine().featured(app_config.featured_count);
    let slides: Vec<String> = if testimonials {
        let all = catalog.testimonials();
        all.iter()
            .enumerate()
            .map(|(i, t)| cards::render_testimonial(t, i, all.len()))
            .collect()
    } else {
        featured.iter().map(|p| cards::render_slide(p)).collect()
    };

    let mut carousel = Carousel::new(slides.len());
    let Some(first) = carousel.current() else {
        println!("Nothing to show.");
        return;
    };
    print!("{}", slides[first]);

    let mut timer = RotationTimer::new();
    timer.start(interval);
    let patience = interval * 2 + Duration::from_secs(1);

    for _ in 0..ticks {
        match timer.wait(patience) {
            Some(RotationTick::Advance { .. }) => {
                if let Some(idx) = carousel.next() {
                    println!();
                    print!("{}", slides[idx]);
                }
            }
            _ => break,
        }
    }
    if !timer.wait_stopped(patience) {
        tracing::warn!("Rotation thread did not confirm shutdown");
    }
}
