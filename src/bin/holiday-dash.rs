use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use holiday_dash::dashboard::write_series_table;
use holiday_dash::{Client, Config, Dashboard, Session};
use holiday_dash::{holidays, ip, stats, storage, viz};
use std::io::{self, Write};
use std::net::Ipv4Addr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "holiday-dash",
    version,
    about = "Greet a random IP address and chart a decade of public holidays per country"
)]
struct Cli {
    #[command(flatten)]
    endpoints: EndpointArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct EndpointArgs {
    /// Base URL of the greeting API (GET <base>/?ip=<ipv4>)
    #[arg(long, global = true, env = "HOLIDAY_DASH_SALUTATION_URL")]
    salutation_url: Option<String>,
    /// Base URL serving AvailableCountries
    #[arg(long, global = true, env = "HOLIDAY_DASH_COUNTRIES_URL")]
    countries_url: Option<String>,
    /// Base URL serving Get/<code>/<year>
    #[arg(long, global = true, env = "HOLIDAY_DASH_HOLIDAYS_URL")]
    holidays_url: Option<String>,
}

impl EndpointArgs {
    fn config(&self) -> Config {
        let mut cfg = Config::from_env();
        if let Some(u) = &self.salutation_url {
            cfg.salutation_base = u.clone();
        }
        if let Some(u) = &self.countries_url {
            cfg.countries_base = u.clone();
        }
        if let Some(u) = &self.holidays_url {
            cfg.holidays_base = u.clone();
        }
        cfg.normalized()
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the whole dashboard once: greeting, country list, selection and chart data.
    Show(ShowArgs),
    /// Print the greeting for an IP address (random if omitted).
    Greet {
        #[arg(long)]
        ip: Option<Ipv4Addr>,
    },
    /// List the country codes known to the holiday API.
    Countries {
        /// Also print the country names.
        #[arg(long, default_value_t = false)]
        names: bool,
    },
    /// Fetch the holiday series for one country (and optionally save, plot, and print stats).
    Holidays(HolidaysArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Country code to select (defaults to the first one listed)
    #[arg(short, long)]
    country: Option<String>,
    /// Skip the holiday series.
    #[arg(long, default_value_t = false)]
    no_chart: bool,
    /// Also draw the series to the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
}

#[derive(Args, Debug)]
struct HolidaysArgs {
    /// Two-letter country code (e.g., DE)
    #[arg(short, long)]
    country: String,
    /// Last year of the 11-year window, 1 to 9999 (defaults to the current year)
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32)
            .range(holidays::MIN_YEAR as i64..=holidays::MAX_YEAR as i64)
    )]
    year: Option<i32>,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Create a chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print summary statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let session = Session::new(Client::new(cli.endpoints.config())?);
    match cli.cmd {
        Command::Show(args) => cmd_show(&session, args),
        Command::Greet { ip } => cmd_greet(&session, ip),
        Command::Countries { names } => cmd_countries(&session, names),
        Command::Holidays(args) => cmd_holidays(&session, args),
    }
}

fn cmd_show(session: &Session, args: ShowArgs) -> Result<()> {
    let page = Dashboard::new(session).render(args.country.as_deref(), !args.no_chart)?;

    let mut out = io::stdout().lock();
    page.write_text(&mut out)?;
    out.flush()?;

    if let (Some(plot_path), Some(series)) = (args.plot.as_ref(), page.series.as_ref()) {
        viz::plot_holidays(series, plot_path, args.width, args.height)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }
    Ok(())
}

fn cmd_greet(session: &Session, addr: Option<Ipv4Addr>) -> Result<()> {
    let addr = addr.unwrap_or_else(ip::random_ipv4);
    let greeting = session.greeting(addr)?;
    println!("{addr}  {greeting}");
    Ok(())
}

fn cmd_countries(session: &Session, names: bool) -> Result<()> {
    if names {
        for c in session.client().available_countries()? {
            println!("{}  {}", c.key, c.value.unwrap_or_default());
        }
    } else {
        for code in session.country_codes()? {
            println!("{code}");
        }
    }
    Ok(())
}

fn cmd_holidays(session: &Session, args: HolidaysArgs) -> Result<()> {
    let series = match args.year {
        Some(year) => session.holiday_series_for(&args.country, year)?,
        None => session.holiday_series(&args.country)?,
    };

    write_series_table(&series, &mut io::stdout().lock())?;

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&series, path)?,
            "json" => storage::save_json(&series, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} years to {}", series.len(), path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_holidays(&series, plot_path, args.width, args.height)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    if args.stats {
        if let Some(s) = stats::summarize(&series) {
            let peaks: Vec<String> = s.peak_years.iter().map(|y| y.to_string()).collect();
            println!(
                "{}  years={} total={} min={} max={} mean={:.2} median={:.1} peak={}",
                s.country_code,
                s.years,
                s.total,
                s.min,
                s.max,
                s.mean,
                s.median,
                peaks.join(",")
            );
        }
    }

    Ok(())
}
