use anyhow::{Context, Result, bail};
use chartfield::chart::ChartKind;
use chartfield::color::Color;
use chartfield::data::{matrix_to_text, text_to_matrix};
use chartfield::export::ExportFormat;
use chartfield::host::{AxisTitleField, EntryFields, FieldController, Host};
use chartfield::settings::Settings;
use chartfield::surface::Surface;
use chartfield::watcher::{DataWatcher, WatchEvent};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render CSV/TSV tables as charts", long_about = None)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a chart from a table file and export it
    Render(RenderArgs),
    /// Rewrite a table file through the grid round trip (tab-delimited)
    Normalize {
        file: PathBuf,
    },
    /// Re-render a table file every time it changes
    Watch(RenderArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Png,
    Json,
    Csv,
    /// The chart configuration as JSON
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Table file (CSV or TSV)
    file: PathBuf,

    #[arg(long, default_value = "Columns")]
    kind: String,

    #[arg(long, value_enum, default_value_t = Orientation::Vertical)]
    orientation: Orientation,

    #[arg(long, action = ArgAction::SetTrue)]
    stacked: bool,

    #[arg(long)]
    min: Option<f64>,

    #[arg(long)]
    max: Option<f64>,

    /// Axis title
    #[arg(long)]
    title: Option<String>,

    /// Locale tag, e.g. fr-CA
    #[arg(long)]
    locale: Option<String>,

    #[arg(long)]
    first_color: Option<Color>,

    #[arg(long)]
    second_color: Option<Color>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// Output directory
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Output file name without extension (defaults to the file stem)
    #[arg(long)]
    prefix: Option<String>,
}

/// Host backed by a table file and command-line fields
struct FileHost {
    path: PathBuf,
    fields: EntryFields,
    locale: String,
    height: u32,
}

impl FileHost {
    fn new(args: &RenderArgs, settings: &Settings) -> Result<Self> {
        let data = read_table(&args.file)?;
        let id = match &args.prefix {
            Some(prefix) => prefix.clone(),
            None => args
                .file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "chart".to_string()),
        };
        let alignment = match args.orientation {
            Orientation::Vertical => "Vertical",
            Orientation::Horizontal => "Horizontal",
        };

        Ok(Self {
            path: args.file.clone(),
            fields: EntryFields {
                id,
                kind: args.kind.clone(),
                alignment: alignment.to_string(),
                stacked: args.stacked,
                min: args.min,
                max: args.max,
                axe_title: args.title.clone().map(AxisTitleField::Text),
                data: Some(data),
            },
            locale: args.locale.clone().unwrap_or_else(|| settings.locale.clone()),
            height: 0,
        })
    }

    fn reload(&mut self) -> Result<()> {
        self.fields.data = Some(read_table(&self.path)?);
        Ok(())
    }
}

impl Host for FileHost {
    fn fields(&self) -> EntryFields {
        self.fields.clone()
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn update_height(&mut self, px: u32) {
        self.height = px;
    }

    fn store_table(&mut self, text: String) {
        self.fields.data = Some(text);
    }
}

fn read_table(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let settings = match &cli.settings {
        Some(path) => Settings::load(path),
        None => Settings::load_default(),
    }
    .context("loading settings")?;

    match cli.command {
        Command::Render(args) => handle_render(&args, &settings),
        Command::Normalize { file } => handle_normalize(&file),
        Command::Watch(args) => handle_watch(&args, &settings),
    }
}

fn controller(args: &RenderArgs, settings: &Settings) -> Result<FieldController<FileHost>> {
    if ChartKind::from_field(&args.kind).is_none() {
        let known: Vec<&str> = ChartKind::all().iter().map(|k| k.label()).collect();
        bail!("unknown chart kind {:?} (expected one of {})", args.kind, known.join(", "));
    }

    let mut params = settings.chart_params();
    if let Some(color) = args.first_color {
        params.colors.first = color;
    }
    if let Some(color) = args.second_color {
        params.colors.second = color;
    }

    let host = FileHost::new(args, settings)?;
    Ok(FieldController::new(host, Surface::new(settings.surface_width))
        .with_params(params)
        .with_export_options(settings.export_options()))
}

fn render_once(controller: &mut FieldController<FileHost>, args: &RenderArgs) -> Result<()> {
    controller.on_field_changed();

    let format = match args.format {
        OutputFormat::Png => ExportFormat::Png,
        OutputFormat::Json => ExportFormat::Json,
        OutputFormat::Csv => ExportFormat::Csv,
        OutputFormat::Config => {
            let config = controller
                .surface()
                .current()
                .context("no chart was built for this table")?
                .config();
            std::fs::create_dir_all(&args.out)?;
            let path = args
                .out
                .join(format!("{}.config.json", controller.host().fields.id));
            std::fs::write(&path, config.to_json()?)?;
            println!("{}", path.display());
            return Ok(());
        }
    };

    let path = controller.download(format, &args.out)?;
    println!("{}", path.display());
    info!(height = controller.host().height, "field height");
    Ok(())
}

fn handle_render(args: &RenderArgs, settings: &Settings) -> Result<()> {
    let mut controller = controller(args, settings)?;
    render_once(&mut controller, args)
}

fn handle_normalize(file: &Path) -> Result<()> {
    let text = read_table(file)?;
    let normalized = matrix_to_text(&text_to_matrix(&text));
    if normalized == text {
        info!(path = %file.display(), "already normalized");
        return Ok(());
    }
    std::fs::write(file, normalized).with_context(|| format!("writing {}", file.display()))?;
    info!(path = %file.display(), "normalized table");
    Ok(())
}

fn handle_watch(args: &RenderArgs, settings: &Settings) -> Result<()> {
    // Watch before the first render so a save made while it runs is seen
    let mut watcher = DataWatcher::with_debounce(&args.file, settings.watch_debounce())?;
    info!(path = %args.file.display(), "watching for changes");

    let mut controller = controller(args, settings)?;
    render_once(&mut controller, args)?;

    loop {
        match watcher.wait(Duration::from_secs(1)) {
            Some(WatchEvent::Changed(_)) => {
                if let Err(err) = controller.host_mut().reload() {
                    warn!(error = %err, "skipping unreadable table");
                    continue;
                }
                if let Err(err) = render_once(&mut controller, args) {
                    warn!(error = %err, "render failed");
                }
            }
            Some(WatchEvent::Removed(path)) => {
                warn!(path = %path.display(), "table file removed, waiting for it to return");
            }
            Some(WatchEvent::Error(_)) | None => {}
        }
    }
}
