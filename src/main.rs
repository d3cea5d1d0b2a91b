use clap::Parser;
use reading_list::core::action::{Action, update};
use reading_list::core::catalog::CatalogSource;
use reading_list::core::config::{self, CliOverrides};
use reading_list::core::state::App;
use reading_list::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reading-list", about = "Browse a book catalog and build a reading list")]
struct Args {
    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Genre to filter by at startup
    #[arg(short, long)]
    genre: Option<String>,

    /// Where to write the log
    #[arg(long, default_value = "reading-list.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Reading list starting up");

    let file_config = config::load_config()?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog_path: args.catalog,
            genre: args.genre,
        },
    );

    let catalog = CatalogSource::from_path(resolved.catalog_path.as_deref()).load()?;
    let mut app = App::new(catalog);
    if let Some(genre) = resolved.default_genre.clone() {
        update(&mut app, Action::SelectGenre(Some(genre)));
    }

    tui::run(app, &resolved)?;
    Ok(())
}
