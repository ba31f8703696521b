use album_catalog::{catalog, config, output, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "album-catalog")]
#[command(about = "Build the photo gallery catalog from album folders")]
#[command(long_about = "\
Build the photo gallery catalog from album folders

Album folders encode their metadata in the folder name, and photos are
ordered by the number at the end of their file name.

Images structure:

  public/images/
  ├── street/                            # Special collection (all images)
  ├── landscape/                         # Special collection (all images)
  ├── 1-John & Emmie|情侶/               # N-title|categories
  │   ├── cover.jpg                      # Cover (cover.jpg/png/webp)
  │   ├── photo-1.jpg                    # Photos ordered by trailing number
  │   └── photo-2.jpg
  └── album2-Johnny|螢橋國中|情侶,風景/    # N-title|description|categories
      ├── cover.png
      └── 01.jpg

Folders that don't fit are skipped with a per-file explanation.

Run 'album-catalog gen-config' to print a documented catalog.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding catalog.toml; relative paths resolve against it
    #[arg(long, default_value = ".", global = true)]
    project_dir: PathBuf,

    /// Images directory to scan (overrides catalog.toml)
    #[arg(long, global = true)]
    images_dir: Option<PathBuf>,

    /// Catalog output file (overrides catalog.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Scan the images directory and write the catalog (default)
    Generate,
    /// Scan and report without writing the catalog
    Check,
    /// Print a stock catalog.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<scan::ScanError>() {
                Some(scan_err) => output::print_fatal(scan_err),
                None => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Command::Generate);

    if let Command::GenConfig = command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let mut config = config::load_config(&cli.project_dir)?;
    if let Some(images_dir) = &cli.images_dir {
        config.images_dir = images_dir.clone();
    }
    if let Some(output_path) = &cli.output {
        config.output = output_path.clone();
    }
    config.validate()?;
    let config = config.resolve_paths(&cli.project_dir);

    println!("==> Scanning {}", config.images_dir.display());
    let report = scan::scan(&config.images_dir, &config)?;
    output::print_skipped_folders(&report.skipped);
    output::print_scan_output(&report);

    if let Command::Generate = command {
        catalog::write_catalog(&config.output, &report.catalog)?;
        println!("==> Catalog written to {}", config.output.display());
    } else {
        println!("==> Content is valid");
    }

    Ok(())
}
