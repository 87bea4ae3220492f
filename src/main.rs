use clap::Parser;
use small_image_zapper::config::{self, ConfigOverrides};
use small_image_zapper::{output, zapper};
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "small-image-zapper")]
#[command(about = "Delete all small images in a folder and all of its subfolders")]
#[command(long_about = "\
Delete all small images in a folder and all of its subfolders

Every file under FOLDER is checked in this order; the first match decides:

  1. extension in --skip-ext       → skipped, never opened
  2. larger than --max-bytes       → skipped, never opened
  3. not an image / unsupported    → skipped
  4. corrupt or possibly corrupt   → skipped
  5. no width/height in header     → skipped
  6. width × height < --min-pixels → deleted (moved to trash unless --hard-delete)

Use --debug for a dry run: everything is evaluated and counted, nothing is
deleted.

Run 'small-image-zapper --gen-config' for a documented config file.")]
#[command(version)]
struct Cli {
    /// Folder to process, including all subfolders
    #[arg(required_unless_present = "gen_config")]
    folder: Option<String>,

    /// Minimum pixels (width × height). Anything below is deleted [default: 240000]
    #[arg(short = 'p', long, value_name = "N")]
    min_pixels: Option<u64>,

    /// Files larger than this many bytes are skipped [default: unlimited]
    #[arg(short = 'b', long, value_name = "N")]
    max_bytes: Option<u64>,

    /// Extensions to skip, comma separated (e.g. "gif,zip")
    #[arg(short = 's', long = "skip-ext", value_name = "LIST")]
    skip_ext: Option<String>,

    /// Delete permanently instead of moving to the trash
    #[arg(long)]
    hard_delete: bool,

    /// Dry run: evaluate and count, delete nothing
    #[arg(short, long)]
    debug: bool,

    /// Print every folder and file decision
    #[arg(short, long)]
    verbose: bool,

    /// Start without waiting for Enter. Useful for scripts
    #[arg(short, long)]
    immediate: bool,

    /// Read settings from a TOML file (flags override it)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a stock config file with all options documented
    #[arg(long)]
    gen_config: bool,

    /// Print the run result as JSON instead of the summary line
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            min_pixels: self.min_pixels,
            max_bytes: self.max_bytes,
            hard_delete: self.hard_delete,
            debug_only: self.debug,
            skip_extensions: self.skip_ext.clone(),
        }
    }
}

/// Print an error with its display message and exit non-zero.
fn abort(err: impl Display) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let folder = PathBuf::from(cli.folder.clone().unwrap_or_default());
    let config = config::resolve_config(cli.config.as_deref(), &cli.overrides())
        .unwrap_or_else(|e| abort(e));

    if !cli.immediate || cli.verbose {
        output::print_settings(&folder, &config);
    }
    if config.debug_only && !cli.json {
        println!("Debug mode enabled. No files will be deleted.");
    }
    if !cli.immediate {
        println!("Small Image Zapper ready to begin. Press Enter to continue.");
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
    }
    if !cli.json {
        println!("Working...");
    }

    let show_progress = cli.verbose && !cli.json;
    let (tx, rx) = mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            if output::is_problem(&event) {
                for line in output::format_event(&event) {
                    eprintln!("{}", line);
                }
            } else if show_progress {
                for line in output::format_event(&event) {
                    println!("{}", line);
                }
            }
        }
    });
    let result = zapper::process(&folder, &config, Some(tx));
    printer.join().map_err(|_| "output thread panicked")?;
    let result = result.unwrap_or_else(|e| abort(e));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_summary(&result);
    }

    Ok(())
}
