use clap::Parser;
use std::io;
use std::path::PathBuf;
use triedit::config::{RcConfig, RcLoader};
use triedit::{EditorController, Session};

#[derive(Parser, Debug)]
#[command(name = "triedit", version, about = "Line-oriented text editor with a word dictionary")]
struct Args {
    /// Read settings from this file instead of .trieditrc
    #[arg(long, value_name = "PATH", conflicts_with = "no_rc")]
    rc: Option<PathBuf>,

    /// Ignore .trieditrc files
    #[arg(long)]
    no_rc: bool,

    /// Load dictionary words from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Draw a caret under the cursor position
    #[arg(long)]
    caret: bool,

    /// Skip the welcome banner
    #[arg(short, long)]
    quiet: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print a sample .trieditrc and exit
    #[arg(long)]
    print_rc: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if args.print_rc {
        print!("{}", RcLoader::generate_sample_rc());
        return Ok(());
    }

    let mut config = if args.no_rc {
        RcConfig::default()
    } else if let Some(path) = &args.rc {
        RcLoader::load_from(path)?
    } else {
        RcLoader::load_config()
    };

    if args.caret {
        config.show_caret = true;
    }
    if args.quiet {
        config.show_banner = false;
    }

    let mut session = Session::new();
    if let Some(path) = &args.dictionary {
        session.load_dictionary(path)?;
    } else if let Some(path) = &config.dictionary {
        // A dictionary named in the rc file is optional
        if let Err(e) = session.load_dictionary(path) {
            log::warn!("cannot load dictionary {}: {e}", path.display());
        }
    }

    let mut editor = EditorController::new(session, &config);
    editor.run(io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}
