use clap::Parser;
use darkscope_lib::dark_generate::dark_theme;
use darkscope_lib::style::scope_audit;
use darkscope_lib::style::scope_class::DEFAULT_SCOPE_CLASS;
use darkscope_lib::{ScopeClass, ScopeError};
use log::info;
use std::path::PathBuf;

const DARKSCOPE_INTRO: &str = r#"
       __           __
  ____/ /___ ______/ /______________  ____  ___
 / __  / __ `/ ___/ //_/ ___/ ___/ __ \/ __ \/ _ \
/ /_/ / /_/ / /  / ,< (__  ) /__/ /_/ / /_/ /  __/
\__,_/\__,_/_/  /_/|_/____/\___/\____/ .___/\___/
                                    /_/
"#;

#[derive(Parser)]
#[command(name = "darkscope")]
#[command(about = "Scope every selector of a stylesheet under a dark theme class")]
struct Args {
    /// Input stylesheet.
    input: PathBuf,

    /// Output file. Defaults to rewriting the input in place.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Class every rule is nested under.
    #[arg(short, long, default_value = DEFAULT_SCOPE_CLASS)]
    scope_class: ScopeClass,

    /// Print the scoped stylesheet instead of writing a file.
    #[arg(long)]
    stdout: bool,

    /// Re-parse the result and warn about selectors that escaped scoping.
    #[arg(long)]
    audit: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ScopeError> {
    if !args.stdout {
        eprintln!("{}", DARKSCOPE_INTRO);
    }

    let (scoped, report) = dark_theme::render(&args.input, &args.scope_class)?;

    if args.stdout {
        println!("{}", scoped);
    } else {
        let output = args.output.as_ref().unwrap_or(&args.input);
        dark_theme::write(output, &scoped)?;
    }
    info!("\n{}", report);

    if args.audit {
        let unscoped = scope_audit::audit(&scoped, &args.scope_class)?;
        info!("audit: {} unscoped selectors", unscoped.len());
    }

    Ok(())
}
