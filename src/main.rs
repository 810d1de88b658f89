use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod corpus;
mod driver;
mod format;
mod normalize;
mod prompt;
mod record;
mod stage;
mod store;
mod workspace;

use cli::{Command, ConvertArgs, FixArgs, FormatterArgs, RootArgs};
use format::Formatter;
use normalize::Normalizer;
use prompt::InteractiveSource;
use stage::StageController;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Convert(args) => cmd_convert(args),
        Command::Fix(args) => cmd_fix(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> Result<()> {
    let corpus = corpus::load(&args.corpus)?;
    let normalizer = Normalizer::with_defaults()?;
    let mut controller = build_controller(&args.formatter)?;
    let mut out = store::open_for_append(&args.output)?;
    driver::run_convert(
        &mut out,
        &corpus,
        args.start,
        args.count,
        &normalizer,
        driver::DISALLOWED_DEPENDENCIES,
        &mut controller,
    )
}

fn cmd_fix(args: FixArgs) -> Result<()> {
    let mut controller = build_controller(&args.formatter)?;
    driver::run_fix(&args.store, &args.task_id, &mut controller)
}

fn build_controller(args: &FormatterArgs) -> Result<StageController<InteractiveSource>> {
    let formatter = if args.no_format {
        None
    } else {
        match &args.clang_format {
            Some(path) => Some(Formatter::new(path.clone())),
            None => Some(Formatter::locate()?),
        }
    };
    Ok(StageController::new(
        InteractiveSource,
        formatter,
        args.format_plan,
    ))
}
