// main.rs - CLI entry point

use fastmito::cli::{
    AssumeYes, Cli, Command, OrganelleArgs, PrepareCommand, StdinConfirm,
};
use fastmito::core::{Confirm, OrganellePreparer};
use fastmito::data::defaults::{DEFAULT_CONFIG_FILE, DEFAULT_OPTION_FILE};
use fastmito::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("FASTMITO_LOG", "info"))
        .format_timestamp(None)
        .init();

    let cli: Cli = argh::from_env();

    std::process::exit(exit_code(run_main(cli)));
}

/// Errors are reported on stderr and exit with 1
fn exit_code(result: Result<i32, String>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ ERROR: {}", e);
            1
        }
    }
}

/// Returns the process exit status; external tools' statuses pass through
fn run_main(cli: Cli) -> Result<i32, String> {
    let info = AppInfo::load();

    match cli.command {
        Command::Run(args) => {
            let defaults = Defaults::load()?;
            let resolved = resolve_run(&args, &defaults)?;

            println!("🚀 {} v{}", info.prog, info.version);
            let samples = resolved.config.samples.as_deref().unwrap_or_default();
            println!("🧬 Samples: {}", samples.join(", "));
            if resolved.options.dryrun == Some(true) {
                println!("🔍 Dry run: nothing will be executed");
            }

            resolved.launch(&SystemRunner)
        }
        Command::Prepare(prepare) => match prepare.command {
            PrepareCommand::Organelle(args) => prepare_organelle(&args),
        },
        Command::Check(_) => {
            println!("{}", info.banner);
            println!("✅ {}", fastmito::get_info());
            Ok(0)
        }
        Command::Template(args) => {
            if args.options {
                print!("{}", DEFAULT_OPTION_FILE);
            } else {
                print!("{}", DEFAULT_CONFIG_FILE);
            }
            eprintln!("\n💡 Save this content to a .yaml file and use --configfile / --optionfile");
            Ok(0)
        }
    }
}

fn prepare_organelle(args: &OrganelleArgs) -> Result<i32, String> {
    if args.is_bare() {
        print!("{}", OrganelleArgs::usage());
        return Ok(0);
    }

    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };

    let report =
        OrganellePreparer::new(&SystemRunner).prepare(&args.add, args.list, confirm.as_mut())?;

    if !args.list {
        println!(
            "✅ Added: {} | skipped: {} | failed: {}",
            report.added.len(),
            report.skipped.len(),
            report.failed.len()
        );
    }
    Ok(report.exit_code())
}
