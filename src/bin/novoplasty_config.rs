// novoplasty_config.rs - Standalone utility rendering a sample's NOVOPlasty config
//
// Called from workflow rules with the resolved config written by `fastmito run`.

use clap::{Arg, Command};
use std::path::Path;

use fastmito::core::NovoplastyInput;
use fastmito::data::{load_document, Defaults};
use fastmito::output::write_text;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("FASTMITO_LOG", "info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let matches = Command::new("fastmito-novoplasty")
        .version(fastmito::VERSION)
        .about("Renders the NOVOPlasty config file for one sample of a resolved fastmito config")
        .arg(Arg::new("configfile")
            .long("configfile")
            .value_name("FILE")
            .help("Resolved fastmito config (YAML, JSON or TOML)")
            .required(true))
        .arg(Arg::new("sample")
            .long("sample")
            .short('s')
            .value_name("NAME")
            .help("Sample name, used as the NOVOPlasty project name")
            .required(true))
        .arg(Arg::new("seed")
            .long("seed")
            .value_name("FILE")
            .help("Seed sequence (.fasta)")
            .required(true))
        .arg(Arg::new("output-path")
            .long("output-path")
            .value_name("DIR")
            .help("NOVOPlasty output directory")
            .required(true))
        .arg(Arg::new("fq1")
            .long("fq1")
            .value_name("FILE")
            .help("Forward reads (default: reads_dir/fq_path_pattern)"))
        .arg(Arg::new("fq2")
            .long("fq2")
            .value_name("FILE")
            .help("Reverse reads (default: forward reads with _1. replaced by _2.)"))
        .arg(Arg::new("output")
            .long("output")
            .short('o')
            .value_name("FILE")
            .help("Write the config here instead of stdout"))
        .get_matches();

    let configfile = matches.get_one::<String>("configfile").ok_or("--configfile is required")?;
    let sample = matches.get_one::<String>("sample").ok_or("--sample is required")?;
    let seed = matches.get_one::<String>("seed").ok_or("--seed is required")?;
    let output_path = matches.get_one::<String>("output-path").ok_or("--output-path is required")?;

    let mut config = Defaults::load()?.config;
    config.apply_entries(load_document(Path::new(configfile))?)?;

    let input = NovoplastyInput::from_config(
        &config,
        sample,
        seed,
        output_path,
        matches.get_one::<String>("fq1").map(|s| s.as_str()),
        matches.get_one::<String>("fq2").map(|s| s.as_str()),
    )?;
    let rendered = input.render();

    match matches.get_one::<String>("output") {
        Some(output) => write_text(Path::new(output), &rendered)?,
        None => print!("{}", rendered),
    }
    Ok(())
}
