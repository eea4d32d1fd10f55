// args.rs - Command line arguments definition

use argh::FromArgs;

use crate::core::organelle::{parse_database_choice, OrganelleDatabase};

#[derive(FromArgs)]
/// fastmito - FastMitoAssembler, a mitochondrial genome assembly workflow
pub struct Cli {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Run(RunArgs),
    Prepare(PrepareArgs),
    Check(CheckArgs),
    Template(TemplateArgs),
}

// Config options stay unset unless given; --configfile and the bundled
// defaults fill in the rest.
#[derive(FromArgs, Debug, Default)]
/// run the workflow
#[argh(subcommand, name = "run")]
pub struct RunArgs {
    /// the root directory of reads
    #[argh(option, short = 'r')]
    pub reads_dir: Option<String>,

    /// the directory of result (default: result)
    #[argh(option, short = 'o')]
    pub result_dir: Option<String>,

    /// the database for GetOrganelle: embplant_pt, embplant_mt, embplant_nr,
    /// fungus_mt, fungus_nr, animal_mt, other_pt (default: animal_mt)
    #[argh(option, short = 'd')]
    pub organelle_database: Option<OrganelleDatabase>,

    /// the sample name, repeat for several samples
    #[argh(option, short = 's')]
    pub samples: Vec<String>,

    /// the path pattern of forward fastq files relative to the reads directory,
    /// with a sample placeholder (default: see `fastmito template`)
    #[argh(option)]
    pub fq_path_pattern: Option<String>,

    /// the genetic code table (default: 5)
    #[argh(option)]
    pub genetic_code: Option<u32>,

    /// the min size of genome (default: 12000)
    #[argh(option)]
    pub genome_min_size: Option<u32>,

    /// the max size of genome (default: 22000)
    #[argh(option)]
    pub genome_max_size: Option<u32>,

    /// the insert size of paired-end reads (default: 300)
    #[argh(option)]
    pub insert_size: Option<u32>,

    /// the K-mer size used in NOVOPlasty assembly (default: 39)
    #[argh(option)]
    pub kmer_size: Option<u32>,

    /// the read length of Illumina short reads (default: 150)
    #[argh(option)]
    pub read_length: Option<u32>,

    /// the limit of RAM usage for NOVOPlasty, in GB (default: 5)
    #[argh(option)]
    pub max_mem_gb: Option<u32>,

    /// use a specific seed input, .fasta or .gb
    #[argh(option)]
    pub seed_input: Option<String>,

    /// use a specific seed input, alias of --seed-input
    #[argh(option)]
    pub reference: Option<String>,

    /// the specific genes
    #[argh(option)]
    pub genes: Option<String>,

    /// the path of MEANGS software (default: $MEANGS_PATH)
    #[argh(option)]
    pub meangs_path: Option<String>,

    /// the main snakefile (default: smk/main.smk next to the executable, or $FASTMITO_SNAKEFILE)
    #[argh(option)]
    pub snakefile: Option<String>,

    /// the configfile for the workflow, see `fastmito template`
    #[argh(option)]
    pub configfile: Option<String>,

    /// the optionfile for snakemake, see `fastmito template --options`
    #[argh(option)]
    pub optionfile: Option<String>,

    /// use at most N CPU cores/jobs in parallel (default: 4)
    #[argh(option)]
    pub cores: Option<u32>,

    /// do not execute anything, and display what would be done
    #[argh(switch)]
    pub dryrun: bool,
}

#[derive(FromArgs)]
/// prepare databases
#[argh(subcommand, name = "prepare")]
pub struct PrepareArgs {
    #[argh(subcommand)]
    pub command: PrepareCommand,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum PrepareCommand {
    Organelle(OrganelleArgs),
}

#[derive(FromArgs, Debug, Default)]
/// prepare database for GetOrganelle
#[argh(subcommand, name = "organelle")]
pub struct OrganelleArgs {
    /// add database for organelle type, repeatable: all or a GetOrganelle
    /// database name (default: animal_mt)
    #[argh(option, short = 'a', from_str_fn(parse_database_choice))]
    pub add: Vec<String>,

    /// list configured databases and exit
    #[argh(switch)]
    pub list: bool,

    /// overwrite configured databases without asking
    #[argh(switch, short = 'y')]
    pub yes: bool,
}

impl OrganelleArgs {
    /// No flag given at all; the command shows its usage instead of adding animal_mt
    pub fn is_bare(&self) -> bool {
        self.add.is_empty() && !self.list && !self.yes
    }

    pub fn usage() -> String {
        match OrganelleArgs::from_args(&["fastmito prepare organelle"], &["--help"]) {
            Err(exit) => exit.output,
            Ok(_) => String::new(),
        }
    }
}

#[derive(FromArgs)]
/// print the banner and version
#[argh(subcommand, name = "check")]
pub struct CheckArgs {}

#[derive(FromArgs)]
/// print the bundled default configfile
#[argh(subcommand, name = "template")]
pub struct TemplateArgs {
    /// print the default optionfile instead
    #[argh(switch)]
    pub options: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> RunArgs {
        let mut full = vec!["run"];
        full.extend_from_slice(args);
        match Cli::from_args(&["fastmito"], &full) {
            Ok(Cli { command: Command::Run(args) }) => args,
            Ok(_) => panic!("not a run command"),
            Err(exit) => panic!("{}", exit.output),
        }
    }

    #[test]
    fn test_reference_flag_is_accepted() {
        let args = run_args(&["--reference", "x.fa"]);
        assert_eq!(args.reference.as_deref(), Some("x.fa"));
        assert_eq!(args.seed_input, None);

        let args = run_args(&["--seed-input", "y.gb"]);
        assert_eq!(args.seed_input.as_deref(), Some("y.gb"));
    }

    #[test]
    fn test_repeated_samples() {
        let args = run_args(&["-r", "reads", "-s", "a", "--samples", "b", "--dryrun"]);
        assert_eq!(args.reads_dir.as_deref(), Some("reads"));
        assert_eq!(args.samples, vec!["a", "b"]);
        assert!(args.dryrun);
    }

    #[test]
    fn test_bare_organelle_shows_usage() {
        let bare = OrganelleArgs::from_args(&["organelle"], &[]).unwrap();
        assert!(bare.is_bare());

        let list = OrganelleArgs::from_args(&["organelle"], &["--list"]).unwrap();
        assert!(!list.is_bare());
        let add = OrganelleArgs::from_args(&["organelle"], &["-a", "fungus_mt"]).unwrap();
        assert!(!add.is_bare());

        let usage = OrganelleArgs::usage();
        assert!(usage.contains("--add"));
        assert!(usage.contains("--list"));
    }

    #[test]
    fn test_organelle_rejects_unknown_database() {
        let err = OrganelleArgs::from_args(&["organelle"], &["--add", "plant"])
            .err()
            .unwrap();
        assert!(err.output.contains("Invalid organelle database 'plant'"));
    }
}
