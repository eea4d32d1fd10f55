// novoplasty.rs - Per-sample NOVOPlasty configuration rendering

use std::path::Path;

use crate::cli::config::PipelineConfig;

pub const DEFAULT_READ_LENGTH: u32 = 150;
pub const DEFAULT_INSERT_SIZE: u32 = 300;

/// Values substituted into the NOVOPlasty config template
#[derive(Debug, Clone, PartialEq)]
pub struct NovoplastyInput {
    pub sample: String,
    pub genome_min_size: u32,
    pub genome_max_size: u32,
    pub kmer_size: u32,
    pub max_mem_gb: u32,
    pub seed_fasta: String,
    pub read_length: Option<u32>,
    pub insert_size: Option<u32>,
    pub fq1: String,
    pub fq2: String,
    pub output_path: String,
}

impl NovoplastyInput {
    /// Build the input for one sample; read paths default to the fq path pattern
    pub fn from_config(
        config: &PipelineConfig,
        sample: &str,
        seed_fasta: &str,
        output_path: &str,
        fq1: Option<&str>,
        fq2: Option<&str>,
    ) -> Result<Self, String> {
        let fq1 = match fq1 {
            Some(path) => path.to_string(),
            None => forward_reads(config, sample)?,
        };
        let fq2 = match fq2 {
            Some(path) => path.to_string(),
            None => mate_path(&fq1)?,
        };

        Ok(Self {
            sample: sample.to_string(),
            genome_min_size: required(config.genome_min_size, "genome_min_size")?,
            genome_max_size: required(config.genome_max_size, "genome_max_size")?,
            kmer_size: required(config.kmer_size, "kmer_size")?,
            max_mem_gb: required(config.max_mem_gb, "max_mem_gb")?,
            seed_fasta: seed_fasta.to_string(),
            read_length: config.read_length,
            insert_size: config.insert_size,
            fq1,
            fq2,
            output_path: output_path.to_string(),
        })
    }

    pub fn render(&self) -> String {
        format!(
            r#"
Project:
-----------------------
Project name          = {sample}
Type                  = mito
Genome Range          = {genome_min_size}-{genome_max_size}
K-mer                 = {kmer_size}
Max memory            = {max_mem_gb}
Extended log          = 0
Save assembled reads  = no
Seed Input            = {seed_fasta}
Extend seed directly  = no
Reference sequence    =
Variance detection    =
Chloroplast sequence  =

Dataset 1:
-----------------------
Read Length           = {read_length}
Insert size           = {insert_size}
Platform              = illumina
Single/Paired         = PE
Combined reads        =
Forward reads         = {fq1}
Reverse reads         = {fq2}
Store Hash            =

Heteroplasmy:
-----------------------
MAF                   =
HP exclude list       =
PCR-free              =

Optional:
-----------------------
Insert size auto      = yes
Use Quality Scores    = no
Output path           = {output_path}
"#,
            sample = self.sample,
            genome_min_size = self.genome_min_size,
            genome_max_size = self.genome_max_size,
            kmer_size = self.kmer_size,
            max_mem_gb = self.max_mem_gb,
            seed_fasta = self.seed_fasta,
            read_length = self.read_length.unwrap_or(DEFAULT_READ_LENGTH),
            insert_size = self.insert_size.unwrap_or(DEFAULT_INSERT_SIZE),
            fq1 = self.fq1,
            fq2 = self.fq2,
            output_path = self.output_path,
        )
    }
}

fn required(value: Option<u32>, key: &str) -> Result<u32, String> {
    value.ok_or_else(|| format!("'{}' is missing from the config", key))
}

/// `<reads_dir>/<fq_path_pattern>` with the sample substituted
pub fn forward_reads(config: &PipelineConfig, sample: &str) -> Result<String, String> {
    let reads_dir = config
        .reads_dir
        .as_deref()
        .ok_or("'reads_dir' is missing from the config")?;
    let pattern = config
        .fq_path_pattern
        .as_deref()
        .ok_or("'fq_path_pattern' is missing from the config")?;

    let relative = pattern.replace("{sample}", sample);
    Ok(Path::new(reads_dir).join(relative).display().to_string())
}

/// Reverse reads sit next to the forward reads, `_1.` becoming `_2.`
pub fn mate_path(fq1: &str) -> Result<String, String> {
    match fq1.rfind("_1.") {
        Some(pos) => Ok(format!("{}_2.{}", &fq1[..pos], &fq1[pos + 3..])),
        None => Err(format!(
            "Cannot derive reverse reads from '{}' (expected '_1.' in the name), use --fq2",
            fq1
        )),
    }
}
