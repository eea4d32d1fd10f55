// engine.rs - Snakemake invocation with the resolved config and options

use serde_yaml::Value;
use std::path::{Path, PathBuf};

use crate::cli::config::{EngineOptions, PipelineConfig};
use crate::cli::merge::Resolved;
use crate::data::value::to_arg;
use crate::output::write_resolved_config;
use crate::process::{CommandRunner, CommandSpec};

pub const SNAKEMAKE: &str = "snakemake";

/// Written into the result directory and passed as --configfile
pub const RESOLVED_CONFIG_NAME: &str = "fastmito.config.yaml";

#[derive(Debug, Clone)]
pub struct WorkflowEngine {
    program: String,
    snakefile: PathBuf,
}

impl WorkflowEngine {
    pub fn new<P: Into<PathBuf>>(snakefile: P) -> Self {
        Self {
            program: SNAKEMAKE.to_string(),
            snakefile: snakefile.into(),
        }
    }

    /// Engine command line for a written config file and the resolved options
    pub fn command(&self, configfile: &Path, options: &EngineOptions) -> CommandSpec {
        let mut command = CommandSpec::new(
            &self.program,
            [
                "--snakefile".to_string(),
                self.snakefile.display().to_string(),
                "--configfile".to_string(),
                configfile.display().to_string(),
            ],
        );

        if let Some(cores) = options.cores {
            command = command.arg("--cores").arg(cores.to_string());
        }
        if options.dryrun == Some(true) {
            command = command.arg("--dryrun");
        }
        if options.printshellcmds == Some(true) {
            command = command.arg("--printshellcmds");
        }
        for (key, value) in &options.extra {
            for arg in option_flags(key, value) {
                command = command.arg(arg);
            }
        }
        command
    }

    /// Write the config, run the engine, and return its exit status unchanged
    pub fn launch(
        &self,
        runner: &dyn CommandRunner,
        config: &PipelineConfig,
        options: &EngineOptions,
    ) -> Result<i32, String> {
        if !self.snakefile.is_file() {
            return Err(format!(
                "Snakefile not found: {} (use --snakefile or set FASTMITO_SNAKEFILE)",
                self.snakefile.display()
            ));
        }

        let configfile = resolved_config_path(config);
        write_resolved_config(&configfile, config)?;

        let command = self.command(&configfile, options);
        let status = runner.run_attached(&command)?;
        if status != 0 {
            log::warn!("{} exited with status {}", self.program, status);
        }
        Ok(status)
    }
}

impl Resolved {
    pub fn launch(&self, runner: &dyn CommandRunner) -> Result<i32, String> {
        WorkflowEngine::new(self.snakefile.clone()).launch(runner, &self.config, &self.options)
    }
}

pub fn resolved_config_path(config: &PipelineConfig) -> PathBuf {
    Path::new(config.result_dir.as_deref().unwrap_or("result")).join(RESOLVED_CONFIG_NAME)
}

/// `key: true` becomes `--key`, `false` drops it, scalars and sequences follow the flag
fn option_flags(key: &str, value: &Value) -> Vec<String> {
    let flag = format!("--{}", key.replace('_', "-"));
    match value {
        Value::Bool(true) => vec![flag],
        Value::Bool(false) | Value::Null => Vec::new(),
        Value::Sequence(items) => std::iter::once(flag)
            .chain(items.iter().map(to_arg))
            .collect(),
        other => vec![flag, to_arg(other)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::StubRunner;
    use std::collections::BTreeMap;

    fn options() -> EngineOptions {
        EngineOptions {
            cores: Some(4),
            dryrun: Some(false),
            printshellcmds: Some(true),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_command_line() {
        let engine = WorkflowEngine::new("smk/main.smk");
        let command = engine.command(Path::new("result/fastmito.config.yaml"), &options());
        assert_eq!(
            command.to_string(),
            "snakemake --snakefile smk/main.smk --configfile result/fastmito.config.yaml --cores 4 --printshellcmds"
        );

        let dry = EngineOptions { dryrun: Some(true), ..options() };
        let command = engine.command(Path::new("c.yaml"), &dry);
        assert!(command.args.contains(&"--dryrun".to_string()));
    }

    #[test]
    fn test_extra_options_become_flags() {
        let mut extra = BTreeMap::new();
        extra.insert("keep_going".to_string(), Value::Bool(true));
        extra.insert("notemp".to_string(), Value::Bool(false));
        extra.insert("latency_wait".to_string(), Value::Number(60.into()));
        extra.insert(
            "until".to_string(),
            Value::Sequence(vec![
                Value::String("novoplasty".into()),
                Value::String("mitoz".into()),
            ]),
        );
        let opts = EngineOptions { extra, ..options() };

        let command = WorkflowEngine::new("main.smk").command(Path::new("c.yaml"), &opts);
        let line = command.to_string();
        assert!(line.ends_with("--keep-going --latency-wait 60 --until novoplasty mitoz"));
        assert!(!line.contains("notemp"));
    }

    #[test]
    fn test_launch_writes_config_and_returns_status() {
        let dir = tempfile::tempdir().unwrap();
        let snakefile = dir.path().join("main.smk");
        std::fs::write(&snakefile, "rule all:\n    input: []\n").unwrap();

        let config = PipelineConfig {
            reads_dir: Some("reads".to_string()),
            result_dir: Some(dir.path().join("out").display().to_string()),
            samples: Some(vec!["a".to_string(), "b".to_string()]),
            ..Default::default()
        };

        let runner = StubRunner::new().respond(1, "MissingInputException");
        let status = WorkflowEngine::new(&snakefile)
            .launch(&runner, &config, &options())
            .unwrap();
        assert_eq!(status, 1);

        let written = dir.path().join("out").join(RESOLVED_CONFIG_NAME);
        let content = std::fs::read_to_string(&written).unwrap();
        assert!(content.contains("samples:\n- a\n- b\n"));

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].args.contains(&written.display().to_string()));
    }

    #[test]
    fn test_launch_requires_snakefile() {
        let runner = StubRunner::new();
        let err = WorkflowEngine::new("/nonexistent/main.smk")
            .launch(&runner, &PipelineConfig::default(), &options())
            .unwrap_err();
        assert!(err.contains("Snakefile not found"));
        assert!(runner.calls.borrow().is_empty());
    }
}
