use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE_PATH: &str = ".gqltsrc.json";

fn cli_parse() -> ArgMatches {
    Command::new("gqlts")
        .version(crate_version!())
        .about("\ngqlts compiles GraphQL type references into TypeScript types.")
        .arg(
            Arg::new("type_refs")
                .value_name("TYPE")
                .num_args(0..)
                .help("GraphQL type references to compile (for example `[Episode!]!`)"),
        )
        .arg(
            Arg::new("schema_path")
                .value_name("FILE")
                .short('s')
                .long("schema-file")
                .help("Path of schema introspection JSON file (defaults to schema.json)"),
        )
        .arg(
            Arg::new("config_file")
                .value_name("FILE")
                .short('c')
                .long("config-file")
                .help("Path of JSON configuration file (defaults to .gqltsrc.json)"),
        )
        .arg(
            Arg::new("use_read_only_types")
                .long("use-read-only-types")
                .action(ArgAction::SetTrue)
                .help("Compile list types to ReadonlyArray instead of mutable arrays"),
        )
        .arg(
            Arg::new("use_custom_scalars")
                .long("use-custom-scalars")
                .action(ArgAction::SetTrue)
                .help("Use custom schema defined scalar names for types instead of any type"),
        )
        .arg(
            Arg::new("custom_scalar_prefix")
                .value_name("PREFIX")
                .requires("use_custom_scalars")
                .long("custom-scalar-prefix")
                .help("Prefix the name of custom scalars to keep them unique"),
        )
        .arg(
            Arg::new("interface_prefix")
                .value_name("PREFIX")
                .long("interface-prefix")
                .help("Prefix compiled type references to namespace them"),
        )
        .get_matches()
}

/// Optional JSON file mirroring the CLI flags, with camelCase keys
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ConfigFile {
    schema_file: Option<PathBuf>,
    use_read_only_types: bool,
    passthrough_custom_scalars: bool,
    custom_scalars_prefix: Option<String>,
    ts_interface_prefix: Option<String>,
}

impl ConfigFile {
    fn try_from_matches(matches: &ArgMatches) -> Result<Self, PrintableMessage> {
        match matches.get_one::<String>("config_file") {
            Some(path) => Self::try_from_path(Path::new(path)),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE_PATH);
                if default_path.exists() {
                    Self::try_from_path(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn try_from_path(path: &Path) -> Result<Self, PrintableMessage> {
        let contents = std::fs::read_to_string(path).map_err(|io_error| {
            PrintableMessage::new_program_error(&format!(
                "error in config file `{}`: {io_error}",
                path.display()
            ))
        })?;
        serde_json::from_str(&contents).map_err(|json_error| {
            PrintableMessage::new_program_error(&format!(
                "error in config file `{}`: {json_error}",
                path.display()
            ))
        })
    }
}

/// User configured runtime configuration
#[derive(Debug)]
pub struct RuntimeConfig {
    schema_path: PathBuf,
    type_references: Vec<String>,
    use_read_only_types: bool,
    passthrough_custom_scalars: bool,
    custom_scalars_prefix: Option<String>,
    ts_interface_prefix: Option<String>,
}

impl RuntimeConfig {
    pub fn from_cli() -> Result<Self, PrintableMessage> {
        let matches = cli_parse();
        let config_file = ConfigFile::try_from_matches(&matches)?;
        let schema_path = matches
            .get_one::<String>("schema_path")
            .map(PathBuf::from)
            .or(config_file.schema_file)
            .unwrap_or_else(|| PathBuf::from("schema.json"));
        let type_references = matches
            .get_many::<String>("type_refs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        Ok(RuntimeConfig {
            schema_path,
            type_references,
            use_read_only_types: matches.get_flag("use_read_only_types")
                || config_file.use_read_only_types,
            passthrough_custom_scalars: matches.get_flag("use_custom_scalars")
                || config_file.passthrough_custom_scalars,
            custom_scalars_prefix: matches
                .get_one::<String>("custom_scalar_prefix")
                .cloned()
                .or(config_file.custom_scalars_prefix),
            ts_interface_prefix: matches
                .get_one::<String>("interface_prefix")
                .cloned()
                .or(config_file.ts_interface_prefix),
        })
    }

    pub fn schema_file_path(&self) -> &Path {
        &self.schema_path
    }

    pub fn type_references(&self) -> &[String] {
        &self.type_references
    }

    pub fn use_read_only_types(&self) -> bool {
        self.use_read_only_types
    }

    pub fn passthrough_custom_scalars(&self) -> bool {
        self.passthrough_custom_scalars
    }

    pub fn custom_scalars_prefix(&self) -> Option<&str> {
        self.custom_scalars_prefix.as_deref()
    }

    pub fn ts_interface_prefix(&self) -> Option<&str> {
        self.ts_interface_prefix.as_deref()
    }
}

#[derive(Debug)]
enum Severity {
    CompileError,
    ProgramError,
}

/// User facing diagnostic, printed to stdout
#[derive(Debug)]
pub struct PrintableMessage {
    severity: Severity,
    summary: String,
    help: Option<String>,
}

impl PrintableMessage {
    pub fn new_compile_error(summary: &str) -> Self {
        PrintableMessage {
            severity: Severity::CompileError,
            summary: summary.to_string(),
            help: None,
        }
    }

    pub fn new_program_error(summary: &str) -> Self {
        PrintableMessage {
            severity: Severity::ProgramError,
            summary: summary.to_string(),
            help: None,
        }
    }

    pub fn new_read_io_error(io_error: &std::io::Error, path: &Path) -> Self {
        Self::new_compile_error(&format!("could not read `{}`: {io_error}", path.display()))
    }

    pub fn with_help_text(&mut self, help: &str) {
        self.help = Some(help.to_string());
    }
}

impl fmt::Display for PrintableMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::CompileError => "error",
            Severity::ProgramError => "program error",
        };
        write!(f, "{}: {}", label.red().bold(), self.summary)?;
        if let Some(help) = &self.help {
            write!(f, "\n  {} help: {}", "=".blue().bold(), help)?;
        }
        Ok(())
    }
}

/// Builds a "did you mean" help text from the closest candidates, if any
pub fn similar_help_suggestions<'a>(
    needle: &str,
    haystack: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let mut scored = haystack
        .filter_map(|candidate| {
            let score = strsim::normalized_levenshtein(needle, candidate);
            if score > 0.5 {
                Some((candidate, score))
            } else {
                None
            }
        })
        .collect::<Vec<_>>();
    if scored.is_empty() {
        return None;
    }
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let names = scored
        .iter()
        .take(3)
        .map(|(name, _)| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("Did you mean {names}?"))
}

/// Prints the result of the program to the screen.
pub fn print_run_result(result: Result<(), Vec<PrintableMessage>>) {
    if let Err(messages) = result {
        for message in &messages {
            println!("{message}");
        }
        std::process::exit(1);
    }
}
