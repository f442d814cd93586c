use cli::{PrintableMessage, RuntimeConfig};
use graphql::schema::{self, Schema};
use graphql::TypeDescriptor;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use typescript::{CompileConfig, TypeMapper};

mod cli;
mod graphql;
mod typescript;

fn open_schema(path: &Path) -> Result<Schema, PrintableMessage> {
    let file = File::open(path)
        .map_err(|io_error| PrintableMessage::new_read_io_error(&io_error, path))?;
    Schema::try_from_reader(BufReader::new(file)).map_err(|schema_error| match schema_error {
        schema::Error::JSONParseError(json_error) => PrintableMessage::new_compile_error(
            &format!("malformed schema: JSON parse error: {json_error}"),
        ),
        schema::Error::UnknownTypeKind { name, kind } => PrintableMessage::new_compile_error(
            &format!("malformed schema: unknown kind `{kind}` for type `{name}`"),
        ),
    })
}

fn run(config: &RuntimeConfig) -> Result<(), Vec<PrintableMessage>> {
    let references = config.type_references();
    if references.is_empty() {
        return Ok(());
    }
    let schema = open_schema(config.schema_file_path()).map_err(|message| vec![message])?;
    let mapper = TypeMapper::new(&CompileConfig::from(config));
    let mut messages = Vec::new();
    for reference in references {
        match TypeDescriptor::from_reference(reference, &schema) {
            Ok(descriptor) => println!("{}", mapper.translate(&descriptor, None)),
            Err(message) => messages.push(message),
        }
    }
    if messages.is_empty() {
        Ok(())
    } else {
        Err(messages)
    }
}

fn main() {
    let config = match RuntimeConfig::from_cli() {
        Ok(config) => config,
        Err(message) => {
            println!("{message}");
            std::process::exit(1);
        }
    };
    cli::print_run_result(run(&config));
}
