use anyhow::Result;
use make_migration_json::{
    cli::{Cli, Commands},
    commands::{make_migrations, validate_file, MakeOptions},
    logging::init_logger,
    schema::{ModifierRegistry, TypeRegistry},
    ConsoleUi, OnlyFilter, SchemaProcessor,
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);

    let processor = SchemaProcessor::new();
    let mut ui = ConsoleUi::new(!cli.no_color);

    match cli.command {
        Commands::Make {
            file,
            only,
            format,
            output,
            no_validate,
        } => {
            let start = Instant::now();

            let options = MakeOptions {
                only: OnlyFilter::from_args(only),
                format,
                output: output.as_deref(),
                validate: !no_validate,
            };
            let definitions = make_migrations(&processor, &file, &options, &mut ui)?;

            eprintln!(
                "\nBuilt {} migration definitions from {:?} in {:.1}s",
                definitions.len(),
                file,
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Validate { file } => {
            validate_file(&processor, &file, &mut ui)?;
        }

        Commands::ListTypes => {
            println!("Column types:\n");
            for name in TypeRegistry::standard().names() {
                println!("  {}", name);
            }

            println!("\nColumn modifiers:\n");
            for name in ModifierRegistry::standard().names() {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
