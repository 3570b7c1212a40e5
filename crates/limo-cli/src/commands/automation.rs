//! Macro command - turn a message into a form-filling automation macro.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use limo_core::{EntityExtractor, FieldMapper, FormType, RuleBasedExtractor};

use super::{load_config, read_input};

/// Arguments for the macro command.
#[derive(Args)]
pub struct MacroArgs {
    /// Input text file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target form (default: from config)
    #[arg(long, value_enum)]
    form: Option<FormArg>,

    /// Emit the flat field variables instead of a macro
    #[arg(long)]
    variables: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormArg {
    /// New customer account form
    AccountCreation,
    /// Reservation form
    Reservation,
}

impl From<FormArg> for FormType {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::AccountCreation => FormType::AccountCreation,
            FormArg::Reservation => FormType::Reservation,
        }
    }
}

pub async fn run(args: MacroArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(args.input.as_ref())?;
    let result = RuleBasedExtractor::from_config(&config.extraction).extract(&text)?;

    let output = if args.variables {
        serde_json::to_string_pretty(&result.to_variables())?
    } else {
        let form = args.form.map(FormType::from).unwrap_or(config.mapping.form_type);
        let mapper = FieldMapper::from_config(&config.mapping);
        let today = chrono::Local::now().date_naive();

        let automation = mapper.generate_macro(form, &result, today);
        info!(
            "Generated {} with {} commands",
            automation.name,
            automation.commands.len()
        );
        serde_json::to_string_pretty(&automation)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Macro written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
