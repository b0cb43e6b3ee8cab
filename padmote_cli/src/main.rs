use std::{fs, path::PathBuf, process};

use clap::Parser;
use padmote::{
    Action, CustomFunction, DeviceClass, KeyPress, Layout, Notification, RunCommand, Severity,
    TypeText,
};
use padmote_client::{Client, Notify, Url};

#[derive(Parser)]
#[command(version, about = "Configure button bindings on a local padmote driver")]
struct Cli {
    /// Configuration endpoint of the driver.
    #[arg(long, global = true, env = "PADMOTE_ENDPOINT")]
    endpoint: Option<Url>,
    /// Log each submission in detail.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Bind the selected button to a key press.
    PressKey {
        /// Name of the key to emit.
        key: String,
        #[command(flatten)]
        source: ButtonSource,
    },
    /// Bind the selected button to typing literal text.
    TypeText {
        /// The text to type.
        text: String,
        #[command(flatten)]
        source: ButtonSource,
    },
    /// Bind the selected button to a shell command.
    RunCommand {
        /// The command line to execute.
        command: String,
        #[command(flatten)]
        source: ButtonSource,
    },
    /// Bind the selected button to a custom function registered driver-side.
    CustomFunction {
        /// Name the function was registered under.
        function_name: String,
        #[command(flatten)]
        source: ButtonSource,
    },
    /// Turn the selected button into a volume control.
    ChangeVolume {
        #[command(flatten)]
        source: ButtonSource,
    },
    /// Apply every binding in a saved layout file.
    Apply {
        /// Path to the layout JSON file.
        layout: PathBuf,
    },
}

/// Where the button identifier comes from.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct ButtonSource {
    /// Diagram markup containing the selected button marker, e.g. "<!--BTN_A-->".
    #[arg(long, value_name = "MARKUP")]
    markup: Option<String>,
    /// An already-resolved button identifier.
    #[arg(long, value_name = "BUTTON")]
    button: Option<String>,
}

impl ButtonSource {
    /// Markup to resolve. A bare identifier resolves to itself.
    fn markup(self) -> String {
        self.markup.or(self.button).unwrap_or_default()
    }
}

/// Renders notifications to the terminal, standing in for the popup surface
/// of the browser UI.
struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        let line = format!("{} {}", notification.title, notification.message);
        match notification.severity {
            Severity::Error => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let client = match cli.endpoint {
        Some(endpoint) => Client::with_endpoint(endpoint),
        None => Client::new(),
    };
    let console = ConsoleNotifier;

    let outcome = match cli.command {
        Subcommand::PressKey { key, source } => {
            client
                .configure(&console, &source.markup(), KeyPress::new(key))
                .await
        }
        Subcommand::TypeText { text, source } => {
            client
                .configure(&console, &source.markup(), TypeText::new(text))
                .await
        }
        Subcommand::RunCommand { command, source } => {
            client
                .configure(&console, &source.markup(), RunCommand::new(command))
                .await
        }
        Subcommand::CustomFunction {
            function_name,
            source,
        } => {
            client
                .configure(&console, &source.markup(), CustomFunction::new(function_name))
                .await
        }
        Subcommand::ChangeVolume { source } => {
            client
                .configure(&console, &source.markup(), Action::ChangeVolume)
                .await
        }
        Subcommand::Apply { layout } => {
            let layout = Layout::from_json(&fs::read_to_string(&layout)?)?;
            log::debug!("applying layout with {} bindings", layout.len());
            let outcomes = client
                .apply_layout(&console, DeviceClass::XboxOneGamepad, &layout)
                .await;

            if outcomes.iter().any(|n| n.severity == Severity::Error) {
                process::exit(1);
            }
            return Ok(());
        }
    };

    if outcome.severity == Severity::Error {
        process::exit(1);
    }

    Ok(())
}
