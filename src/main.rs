use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use odm_cli::{
    DEFAULT_BOOK_FILE_FORMAT, DEFAULT_BOOK_FOLDER_FORMAT, NoninteractiveSettings, OdmCommand,
    positive_int, valid_book_format,
};

#[derive(Parser, Debug)]
#[command(name = "odm")]
#[command(about = "Download, return and renew OverDrive/Libby audiobook loans")]
struct Cli {
    /// Enable more verbose messages for debugging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Timeout interval (in seconds) for network requests
    #[arg(short, long, global = true, default_value = "10", value_parser = positive_int)]
    timeout: u64,

    /// Number of retries if a network request fails
    #[arg(short, long, global = true, default_value = "1", value_parser = positive_int)]
    retry: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get information about a loan file
    #[command(name = "info")]
    Information {
        /// Path to the .odm loan file
        odm_file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = InfoFormat::Text)]
        format: InfoFormat,
    },

    /// Download from a loan file
    #[command(name = "dl")]
    Download {
        /// Path to the .odm loan file
        odm_file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Return a loan file
    #[command(name = "ret")]
    Return {
        /// Path to the .odm loan file
        odm_file: PathBuf,
    },

    /// Interact with your Libby loans
    #[command(name = "libby")]
    Libby {
        #[command(flatten)]
        account: AccountArgs,

        #[command(flatten)]
        noninteractive: NoninteractiveArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Return Libby loans
    #[command(name = "libbyreturn")]
    LibbyReturn {
        #[command(flatten)]
        account: AccountArgs,
    },

    /// Renew Libby loans
    #[command(name = "libbyrenew")]
    LibbyRenew {
        #[command(flatten)]
        account: AccountArgs,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum InfoFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct AccountArgs {
    /// Folder where Libby settings are saved
    #[arg(long, default_value = "odmpy_settings")]
    settings: PathBuf,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Download folder path
    #[arg(short = 'd', long = "downloaddir", default_value = ".")]
    download_dir: PathBuf,

    /// Book folder format string. Fields: Title, Author, Series, ReadingOrder, Edition, ID
    #[arg(
        long = "bookfolderformat",
        default_value = DEFAULT_BOOK_FOLDER_FORMAT,
        value_parser = valid_book_format
    )]
    book_folder_format: String,

    /// Book file format string. Fields: Title, Author, Series, ReadingOrder, Edition, ID
    #[arg(
        long = "bookfileformat",
        default_value = DEFAULT_BOOK_FILE_FORMAT,
        value_parser = valid_book_format
    )]
    book_file_format: String,
}

/// Options that skip the interactive loan prompt, at most one at a time
#[derive(Args, Debug)]
#[group(id = "noninteractive", multiple = false)]
struct NoninteractiveArgs {
    /// Non-interactive mode that downloads the latest N number of loans
    #[arg(long = "latest", value_name = "N", value_parser = positive_int)]
    latest: Option<u64>,

    /// Non-interactive mode that downloads loans by the index entered
    #[arg(long = "select", value_name = "N", num_args = 1.., value_parser = positive_int)]
    select: Vec<u64>,

    /// Non-interactive mode that downloads loans by the loan ID entered
    #[arg(long = "selectid", value_name = "ID", num_args = 1..)]
    select_id: Vec<String>,

    /// Non-interactive mode that exports loan information into a json file at the path specified
    #[arg(long = "exportloans", value_name = "PATH")]
    export_loans: Option<PathBuf>,

    /// Non-interactive mode that exports library card information into a json file
    /// at the path specified
    #[arg(long = "exportcards", value_name = "PATH")]
    export_cards: Option<PathBuf>,

    /// Non-interactive mode that displays Libby signed-in status and token if authenticated
    #[arg(long)]
    check: bool,
}

impl InfoFormat {
    fn as_str(&self) -> &'static str {
        match self {
            InfoFormat::Text => "text",
            InfoFormat::Json => "json",
        }
    }
}

impl Commands {
    fn token(&self) -> OdmCommand {
        match self {
            Commands::Information { .. } => OdmCommand::Information,
            Commands::Download { .. } => OdmCommand::Download,
            Commands::Return { .. } => OdmCommand::Return,
            Commands::Libby { .. } => OdmCommand::Libby,
            Commands::LibbyReturn { .. } => OdmCommand::LibbyReturn,
            Commands::LibbyRenew { .. } => OdmCommand::LibbyRenew,
        }
    }
}

impl NoninteractiveArgs {
    fn into_settings(self) -> NoninteractiveSettings {
        NoninteractiveSettings {
            download_latest_n: self.latest,
            selected_loans_indices: self.select,
            selected_loans_ids: self.select_id,
            export_loans_path: self.export_loans,
            export_cards_path: self.export_cards,
            check_signed_in: self.check,
        }
    }
}

/// The validated invocation, one `key=value` per line
fn describe(cli: Cli) -> Vec<String> {
    let token = cli.command.token();
    let mut lines = vec![
        format!("command={}", token),
        format!("timeout={}", cli.timeout),
        format!("retry={}", cli.retry),
    ];

    let push_output = |lines: &mut Vec<String>, output: &OutputArgs| {
        lines.push(format!("download_dir={}", output.download_dir.display()));
        lines.push(format!("book_folder_format={}", output.book_folder_format));
        lines.push(format!("book_file_format={}", output.book_file_format));
    };

    match cli.command {
        Commands::Information { odm_file, format } => {
            lines.push(format!("odm_file={}", odm_file.display()));
            lines.push(format!("format={}", format.as_str()));
        }
        Commands::Download { odm_file, output } => {
            lines.push(format!("odm_file={}", odm_file.display()));
            push_output(&mut lines, &output);
        }
        Commands::Return { odm_file } => {
            lines.push(format!("odm_file={}", odm_file.display()));
        }
        Commands::Libby { account, noninteractive, output } => {
            lines.push(format!("settings={}", account.settings.display()));
            push_output(&mut lines, &output);
            let settings = noninteractive.into_settings();
            lines.push(format!("interactive={}", !settings.is_noninteractive()));
            for (option, value) in settings.entries() {
                lines.push(format!("{}={}", option, value));
            }
        }
        Commands::LibbyReturn { account } | Commands::LibbyRenew { account } => {
            lines.push(format!("settings={}", account.settings.display()));
        }
    }

    lines
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose { "odm=debug,odm_cli=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to initialise logging")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    tracing::debug!(
        command = %cli.command.token(),
        timeout = cli.timeout,
        retry = cli.retry,
        "arguments validated"
    );

    for line in describe(cli) {
        println!("{}", line);
    }

    Ok(())
}
