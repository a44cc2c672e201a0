use anyhow::Result;
use covgap::cli::{self, AnalyzeOptions, Commands};
use covgap::formatting::{ColorMode, FormattingConfig};
use covgap::suggest::CancellationSource;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse_args();
    cli::init_logging(args.verbosity);

    // CLI flag wins unless left on auto, in which case NO_COLOR and friends apply
    let mut formatting = FormattingConfig::from_env();
    if args.color != ColorMode::Auto {
        formatting.color = args.color;
    }
    formatting.apply();

    match args.command {
        Commands::Parse { report, output } => cli::handle_parse_command(&report, output.as_deref()),
        Commands::Analyze {
            report,
            provider,
            workers,
            format,
            output,
            config,
        } => {
            let cancel = CancellationSource::new();
            let token = cancel.token();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, cancelling outstanding provider calls");
                    cancel.cancel();
                }
            });

            let opts = AnalyzeOptions {
                report,
                provider,
                workers,
                format,
                output,
                config,
                quiet: args.quiet,
                formatting,
            };
            cli::handle_analyze_command(opts, token).await
        }
    }
}
