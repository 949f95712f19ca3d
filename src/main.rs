use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tapbuy_alma::application::override_rule::PaymentUrlOverride;
use tapbuy_alma::infrastructure::json_serializer::JsonSerializer;
use tapbuy_alma::infrastructure::origin::{DEFAULT_PARTNER_HEADER, OriginStrategy, detector_factory};
use tapbuy_alma::interfaces::jsonl::invocation_reader::InvocationReader;
use tapbuy_alma::interfaces::jsonl::result_writer::ResultWriter;
use tapbuy_alma::logger::{self, LogFormat};
use tracing::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input invocations JSON Lines file, `-` for stdin
    input: PathBuf,

    /// How partner calls are recognized
    #[arg(long, value_enum, env = "TAPBUY_ORIGIN", default_value_t = OriginStrategy::Detector)]
    origin: OriginStrategy,

    /// Header the partner sets on its calls
    #[arg(long, env = "TAPBUY_HEADER_NAME", default_value = DEFAULT_PARTNER_HEADER)]
    header_name: String,

    /// Expected header value (only with `--origin detector`)
    #[arg(long, env = "TAPBUY_PARTNER_TOKEN")]
    partner_token: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "TAPBUY_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[arg(long, value_enum, env = "TAPBUY_LOG_FORMAT", default_value_t = LogFormat::Default)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::setup(&cli.log_level, cli.log_format).into_diagnostic()?;

    let rule = PaymentUrlOverride::new(Box::new(JsonSerializer::new()));
    let detector_for = detector_factory(cli.origin, cli.header_name, cli.partner_token);

    let source: Box<dyn Read> = if cli.input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&cli.input).into_diagnostic()?)
    };

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    for item in InvocationReader::new(source).invocations() {
        let invocation = match item {
            Ok(invocation) => invocation,
            Err(e) => {
                error!(error = %e, "Error reading invocation");
                continue;
            }
        };
        let headers = match invocation.header_map() {
            Ok(headers) => headers,
            Err(e) => {
                error!(error = %e, "Error reading invocation");
                continue;
            }
        };

        let detector = detector_for(headers);
        let result = rule.after_build(invocation.result, &invocation.subject, detector.as_ref());
        writer.write_request(&result).into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
