use clap::Parser;
use facilities_hca::{
    form_submission_status_envelope, SubmissionStatusClient, SubmissionStatusConfig,
    SubmissionStatusError,
};

/// sends a form submission status request to the enrollment system
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct HealthCheckArguments {
    /// path to .toml or .json submission status configuration
    #[arg(long)]
    configuration_file: String,
    /// submission to check. defaults to the configured health check id.
    #[arg(long)]
    submission_id: Option<u64>,
    /// print the request envelope without sending it
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

fn run(args: &HealthCheckArguments) -> Result<(), SubmissionStatusError> {
    let conf = SubmissionStatusConfig::try_from(&args.configuration_file)?;
    let submission_id = args
        .submission_id
        .or(conf.health_check_id)
        .ok_or_else(|| {
            SubmissionStatusError::ConfigurationError(String::from(
                "no submission id given and health_check_id is not set",
            ))
        })?;
    if args.dry_run {
        println!("{}", form_submission_status_envelope(submission_id));
        return Ok(());
    }
    let client = SubmissionStatusClient::try_from(&conf)?;
    log::debug!(
        "checking submission {submission_id} against {}",
        client.endpoint()
    );
    let response = client.post_status_request(submission_id)?;
    println!("{response}");
    Ok(())
}

fn main() {
    env_logger::init();
    let args = HealthCheckArguments::parse();
    match run(&args) {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running hca_health_check: {e}");
            std::process::exit(1);
        }
    }
}
