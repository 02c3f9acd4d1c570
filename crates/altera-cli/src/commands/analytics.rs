use clap::Subcommand;

use altera_core::analytics::{compute_roi, AnalyticsClient, RoiInputs};
use altera_core::storage::Config;

#[derive(Subcommand)]
pub enum AnalyticsAction {
    /// List job postings with applicant and diamond counts
    Summary,
    /// Full dashboard payload for one job posting
    Job {
        /// Job description code (e.g. ENG-01)
        code: String,
    },
    /// Compute the ROI card locally from screening totals
    Roi {
        /// Total applicant count
        #[arg(long)]
        applicants: u64,
        /// Diamonds found
        #[arg(long)]
        diamonds: u64,
    },
}

pub fn run(action: AnalyticsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AnalyticsAction::Summary => {
            let config = Config::load_or_default();
            let client = AnalyticsClient::from_config(&config.api)?;
            let runtime = tokio::runtime::Runtime::new()?;
            let rows = runtime.block_on(client.fetch_summary())?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        AnalyticsAction::Job { code } => {
            let config = Config::load_or_default();
            let client = AnalyticsClient::from_config(&config.api)?;
            let runtime = tokio::runtime::Runtime::new()?;
            let detail = runtime.block_on(client.fetch_job_detail(&code))?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        AnalyticsAction::Roi {
            applicants,
            diamonds,
        } => {
            let report = compute_roi(&RoiInputs::new(applicants, diamonds));
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
