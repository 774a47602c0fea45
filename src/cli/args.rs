use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::EvaluationFilter;

/// RESUME-DASHBOARD: client for the resume evaluation service
///
/// Upload resumes and job descriptions, trigger evaluations and browse the
/// results, from the terminal or through the web dashboard.
#[derive(Parser, Debug)]
#[command(name = "resume-dashboard")]
#[command(version = "0.1.0")]
#[command(about = "Upload, evaluate and browse resume/job matches")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the dashboard config file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Evaluation service base URL (overrides the config file)
    #[arg(long, global = true, env = "RESUME_DASHBOARD_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show library counts and the most recent evaluations
    Summary,

    /// Upload a resume or a job description
    Upload(UploadArgs),

    /// Evaluate a resume against a job description
    Evaluate(EvaluateArgs),

    /// List evaluations, optionally filtered
    Results(FilterArgs),

    /// Show one evaluation with its resume and job description
    Show(ShowArgs),

    /// Export the (filtered) results table as CSV
    Export(ExportArgs),

    /// Generate a sample config file
    Init(InitArgs),

    /// Start the web dashboard
    Ui(UiArgs),
}

#[derive(Parser, Debug)]
pub struct UploadArgs {
    #[command(subcommand)]
    pub target: UploadTarget,
}

#[derive(Subcommand, Debug)]
pub enum UploadTarget {
    /// Upload a candidate's resume
    Resume {
        /// Resume file (PDF, DOCX or TXT)
        file: PathBuf,

        /// Student name
        #[arg(long)]
        name: String,

        /// Student email
        #[arg(long)]
        email: String,
    },

    /// Upload a job description
    JobDescription {
        /// Job description file (PDF, DOCX or TXT)
        file: PathBuf,

        /// Job title
        #[arg(long)]
        title: String,

        /// Job location
        #[arg(long)]
        location: String,
    },
}

#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Resume ID
    pub resume_id: i64,

    /// Job description ID
    pub jd_id: i64,
}

#[derive(Parser, Debug, Default)]
pub struct FilterArgs {
    /// Only evaluations for this job description
    #[arg(long)]
    pub jd_id: Option<i64>,

    /// Minimum relevance score (0-100)
    #[arg(long)]
    pub min_score: Option<u32>,

    /// Only evaluations with this verdict
    #[arg(long)]
    pub verdict: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Evaluation ID
    pub evaluation_id: i64,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output path for the CSV file
    #[arg(short, long, default_value = "evaluation_results.csv")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the config file
    #[arg(short, long, default_value = "dashboard.yaml")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct UiArgs {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl From<FilterArgs> for EvaluationFilter {
    fn from(args: FilterArgs) -> Self {
        EvaluationFilter {
            jd_id: args.jd_id,
            min_score: args.min_score,
            verdict: args.verdict.filter(|v| !v.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results_filters() {
        let args = Args::parse_from([
            "resume-dashboard",
            "results",
            "--jd-id",
            "3",
            "--min-score",
            "70",
        ]);
        match args.command {
            Command::Results(filter) => {
                assert_eq!(filter.jd_id, Some(3));
                assert_eq!(filter.min_score, Some(70));
                assert_eq!(filter.verdict, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_upload_job_description() {
        let args = Args::parse_from([
            "resume-dashboard",
            "upload",
            "job-description",
            "jd.pdf",
            "--title",
            "SRE",
            "--location",
            "Remote",
        ]);
        match args.command {
            Command::Upload(UploadArgs {
                target: UploadTarget::JobDescription { title, .. },
            }) => assert_eq!(title, "SRE"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_blank_verdict_is_no_filter() {
        let filter = EvaluationFilter::from(FilterArgs {
            verdict: Some(" ".to_string()),
            ..Default::default()
        });
        assert!(filter.is_empty());
    }
}
