//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use leadsift::{ExportFormat, LeadFilters};
use std::path::PathBuf;

/// LeadSift: lead data-quality validation and scoring
#[derive(Parser)]
#[command(name = "leadsift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file overriding domain lists, area codes and scoring tables
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a lead file and print the ranked leads
    Score {
        /// Path to the lead file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only show the N highest scoring leads
        #[arg(short = 'n', long)]
        top: Option<usize>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Score a lead file and export the result
    Export {
        /// Path to the lead file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>.scored.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Validate a single email address and/or phone number
    Check {
        /// Email address to validate
        #[arg(long)]
        email: Option<String>,

        /// Phone number to validate
        #[arg(long)]
        phone: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show analytics, score distribution and recommendations for a lead file
    Insights {
        /// Path to the lead file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Lead filter flags shared by `score` and `export`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Only include leads in this industry ("all" disables the filter)
    #[arg(long)]
    pub industry: Option<String>,

    /// Minimum annual revenue
    #[arg(long)]
    pub min_revenue: Option<f64>,

    /// Maximum annual revenue
    #[arg(long)]
    pub max_revenue: Option<f64>,

    /// Minimum lead score
    #[arg(long, default_value = "0")]
    pub min_score: u8,

    /// Maximum lead score
    #[arg(long, default_value = "100")]
    pub max_score: u8,

    /// Only include leads with a valid email
    #[arg(long)]
    pub valid_email: bool,

    /// Only include leads with a valid phone number
    #[arg(long)]
    pub valid_phone: bool,
}

impl FilterArgs {
    pub fn to_filters(&self) -> LeadFilters {
        let mut filters = LeadFilters::new()
            .with_revenue_range(self.min_revenue, self.max_revenue)
            .with_score_range(self.min_score, self.max_score);
        if let Some(industry) = &self.industry {
            filters = filters.with_industry(industry);
        }
        if self.valid_email {
            filters = filters.require_valid_email();
        }
        if self.valid_phone {
            filters = filters.require_valid_phone();
        }
        filters
    }
}
