use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use vip_translate_core::{Environment, Vendor};

#[derive(Parser, Debug)]
#[command(name = "vip-translate")]
#[command(about = "Translate canonical VIP definitions into vendor load-balancer configurations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Translate one canonical config into a vendor artifact.
    Translate(TranslateArgs),
    /// Plan the promotion of one config into another environment.
    Promote(PromoteArgs),
    /// Check one config for translation readiness.
    Check(CheckArgs),
    /// Show the parsed structure of a single config file.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct TranslateArgs {
    /// Canonical config file (.json or .toml).
    pub input: PathBuf,
    /// Target vendor.
    #[arg(long, value_enum)]
    pub vendor: VendorArg,
    /// Write the artifact to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct PromoteArgs {
    /// Canonical config file for the source environment.
    pub input: PathBuf,
    /// Target environment.
    #[arg(long, value_enum)]
    pub to_env: EnvArg,
    /// Target datacenter code, e.g. LADC.
    #[arg(long)]
    pub datacenter: String,
    /// Target vendor.
    #[arg(long, value_enum)]
    pub vendor: VendorArg,
    /// Write the draft target config as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Canonical config file to check.
    pub input: PathBuf,
    /// Optional target vendor (informational; checks are vendor-independent).
    #[arg(long, value_enum)]
    pub vendor: Option<VendorArg>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Canonical config file to inspect.
    pub input: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum VendorArg {
    F5,
    Nginx,
    Avi,
}

impl From<VendorArg> for Vendor {
    fn from(arg: VendorArg) -> Self {
        match arg {
            VendorArg::F5 => Vendor::F5,
            VendorArg::Nginx => Vendor::Nginx,
            VendorArg::Avi => Vendor::Avi,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum EnvArg {
    Dev,
    Uat,
    Prod,
}

impl From<EnvArg> for Environment {
    fn from(arg: EnvArg) -> Self {
        match arg {
            EnvArg::Dev => Environment::Dev,
            EnvArg::Uat => Environment::Uat,
            EnvArg::Prod => Environment::Prod,
        }
    }
}
