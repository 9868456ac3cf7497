//! `domainscope debug` - uncached diagnostic lookup with abuse data.

use anyhow::Result;
use colored::Colorize;

use super::{validate_domain, Context};
use crate::cli::args::DebugArgs;
use crate::output::{self, OutputFormat};

pub async fn execute(ctx: Context, args: DebugArgs) -> Result<()> {
    let domain = validate_domain(&args.domain)?;

    if ctx.output_format == OutputFormat::Pretty && ctx.abuse_key.is_none() {
        eprintln!(
            "{} no abuse API key configured; the abuse section will be empty",
            "note:".yellow().bold()
        );
    }

    let researcher = ctx.researcher();
    let report = researcher.diagnose_domain(&domain).await?;

    output::render_report(ctx.output_format, &report)
}
