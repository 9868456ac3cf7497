//! `domainscope research` - cached research aggregation for a domain.

use anyhow::Result;

use super::{validate_domain, Context};
use crate::cli::args::ResearchArgs;
use crate::output;

pub async fn execute(ctx: Context, args: ResearchArgs) -> Result<()> {
    let domain = validate_domain(&args.domain)?;

    let researcher = ctx.researcher();
    let report = researcher.research_domain(&domain).await?;

    output::render_report(ctx.output_format, &report)
}
