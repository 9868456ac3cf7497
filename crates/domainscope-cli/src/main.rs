//! domainscope - aggregated domain research from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    domainscope_cli::run().await
}
