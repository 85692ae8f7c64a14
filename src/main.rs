use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    carousel_cli::run_cli().await
}
