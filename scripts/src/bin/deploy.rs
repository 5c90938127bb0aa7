use anyhow::Result;
use clap::Parser;
use nft_scripts::command_line::DeployCommand;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cmd = DeployCommand::parse();
    cmd.execute().await
}
