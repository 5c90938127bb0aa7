use anyhow::Result;
use clap::Parser;
use nft_scripts::command_line::InitCommand;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cmd = InitCommand::parse();
    cmd.execute().await
}
