use anyhow::Result;
use clap::Parser;
use nft_scripts::command_line::MintCommand;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cmd = MintCommand::parse();
    cmd.execute().await
}
