use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use near_primitives::types::AccountId;

use crate::{
    contracts::{NewArgs, NftMintArgs, TokenMetadata},
    credentials::CredentialStore,
    deploy::{Deploy, DEFAULT_WASM},
    init::Init,
    mint::{parse_copies, Mint},
    network::{NetworkProfile, TESTNET},
    prompt::{Prompter, Question},
    session::NearSession,
};

const NETWORK: Question = Question {
    flag: "network",
    describe: "Network ID. mainnet or testnet",
    default: Some(TESTNET),
};
const CONTRACT_ID: Question = Question {
    flag: "contractId",
    describe: "NFT Contract Address",
    default: None,
};
const WASM: Question = Question {
    flag: "wasm",
    describe: "WASM file path",
    default: Some(DEFAULT_WASM),
};
const NAME: Question = Question {
    flag: "name",
    describe: "Contract Name",
    default: None,
};
const SYMBOL: Question = Question {
    flag: "symbol",
    describe: "Contract Symbol",
    default: None,
};
const CREATOR: Question = Question {
    flag: "creator",
    describe: "Creator account ID",
    default: None,
};
const CREATOR_ROYALTY: Question = Question {
    flag: "creatorRoyalty",
    describe: "Creator royalty percentage",
    default: None,
};
const OWNER: Question = Question {
    flag: "owner",
    describe: "Token owner ID",
    default: None,
};
const TITLE: Question = Question {
    flag: "title",
    describe: "Token title",
    default: None,
};
const DESCRIPTION: Question = Question {
    flag: "description",
    describe: "Token description",
    default: None,
};
const MEDIA: Question = Question {
    flag: "media",
    describe: "Token media URL",
    default: None,
};
const COPIES: Question = Question {
    flag: "copies",
    describe: "How many copies to mint",
    default: None,
};

#[derive(Debug, Args)]
pub struct Target {
    /// Network ID. mainnet or testnet [default: testnet]
    #[clap(long)]
    network: Option<String>,

    /// NFT contract account
    #[clap(long = "contractId", visible_alias = "contract-id")]
    contract_id: Option<String>,

    /// Never prompt; options not given on the command line take their defaults
    #[clap(long)]
    non_interactive: bool,
}

/// Deploy the NFT contract code to an account.
#[derive(Debug, Parser)]
#[clap(name = "deploy", version)]
pub struct DeployCommand {
    #[clap(flatten)]
    target: Target,

    /// WASM file path [default: res/nft.wasm]
    #[clap(long)]
    wasm: Option<String>,
}

/// Initialize a deployed NFT contract.
#[derive(Debug, Parser)]
#[clap(name = "init", version)]
pub struct InitCommand {
    #[clap(flatten)]
    target: Target,

    #[clap(long)]
    name: Option<String>,

    #[clap(long)]
    symbol: Option<String>,

    /// Creator account receiving royalties
    #[clap(long)]
    creator: Option<String>,

    /// Creator royalty in percent, e.g. 2.5
    #[clap(long = "creatorRoyalty", visible_alias = "creator-royalty")]
    creator_royalty: Option<String>,
}

/// Mint copies of a token.
#[derive(Debug, Parser)]
#[clap(name = "mint", version)]
pub struct MintCommand {
    #[clap(flatten)]
    target: Target,

    #[clap(long)]
    owner: Option<String>,

    #[clap(long)]
    title: Option<String>,

    #[clap(long)]
    description: Option<String>,

    #[clap(long)]
    media: Option<String>,

    #[clap(long)]
    copies: Option<String>,
}

fn parse_account(question: &Question, value: &str) -> Result<AccountId> {
    value
        .parse()
        .with_context(|| format!("invalid account id {value:?} for --{}", question.flag))
}

impl Target {
    fn resolve<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(NetworkProfile, AccountId)> {
        let network = prompter.required(self.network, &NETWORK)?;
        let profile = NetworkProfile::resolve(&network)?;
        let contract_id = prompter.required(self.contract_id, &CONTRACT_ID)?;
        let contract_id = parse_account(&CONTRACT_ID, &contract_id)?;
        Ok((profile, contract_id))
    }
}

fn connect(profile: NetworkProfile) -> Result<NearSession> {
    let credentials = CredentialStore::in_home_dir()?;
    log::debug!("using credentials in {}", credentials.root().display());
    Ok(NearSession::connect(profile, credentials))
}

impl DeployCommand {
    pub fn prepare<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(NetworkProfile, Deploy)> {
        let (profile, contract_id) = self.target.resolve(prompter)?;
        let wasm = prompter.required(self.wasm, &WASM)?;
        Ok((profile, Deploy::new(contract_id, wasm.into())))
    }

    pub async fn execute(self) -> Result<()> {
        let mut prompter = Prompter::stdio(!self.target.non_interactive);
        let (profile, deploy) = self.prepare(&mut prompter)?;
        let session = connect(profile)?;
        deploy.run(&session).await?;
        Ok(())
    }
}

impl InitCommand {
    pub fn prepare<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(NetworkProfile, Init)> {
        let (profile, contract_id) = self.target.resolve(prompter)?;
        let name = prompter.required(self.name, &NAME)?;
        let symbol = prompter.required(self.symbol, &SYMBOL)?;
        let creator = prompter
            .optional(self.creator, &CREATOR)?
            .map(|creator| parse_account(&CREATOR, &creator))
            .transpose()?;
        let creator_royalty = prompter
            .optional(self.creator_royalty, &CREATOR_ROYALTY)?
            .map(|royalty| {
                royalty
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("invalid --creatorRoyalty {royalty:?}"))
            })
            .transpose()?;

        let args = NewArgs::new(contract_id.clone(), name, symbol, creator, creator_royalty)?;
        Ok((profile, Init::new(contract_id, args)))
    }

    pub async fn execute(self) -> Result<()> {
        let mut prompter = Prompter::stdio(!self.target.non_interactive);
        let (profile, init) = self.prepare(&mut prompter)?;
        log::debug!("new args: {:?}", init.args());
        let session = connect(profile)?;
        init.run(&session).await?;
        Ok(())
    }
}

impl MintCommand {
    pub fn prepare<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(NetworkProfile, Mint)> {
        let (profile, contract_id) = self.target.resolve(prompter)?;
        let owner = prompter.required(self.owner, &OWNER)?;
        let token_owner_id = parse_account(&OWNER, &owner)?;
        let token_metadata = TokenMetadata {
            title: prompter.optional(self.title, &TITLE)?,
            description: prompter.optional(self.description, &DESCRIPTION)?,
            media: prompter.optional(self.media, &MEDIA)?,
        };
        let copies = parse_copies(&prompter.required(self.copies, &COPIES)?)?;

        let args = NftMintArgs {
            token_owner_id,
            token_metadata,
        };
        Ok((profile, Mint::new(contract_id, args, copies)))
    }

    pub async fn execute(self) -> Result<()> {
        let mut prompter = Prompter::stdio(!self.target.non_interactive);
        let (profile, mint) = self.prepare(&mut prompter)?;
        let session = connect(profile)?;
        mint.run(&session).await?;
        Ok(())
    }
}
