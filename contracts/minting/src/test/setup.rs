use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::contract::{Minting, MintingClient};

pub fn initialize_minting_contract<'a>(
    env: &Env,
    admin: Option<&Address>,
    per_wallet_limit: Option<u32>,
) -> MintingClient<'a> {
    let minting = MintingClient::new(env, &env.register_contract(None, Minting {}));

    let alt_admin = &Address::generate(env);

    let admin = admin.unwrap_or(alt_admin);
    let name = &String::from_str(env, "Eight Clans");
    let symbol = &String::from_str(env, "CLAN");
    let base_uri = &String::from_str(env, "ipfs://eightclans");
    let per_wallet_limit = per_wallet_limit.unwrap_or(u32::MAX);

    minting.initialize(admin, name, symbol, base_uri, &per_wallet_limit);

    minting
}
