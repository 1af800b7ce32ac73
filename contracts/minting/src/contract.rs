use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String};

use eightclans_engine as engine;

use crate::{
    error::ContractError,
    storage::{
        utils::{
            bump_minted_count, get_admin, get_config, get_minted_count, get_supply, get_token,
            is_initialized, is_minting_active, next_token_id, save_admin, save_config, save_token,
            set_initialized, set_minting_active,
        },
        Config, TokenInfo,
    },
};

#[contract]
pub struct Minting;

#[contractimpl]
impl Minting {
    // takes an address and uses it as an administrator of the collection
    #[allow(dead_code)]
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        base_uri: String,
        per_wallet_limit: u32,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Minting: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        let config = Config {
            name: name.clone(),
            symbol: symbol.clone(),
            base_uri,
            per_wallet_limit,
        };

        save_config(&env, &config);
        save_admin(&env, &admin);

        set_initialized(&env);

        env.events()
            .publish(("initialize", "collection name: "), name);
        env.events()
            .publish(("initialize", "collection symbol: "), symbol);

        Ok(())
    }

    // Opens or closes the public mint; only the admin may flip the switch
    #[allow(dead_code)]
    pub fn set_minting_status(env: Env, active: bool) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        set_minting_active(&env, active);

        env.events()
            .publish(("set minting status", "active: "), active);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn minting_status(env: Env) -> bool {
        is_minting_active(&env)
    }

    // Mints the next sequential token to `minter` and persists its derived
    // clan, rarity and voting power as one record
    #[allow(dead_code)]
    pub fn mint(env: Env, minter: Address) -> Result<u64, ContractError> {
        minter.require_auth();

        if !is_minting_active(&env) {
            log!(&env, "Minting: Mint: Minting is not active");
            return Err(ContractError::MintingInactive);
        }

        if get_supply(&env) >= engine::MAX_SUPPLY {
            log!(&env, "Minting: Mint: Collection fully minted");
            return Err(ContractError::SupplyExhausted);
        }

        let config = get_config(&env)?;
        let minted = get_minted_count(&env, &minter);
        if minted >= config.per_wallet_limit {
            log!(
                &env,
                "Minting: Mint: Wallet reached mint limit. Minted: ",
                minted
            );
            return Err(ContractError::PerWalletLimitReached);
        }

        let id = next_token_id(&env);
        let assignment = engine::assign(id)?;

        let token = TokenInfo {
            id,
            owner: minter.clone(),
            clan: assignment.clan,
            rarity: assignment.rarity,
            voting_power: assignment.voting_power,
        };
        save_token(&env, &token);
        bump_minted_count(&env, &minter);

        env.events().publish(("mint", "minter: "), minter);
        env.events().publish(("mint", "id: "), id);
        env.events().publish(("mint", "clan: "), token.clan);
        env.events().publish(("mint", "rarity: "), token.rarity);

        Ok(id)
    }

    // Returns the full stored record for a minted token
    #[allow(dead_code)]
    pub fn token_info(env: Env, id: u64) -> Result<TokenInfo, ContractError> {
        if !(1..=engine::MAX_SUPPLY).contains(&id) {
            log!(&env, "Minting: Token info: Id out of range: ", id);
            return Err(ContractError::InvalidTokenId);
        }

        get_token(&env, id)
    }

    #[allow(dead_code)]
    pub fn clan_of(env: Env, id: u64) -> Result<u32, ContractError> {
        Ok(Self::token_info(env, id)?.clan)
    }

    #[allow(dead_code)]
    pub fn rarity_of(env: Env, id: u64) -> Result<u32, ContractError> {
        Ok(Self::token_info(env, id)?.rarity)
    }

    #[allow(dead_code)]
    pub fn voting_power_of(env: Env, id: u64) -> Result<u32, ContractError> {
        Ok(Self::token_info(env, id)?.voting_power)
    }

    #[allow(dead_code)]
    pub fn owner_of(env: Env, id: u64) -> Result<Address, ContractError> {
        Ok(Self::token_info(env, id)?.owner)
    }

    // Transfers a minted token to `to`; only the current owner may send it
    #[allow(dead_code)]
    pub fn transfer(env: Env, sender: Address, to: Address, id: u64) -> Result<(), ContractError> {
        sender.require_auth();

        let mut token = Self::token_info(env.clone(), id)?;

        if token.owner != sender {
            log!(
                &env,
                "Minting: Transfer: Unauthorized.",
                sender,
                " is not the owner of token ",
                id
            );
            return Err(ContractError::Unauthorized);
        }

        token.owner = to.clone();
        save_token(&env, &token);

        env.events().publish(("transfer", "from: "), sender);
        env.events().publish(("transfer", "to: "), to);
        env.events().publish(("transfer", "id: "), id);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn total_supply(env: Env) -> u64 {
        get_supply(&env)
    }

    #[allow(dead_code)]
    pub fn minted_by(env: Env, account: Address) -> u32 {
        get_minted_count(&env, &account)
    }

    #[allow(dead_code)]
    pub fn update_admin(env: Env, new_admin: Address) -> Result<Address, ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        save_admin(&env, &new_admin);

        env.events()
            .publish(("update admin", "new admin: "), new_admin.clone());

        Ok(new_admin)
    }

    #[allow(dead_code)]
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    pub fn show_admin(env: &Env) -> Result<Address, ContractError> {
        let maybe_admin = get_admin(env)?;
        Ok(maybe_admin)
    }

    pub fn show_config(env: &Env) -> Result<Config, ContractError> {
        let maybe_config = get_config(env)?;
        Ok(maybe_config)
    }
}
