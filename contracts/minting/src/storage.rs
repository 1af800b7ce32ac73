use soroban_sdk::{contracttype, Address, String};

type TokenId = u64;

// Enum to represent different data keys in storage
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    IsInitialized,
    MintingActive,
    Supply,
    Token(TokenId),
    MintedBy(Address),
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub per_wallet_limit: u32,
}

/// The permanent record for one minted token.
///
/// * `owner` - current holder, updated on transfer
/// * `clan`, `rarity`, `voting_power` - derived trait triple, written once
/// at mint time and never recomputed
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct TokenInfo {
    pub id: u64,
    pub owner: Address,
    pub clan: u32,
    pub rarity: u32,
    pub voting_power: u32,
}

pub mod utils {

    use soroban_sdk::{Address, Env};

    use crate::error::ContractError;
    use crate::ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD};

    use super::{Config, DataKey, TokenInfo};

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().persistent().set(&DataKey::Admin, admin);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Admin, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
        let admin = env
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(ContractError::AdminNotSet)?;

        env.storage().persistent().has(&DataKey::Admin).then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&DataKey::Admin, LIFETIME_THRESHOLD, BUMP_AMOUNT)
        });

        Ok(admin)
    }

    pub fn save_config(env: &Env, config: &Config) {
        env.storage().persistent().set(&DataKey::Config, config);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Config, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_config(env: &Env) -> Result<Config, ContractError> {
        let config = env
            .storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(ContractError::ConfigNotFound)?;

        Ok(config)
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::IsInitialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage()
            .persistent()
            .set(&DataKey::IsInitialized, &true);
    }

    pub fn is_minting_active(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::MintingActive)
            .unwrap_or(false)
    }

    pub fn set_minting_active(env: &Env, active: bool) {
        env.storage()
            .persistent()
            .set(&DataKey::MintingActive, &active);
    }

    pub fn get_supply(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::Supply)
            .unwrap_or_default()
    }

    // Single writer per transaction; the ledger serializes invocations, so
    // two mints can never observe the same counter value.
    pub fn next_token_id(env: &Env) -> u64 {
        let id = get_supply(env) + 1u64;
        env.storage().instance().set(&DataKey::Supply, &id);
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

        id
    }

    pub fn save_token(env: &Env, token: &TokenInfo) {
        env.storage()
            .persistent()
            .set(&DataKey::Token(token.id), token);
        env.storage().persistent().extend_ttl(
            &DataKey::Token(token.id),
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );
    }

    pub fn get_token(env: &Env, id: u64) -> Result<TokenInfo, ContractError> {
        let token = env
            .storage()
            .persistent()
            .get(&DataKey::Token(id))
            .ok_or(ContractError::TokenNotFound)?;

        env.storage()
            .persistent()
            .has(&DataKey::Token(id))
            .then(|| {
                env.storage().persistent().extend_ttl(
                    &DataKey::Token(id),
                    LIFETIME_THRESHOLD,
                    BUMP_AMOUNT,
                )
            });

        Ok(token)
    }

    pub fn get_minted_count(env: &Env, account: &Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::MintedBy(account.clone()))
            .unwrap_or(0u32)
    }

    pub fn bump_minted_count(env: &Env, account: &Address) {
        let count = get_minted_count(env, account) + 1;
        env.storage()
            .persistent()
            .set(&DataKey::MintedBy(account.clone()), &count);
        env.storage().persistent().extend_ttl(
            &DataKey::MintedBy(account.clone()),
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );
    }
}
