use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    AdminNotSet = 1,
    ConfigNotFound = 2,
    Unauthorized = 3,
    MintingInactive = 4,
    SupplyExhausted = 5,
    PerWalletLimitReached = 6,
    InvalidTokenId = 7,
    InvalidRarity = 8,
    TokenNotFound = 9,
}

impl From<eightclans_engine::Error> for ContractError {
    fn from(err: eightclans_engine::Error) -> Self {
        match err {
            eightclans_engine::Error::InvalidTokenId(_) => ContractError::InvalidTokenId,
            eightclans_engine::Error::InvalidRarity(_) => ContractError::InvalidRarity,
        }
    }
}
