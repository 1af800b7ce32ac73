#![no_std]

//! Deterministic trait assignment for the Eight Clans collection.
//!
//! Every token id in `[1, MAX_SUPPLY]` maps to a clan, a rarity tier and a
//! voting power weight. All three derivations are pure functions of the id,
//! so the minting contract and the off-chain metadata generator always agree
//! on the result. The crate is `no_std` and carries no Soroban types, which
//! lets it link into the contract wasm and into native tooling alike.
//!
//! Rarity is drawn from a fixed hash policy: Keccak-256 over the 32-byte
//! big-endian encoding of the id, with the digest read as a big-endian
//! 256-bit integer and reduced modulo [`ROLL_MODULUS`]. Changing either the
//! encoding or the tier boundaries changes the published collection's
//! economics and requires a new collection version.

use sha3::{Digest, Keccak256};

/// Total number of mintable tokens.
pub const MAX_SUPPLY: u64 = 1600;

/// Number of clans partitioning the id space.
pub const CLAN_COUNT: u64 = 8;

/// Tokens per clan; clans are contiguous id blocks of this size.
pub const TOKENS_PER_CLAN: u64 = MAX_SUPPLY / CLAN_COUNT;

/// Rarity rolls are drawn from `[0, ROLL_MODULUS)`.
pub const ROLL_MODULUS: u32 = 1000;

/// Number of rarity tiers, 0 = Common up to 4 = Legendary.
pub const RARITY_TIERS: u32 = 5;

// Exclusive upper roll bound per tier, rarest first. Together the four
// bounds split [0, ROLL_MODULUS) into 2.5% / 7.5% / 15% / 25% / 50%.
const LEGENDARY_BOUND: u32 = 25;
const EPIC_BOUND: u32 = 100;
const RARE_BOUND: u32 = 250;
const UNCOMMON_BOUND: u32 = 500;

pub const CLAN_NAMES: [&str; CLAN_COUNT as usize] = [
    "Dragon", "Tiger", "Serpent", "Crane", "Wolf", "Bear", "Raven", "Koi",
];

pub const CLAN_VIRTUES: [&str; CLAN_COUNT as usize] = [
    "Courage",
    "Strength",
    "Wisdom",
    "Grace",
    "Loyalty",
    "Endurance",
    "Cunning",
    "Perseverance",
];

pub const RARITY_NAMES: [&str; RARITY_TIERS as usize] =
    ["Common", "Uncommon", "Rare", "Epic", "Legendary"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Token id outside `[1, MAX_SUPPLY]`.
    InvalidTokenId(u64),
    /// Rarity tier outside `[0, RARITY_TIERS)`.
    InvalidRarity(u32),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidTokenId(id) => {
                write!(f, "token id {} outside [1, {}]", id, MAX_SUPPLY)
            }
            Error::InvalidRarity(rarity) => {
                write!(f, "rarity {} outside [0, {})", rarity, RARITY_TIERS)
            }
        }
    }
}

impl core::error::Error for Error {}

/// The full derived record for one token. The three trait fields are
/// computed together and must be persisted together by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub id: u64,
    pub clan: u32,
    pub rarity: u32,
    pub voting_power: u32,
}

fn check_id(id: u64) -> Result<(), Error> {
    if !(1..=MAX_SUPPLY).contains(&id) {
        return Err(Error::InvalidTokenId(id));
    }
    Ok(())
}

/// Clan index for a token id: `(id - 1) / TOKENS_PER_CLAN`.
///
/// Ids `[1, 200]` land in clan 0, `[201, 400]` in clan 1 and so on up to
/// `[1401, 1600]` in clan 7.
pub fn assign_clan(id: u64) -> Result<u32, Error> {
    check_id(id)?;

    Ok(((id - 1) / TOKENS_PER_CLAN) as u32)
}

/// Raw rarity roll in `[0, ROLL_MODULUS)` for a token id.
///
/// Keccak-256 over the 32-byte big-endian encoding of the id; the digest is
/// read as a big-endian 256-bit integer and reduced modulo `ROLL_MODULUS`.
pub fn rarity_roll(id: u64) -> Result<u32, Error> {
    check_id(id)?;

    let mut preimage = [0u8; 32];
    preimage[24..].copy_from_slice(&id.to_be_bytes());
    let digest = Keccak256::digest(preimage);

    // Modular reduction of the full 256-bit digest, one byte at a time.
    // Truncating to a machine word first would give a different residue.
    let mut roll: u32 = 0;
    for byte in digest {
        roll = (roll * 256 + byte as u32) % ROLL_MODULUS;
    }

    Ok(roll)
}

fn tier_for_roll(roll: u32) -> u32 {
    if roll < LEGENDARY_BOUND {
        4
    } else if roll < EPIC_BOUND {
        3
    } else if roll < RARE_BOUND {
        2
    } else if roll < UNCOMMON_BOUND {
        1
    } else {
        0
    }
}

/// Rarity tier for a token id, 0 = Common up to 4 = Legendary.
pub fn assign_rarity(id: u64) -> Result<u32, Error> {
    let roll = rarity_roll(id)?;

    Ok(tier_for_roll(roll))
}

/// Voting power weight for a rarity tier: `(rarity + 1)^2`.
///
/// Common 1, Uncommon 4, Rare 9, Epic 16, Legendary 25. The quadratic
/// progression is part of the published governance economics.
pub fn voting_power(rarity: u32) -> Result<u32, Error> {
    if rarity >= RARITY_TIERS {
        return Err(Error::InvalidRarity(rarity));
    }

    Ok((rarity + 1) * (rarity + 1))
}

/// Intra-clan ordinal for a token id: `((id - 1) % TOKENS_PER_CLAN) + 1`.
pub fn clan_sequence(id: u64) -> Result<u64, Error> {
    check_id(id)?;

    Ok((id - 1) % TOKENS_PER_CLAN + 1)
}

/// Derives the full trait triple for a token id.
pub fn assign(id: u64) -> Result<Assignment, Error> {
    let clan = assign_clan(id)?;
    let rarity = assign_rarity(id)?;
    let power = voting_power(rarity)?;

    Ok(Assignment {
        id,
        clan,
        rarity,
        voting_power: power,
    })
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;
