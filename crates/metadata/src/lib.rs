//! Batch metadata generation for the Eight Clans collection.
//!
//! Produces one structured record per token id, derived through
//! [`eightclans_engine`] so the traits written here can never diverge from
//! what the minting contract stores on-chain. Output is deterministic:
//! the same id and base URI always serialize to the same bytes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use eightclans_engine as engine;

pub const COLLECTION_NAME: &str = "Eight Clans";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("trait assignment failed: {0}")]
    Assignment(#[from] engine::Error),
    #[error("failed to write metadata: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Attribute values are either display strings or plain numbers, matching
/// the marketplace metadata convention.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(u64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}

/// Generates the metadata set for the collection.
#[derive(Clone, Debug)]
pub struct Generator {
    base_uri: String,
}

impl Generator {
    /// `base_uri` is the content-addressed directory holding the token
    /// images, without a trailing slash.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
        }
    }

    /// Builds the record for one token id.
    pub fn token(&self, id: u64) -> Result<TokenMetadata, MetadataError> {
        let assignment = engine::assign(id)?;
        let sequence = engine::clan_sequence(id)?;

        let clan_name = engine::CLAN_NAMES[assignment.clan as usize];
        let clan_virtue = engine::CLAN_VIRTUES[assignment.clan as usize];
        let rarity_name = engine::RARITY_NAMES[assignment.rarity as usize];

        Ok(TokenMetadata {
            name: format!("{COLLECTION_NAME} #{id}"),
            description: format!(
                "A {rarity_name} warrior of Clan {clan_name}, sworn to the virtue of {clan_virtue}."
            ),
            image: format!("{}/{id}.png", self.base_uri),
            attributes: vec![
                text_attribute("Clan", clan_name),
                text_attribute("Virtue", clan_virtue),
                text_attribute("Rarity", rarity_name),
                number_attribute("Clan Sequence", sequence),
                number_attribute("Voting Power", u64::from(assignment.voting_power)),
            ],
        })
    }

    /// Builds the records for every token id, in id order. Each record is
    /// independent of the others, so callers may just as well shard the id
    /// range and run this in parallel.
    pub fn collection(&self) -> Result<Vec<TokenMetadata>, MetadataError> {
        (1..=engine::MAX_SUPPLY).map(|id| self.token(id)).collect()
    }

    /// Writes one `<id>.json` file per token into `dir`, creating the
    /// directory if needed. Returns the number of files written.
    pub fn write_collection(&self, dir: &Path) -> Result<usize, MetadataError> {
        fs::create_dir_all(dir)?;

        for id in 1..=engine::MAX_SUPPLY {
            let token = self.token(id)?;
            let json = serde_json::to_string_pretty(&token)?;
            fs::write(dir.join(format!("{id}.json")), json)?;
        }

        Ok(engine::MAX_SUPPLY as usize)
    }
}

fn text_attribute(trait_type: &str, value: &str) -> Attribute {
    Attribute {
        trait_type: trait_type.to_string(),
        value: AttributeValue::Text(value.to_string()),
        display_type: None,
    }
}

fn number_attribute(trait_type: &str, value: u64) -> Attribute {
    Attribute {
        trait_type: trait_type.to_string(),
        value: AttributeValue::Number(value),
        display_type: Some("number".to_string()),
    }
}
