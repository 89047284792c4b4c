//! Wire types for `POST /api/v1/ip/collections/{collection_id}/ipassets`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Request body for IP-asset creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequestDocument {
    pub owner: String,
    pub nft_metadata: NftMetadata,
    pub ip_asset_metadata: IpAssetMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_terms: Option<Vec<LicenseTerm>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAssetMetadata {
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
    pub ip_type: String,
    pub creators: Vec<Creator>,
    pub media: Vec<Media>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub name: String,
    pub email: String,
    pub crossmint_user_locator: String,
    pub contribution_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub name: String,
    pub url: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseTerm {
    #[serde(rename = "type")]
    pub kind: String,
    pub terms: LicenseTermValues,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseTermValues {
    pub default_minting_fee: u64,
    pub currency: String,
}
