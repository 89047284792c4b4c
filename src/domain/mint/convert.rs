//! Construction of the IP-asset payload from the three user inputs.

use chrono::{DateTime, FixedOffset, Local};

use super::wire::{
    Attribute, Creator, IpAssetMetadata, LicenseTerm, LicenseTermValues, Media,
    MintRequestDocument, NftMetadata,
};
use super::{
    CREATOR_EMAIL, CREATOR_NAME, IP_TYPE, LICENSE_CURRENCY, LICENSE_DEFAULT_MINTING_FEE,
    LICENSE_TYPE_COMMERCIAL, OWNER_LOCATOR, VOICE_MIME_TYPE,
};

/// Build the payload, stamped with the current local time.
pub fn build(name: &str, image_url: &str, voice_url: &str) -> MintRequestDocument {
    build_at(name, image_url, voice_url, Local::now().fixed_offset())
}

/// Build the payload with an explicit creation timestamp.
pub fn build_at(
    name: &str,
    image_url: &str,
    voice_url: &str,
    created_at: DateTime<FixedOffset>,
) -> MintRequestDocument {
    MintRequestDocument {
        owner: OWNER_LOCATOR.to_string(),
        nft_metadata: NftMetadata {
            name: format!("{} Voice License", name),
            description: format!("A voice sample of the iconic narration style of {}", name),
            image: image_url.to_string(),
        },
        ip_asset_metadata: IpAssetMetadata {
            title: format!("{} Voice Model", name),
            created_at,
            ip_type: IP_TYPE.to_string(),
            creators: vec![Creator {
                name: CREATOR_NAME.to_string(),
                email: CREATOR_EMAIL.to_string(),
                crossmint_user_locator: OWNER_LOCATOR.to_string(),
                contribution_percent: 100,
            }],
            media: vec![Media {
                name: format!("{} Voice Sample", name),
                url: voice_url.to_string(),
                mime_type: VOICE_MIME_TYPE.to_string(),
            }],
            attributes: vec![
                attribute("Voice Type", "Narration"),
                attribute("Voice Character", name),
                attribute("License Type", "Commercial Use"),
            ],
        },
        license_terms: None,
    }
}

fn attribute(key: &str, value: &str) -> Attribute {
    Attribute {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl LicenseTerm {
    /// Commercial use with the default minting fee.
    pub fn commercial_use() -> Self {
        Self {
            kind: LICENSE_TYPE_COMMERCIAL.to_string(),
            terms: LicenseTermValues {
                default_minting_fee: LICENSE_DEFAULT_MINTING_FEE,
                currency: LICENSE_CURRENCY.to_string(),
            },
        }
    }
}

impl MintRequestDocument {
    pub fn with_license_terms(mut self, terms: Vec<LicenseTerm>) -> Self {
        self.license_terms = Some(terms);
        self
    }
}
