//! Mint domain — voice IP-asset requests.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::error::{Field, ValidationError};

pub use convert::{build, build_at};
pub use state::{InFlightGuard, InFlightMints};
pub use wire::{LicenseTerm, MintRequestDocument};

/// Owner every asset is minted to.
pub const OWNER_LOCATOR: &str = "email:creator@example.com:story-testnet";
pub const CREATOR_NAME: &str = "AI Voice Labs";
pub const CREATOR_EMAIL: &str = "creator@example.com";
pub const IP_TYPE: &str = "voice";
pub const VOICE_MIME_TYPE: &str = "audio/mpeg";

pub const LICENSE_TYPE_COMMERCIAL: &str = "commercial-use";
pub const LICENSE_DEFAULT_MINTING_FEE: u64 = 100;
pub const LICENSE_CURRENCY: &str = "0x1514000000000000000000000000000000000000";

/// The three user inputs of a mint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    #[serde(default)]
    pub character_name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub voice_sample_url: String,
}

impl MintRequest {
    pub fn new(
        character_name: impl Into<String>,
        image_url: impl Into<String>,
        voice_sample_url: impl Into<String>,
    ) -> Self {
        Self {
            character_name: character_name.into(),
            image_url: image_url.into(),
            voice_sample_url: voice_sample_url.into(),
        }
    }

    /// Every field must be non-empty. Whitespace-only counts as empty.
    /// All missing fields are reported together.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<Field> = self
            .fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// The two URLs, tagged with the field they came from.
    pub fn urls(&self) -> [(Field, &str); 2] {
        [
            (Field::ImageUrl, self.image_url.as_str()),
            (Field::VoiceSampleUrl, self.voice_sample_url.as_str()),
        ]
    }

    /// Build the wire payload, stamped with the current local time.
    pub fn to_document(&self) -> MintRequestDocument {
        build(&self.character_name, &self.image_url, &self.voice_sample_url)
    }

    fn fields(&self) -> [(Field, &str); 3] {
        [
            (Field::CharacterName, self.character_name.as_str()),
            (Field::ImageUrl, self.image_url.as_str()),
            (Field::VoiceSampleUrl, self.voice_sample_url.as_str()),
        ]
    }
}
