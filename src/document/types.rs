/// DID resolution record as returned by the resolution backend
///
/// Decoding is lenient about absence: a missing or `null` field takes its
/// zero value. Type mismatches are still decode errors.
use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resolved did:cndid document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidResolution {
    #[serde(default, deserialize_with = "nullable")]
    pub context: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub public_key: Vec<PublicKey>,
    #[serde(default, deserialize_with = "nullable")]
    pub authentication: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub also_known_as: Vec<AlsoKnownAs>,
    #[serde(default, deserialize_with = "nullable")]
    pub extension: Extension,
    #[serde(default, deserialize_with = "nullable")]
    pub service: Vec<Service>,
    #[serde(default, deserialize_with = "nullable")]
    pub created: String,
    #[serde(default, deserialize_with = "nullable")]
    pub updated: String,
    #[serde(default, deserialize_with = "nullable")]
    pub proof: Proof,
}

/// Public key entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKey {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    /// Key algorithm
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub key_type: String,
    /// Owning identifier
    #[serde(default, deserialize_with = "nullable")]
    pub controller: String,
    #[serde(default, deserialize_with = "nullable")]
    pub public_key_hex: String,
}

/// Associated identifier
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlsoKnownAs {
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub aka_type: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
}

/// Method-specific extension block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Public key ids usable for recovery
    #[serde(default, deserialize_with = "nullable")]
    pub recovery: Vec<String>,
    /// Cache lifetime in seconds
    #[serde(default, deserialize_with = "nullable")]
    pub ttl: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub delegate_sign: DelegateSign,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub extension_type: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub attributes: Vec<Attribute>,
    #[serde(default, deserialize_with = "nullable")]
    pub verifiable_credentials: Vec<VerifiableCredential>,
}

/// Third-party signature over the public keys
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateSign {
    #[serde(default, deserialize_with = "nullable")]
    pub signer: String,
    #[serde(default, deserialize_with = "nullable")]
    pub signature_value: String,
}

impl DelegateSign {
    pub fn is_empty(&self) -> bool {
        self.signer.is_empty() && self.signature_value.is_empty()
    }
}

/// Custom attribute
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Attribute {
    #[serde(default, deserialize_with = "nullable")]
    pub key: String,
    #[serde(default, deserialize_with = "nullable")]
    pub desc: String,
    /// 0 = plain, 1 = encrypted
    #[serde(default, deserialize_with = "nullable")]
    pub encrypt: u64,
    /// Content kind (image, text, video, mixture, ...)
    #[serde(default, deserialize_with = "nullable")]
    pub format: String,
    #[serde(default, deserialize_with = "nullable")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VerifiableCredential {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub credential_type: u64,
}

/// Service type that carries sub-resolver connection details
pub const SUB_RESOLVER_SERVICE: &str = "DIDSubResolver";

/// Service endpoint entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub service_type: String,
    /// Protocol version supported by a sub-resolver
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    #[serde(default, deserialize_with = "nullable")]
    pub server_type: u64,
    /// Transport protocol of a sub-resolver
    #[serde(default, deserialize_with = "nullable")]
    pub protocol: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub service_endpoint: String,
    #[serde(default, deserialize_with = "nullable")]
    pub port: u64,
}

impl Service {
    pub fn is_sub_resolver(&self) -> bool {
        self.service_type == SUB_RESOLVER_SERVICE
    }
}

/// Document signature
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    #[serde(default, deserialize_with = "nullable")]
    pub creator: String,
    #[serde(default, deserialize_with = "nullable")]
    pub signature_value: String,
}

impl Proof {
    /// A proof counts only when both parts are set
    pub fn is_complete(&self) -> bool {
        !self.creator.is_empty() && !self.signature_value.is_empty()
    }
}
