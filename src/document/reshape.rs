/// Document reshaping
///
/// Turns a [`DidResolution`] into the JSON object returned to callers.
/// Required fields are always emitted; optional fields only when they
/// carry a non-empty, non-zero value. Object keys come out sorted, so a
/// given record always serializes to the same bytes.
use super::types::{
    AlsoKnownAs, Attribute, DelegateSign, DidResolution, Extension, Proof, PublicKey, Service,
    VerifiableCredential,
};
use serde_json::{json, Map, Value};

/// Reshape a resolution record into its output document
pub fn reshape_document(doc: &DidResolution) -> Map<String, Value> {
    let mut out = Map::new();

    out.insert("context".into(), json!(doc.context));
    out.insert("version".into(), json!(doc.version));
    out.insert("id".into(), json!(doc.id));
    out.insert(
        "publicKey".into(),
        Value::Array(doc.public_key.iter().map(public_key).collect()),
    );
    out.insert("authentication".into(), json!(doc.authentication));
    out.insert("extension".into(), Value::Object(reshape_extension(&doc.extension)));
    out.insert("created".into(), json!(doc.created));
    out.insert("updated".into(), json!(doc.updated));

    if !doc.also_known_as.is_empty() {
        out.insert(
            "alsoKnownAs".into(),
            Value::Array(doc.also_known_as.iter().map(also_known_as).collect()),
        );
    }

    if !doc.service.is_empty() {
        out.insert(
            "service".into(),
            Value::Array(
                doc.service
                    .iter()
                    .map(|s| Value::Object(reshape_service(s)))
                    .collect(),
            ),
        );
    }

    if doc.proof.is_complete() {
        out.insert("proof".into(), proof(&doc.proof));
    }

    out
}

/// Reshape the extension block; `ttl`, `type` and `attributes` are required
pub fn reshape_extension(ext: &Extension) -> Map<String, Value> {
    let mut out = Map::new();

    out.insert("ttl".into(), json!(ext.ttl));
    out.insert("type".into(), json!(ext.extension_type));
    out.insert(
        "attributes".into(),
        Value::Array(
            ext.attributes
                .iter()
                .map(|a| Value::Object(reshape_attribute(a)))
                .collect(),
        ),
    );

    if !ext.recovery.is_empty() {
        out.insert("recovery".into(), json!(ext.recovery));
    }
    if !ext.delegate_sign.is_empty() {
        out.insert("delegateSign".into(), delegate_sign(&ext.delegate_sign));
    }
    if !ext.verifiable_credentials.is_empty() {
        out.insert(
            "verifiableCredentials".into(),
            Value::Array(
                ext.verifiable_credentials
                    .iter()
                    .map(verifiable_credential)
                    .collect(),
            ),
        );
    }

    out
}

pub fn reshape_attribute(attr: &Attribute) -> Map<String, Value> {
    let mut out = Map::new();

    out.insert("key".into(), json!(attr.key));

    if !attr.desc.is_empty() {
        out.insert("desc".into(), json!(attr.desc));
    }
    if attr.encrypt != 0 {
        out.insert("encrypt".into(), json!(attr.encrypt));
    }
    if !attr.format.is_empty() {
        out.insert("format".into(), json!(attr.format));
    }
    if !attr.value.is_empty() {
        out.insert("value".into(), json!(attr.value));
    }

    out
}

/// Sub-resolver services additionally carry their connection details
pub fn reshape_service(service: &Service) -> Map<String, Value> {
    let mut out = Map::new();

    out.insert("id".into(), json!(service.id));
    out.insert("type".into(), json!(service.service_type));
    out.insert("serviceEndpoint".into(), json!(service.service_endpoint));

    if service.is_sub_resolver() {
        out.insert("version".into(), json!(service.version));
        out.insert("serverType".into(), json!(service.server_type));
        out.insert("protocol".into(), json!(service.protocol));
        out.insert("port".into(), json!(service.port));
    }

    out
}

fn public_key(key: &PublicKey) -> Value {
    json!({
        "id": key.id,
        "type": key.key_type,
        "controller": key.controller,
        "publicKeyHex": key.public_key_hex,
    })
}

fn also_known_as(aka: &AlsoKnownAs) -> Value {
    json!({ "type": aka.aka_type, "id": aka.id })
}

fn delegate_sign(sign: &DelegateSign) -> Value {
    json!({ "signer": sign.signer, "signatureValue": sign.signature_value })
}

fn verifiable_credential(vc: &VerifiableCredential) -> Value {
    json!({ "id": vc.id, "type": vc.credential_type })
}

fn proof(proof: &Proof) -> Value {
    json!({ "creator": proof.creator, "signatureValue": proof.signature_value })
}
