//! ABI shape validation for `*_VIP` interface entries
//!
//! VIP functions take custody-free swaps through Permit2, so their signature
//! must lead with the recipient address followed by the permit struct. The
//! validator collects every violation rather than stopping at the first, so
//! one run surfaces the full damage.

use crate::infra::FileSystem;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the generated interface artifact
pub const DEFAULT_ARTIFACT_PATH: &str = "out/ISettlerActions.sol/ISettlerActions.json";

/// Suffix marking an interface entry as a VIP variant
pub const VIP_SUFFIX: &str = "_VIP";

const PERMIT_STRUCT: &str = "struct ISignatureTransfer.PermitTransferFrom";

/// A generated contract artifact; only the ABI portion is read
#[derive(Debug, Deserialize)]
pub struct Artifact {
    /// Interface entries
    pub abi: Vec<AbiEntry>,
}

/// One interface entry (function, event, error, ...)
#[derive(Debug, Deserialize)]
pub struct AbiEntry {
    /// Entry type tag (`function`, `event`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Entry name; absent on constructors and fallbacks
    #[serde(default)]
    pub name: Option<String>,
    /// Ordered typed inputs
    #[serde(default)]
    pub inputs: Vec<AbiInput>,
}

/// One typed input parameter
#[derive(Debug, Deserialize)]
pub struct AbiInput {
    /// ABI type (`address`, `tuple`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Parameter name
    #[serde(default)]
    pub name: String,
    /// Source-level type, present for structs
    #[serde(rename = "internalType", default)]
    pub internal_type: Option<String>,
}

fn valid_vip(entry: &AbiEntry) -> bool {
    let [recipient, permit, ..] = entry.inputs.as_slice() else {
        return false;
    };

    if recipient.kind != "address" || recipient.name != "recipient" {
        return false;
    }

    permit.kind == "tuple"
        && permit.internal_type.as_deref() == Some(PERMIT_STRUCT)
        && (permit.name == "permit" || permit.name == "takerPermit")
}

/// Names of all VIP functions whose parameter shape is wrong.
///
/// Non-function entries and functions without the VIP suffix are ignored.
pub fn malformed_vips(abi: &[AbiEntry]) -> Vec<String> {
    abi.iter()
        .filter(|entry| entry.kind == "function")
        .filter(|entry| {
            entry
                .name
                .as_deref()
                .is_some_and(|name| name.ends_with(VIP_SUFFIX))
        })
        .filter(|entry| !valid_vip(entry))
        .filter_map(|entry| entry.name.clone())
        .collect()
}

/// Load and parse an interface artifact from disk.
pub fn load_artifact<FS: FileSystem>(fs: &FS, path: &Path) -> Result<Artifact> {
    let contents = fs
        .read_to_string(path)
        .with_context(|| format!("Failed to read ABI artifact {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse ABI artifact {}", path.display()))
}
