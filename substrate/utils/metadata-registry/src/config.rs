// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Registry manifest.
//!
//! The manifest is generated together with the assets it names and describes the static table
//! of supported networks:
//!
//! ```json
//! {
//!   "common_types": "common-types.b64",
//!   "networks": [
//!     {
//!       "name": "polkadot",
//!       "genesis_hash": "0x91b171bb158e2d3848fa23a9f1c25182fb8e20313b2c1eb49219da7a70ce90c3",
//!       "code_hash": "0x…",
//!       "descriptors": "descriptors/relay.json",
//!       "metadata": "polkadot.b64"
//!     }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default name of the shared types asset.
pub const DEFAULT_COMMON_TYPES: &str = "common-types.b64";

/// Description of all networks served by a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryManifest {
	/// Base64 asset holding the types shared by all networks.
	#[serde(default = "default_common_types")]
	pub common_types: String,
	/// Supported networks.
	pub networks: Vec<NetworkConfig>,
}

/// One supported network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
	/// Human readable name, used in logs.
	pub name: String,
	/// Genesis hash, `0x`-prefixed hex.
	pub genesis_hash: String,
	/// Code hash of the runtime the metadata was taken from, `0x`-prefixed hex.
	pub code_hash: String,
	/// JSON descriptor bundle. Networks naming the same asset share it.
	pub descriptors: String,
	/// Base64 asset holding the SCALE-encoded metadata.
	pub metadata: String,
}

fn default_common_types() -> String {
	DEFAULT_COMMON_TYPES.into()
}

impl RegistryManifest {
	/// Parse a manifest from JSON.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Read and parse the manifest file at `path`.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let json = std::fs::read_to_string(path)
			.map_err(|source| Error::ReadManifest { path: path.into(), source })?;
		Self::from_json(&json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	const MANIFEST: &str = r#"{
		"networks": [{
			"name": "westend",
			"genesis_hash": "0xe143f23803ac50e8f6f8e62695d1ce9e4e1d68aa36c1cd2cfd15340213f3423e",
			"code_hash": "0x0101010101010101010101010101010101010101010101010101010101010101",
			"descriptors": "relay.json",
			"metadata": "westend.b64"
		}]
	}"#;

	#[test]
	fn common_types_has_a_default() {
		let manifest = RegistryManifest::from_json(MANIFEST).unwrap();
		assert_eq!(manifest.common_types, DEFAULT_COMMON_TYPES);
		assert_eq!(manifest.networks.len(), 1);
		assert_eq!(manifest.networks[0].name, "westend");
	}

	#[test]
	fn unknown_fields_are_rejected() {
		assert_matches!(
			RegistryManifest::from_json(r#"{ "networks": [], "extra": 1 }"#),
			Err(Error::InvalidManifest(_))
		);
	}

	#[test]
	fn reads_manifest_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("manifest.json");
		std::fs::write(&path, MANIFEST).unwrap();
		assert_eq!(RegistryManifest::from_file(&path).unwrap().networks.len(), 1);

		assert_matches!(
			RegistryManifest::from_file(dir.path().join("missing.json")),
			Err(Error::ReadManifest { .. })
		);
	}
}
