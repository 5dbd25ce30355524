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

//! Compiled type descriptors.
//!
//! A descriptor bundle lists, per pallet (or runtime API), the storage items, calls, events,
//! errors and constants a runtime exposes, each mapped to the index of its type checksum.
//! Networks sharing a schema share a bundle. Turning descriptors into typed APIs is left to
//! the consumer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entries of one descriptor kind: pallet (or API) name, then item name, to checksum index.
pub type Entries = BTreeMap<String, BTreeMap<String, u32>>;

/// Kind of a descriptor entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
	/// Storage item.
	Storage,
	/// Dispatchable call.
	Call,
	/// Event.
	Event,
	/// Error.
	Error,
	/// Constant.
	Constant,
	/// Runtime API method.
	RuntimeApi,
}

/// Descriptor bundle, as shipped in a JSON asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptorBundle {
	/// Storage items.
	pub storage: Entries,
	/// Calls.
	pub tx: Entries,
	/// Events.
	pub events: Entries,
	/// Errors.
	pub errors: Entries,
	/// Constants.
	pub constants: Entries,
	/// Runtime API methods.
	pub apis: Entries,
}

impl DescriptorBundle {
	/// Parse a bundle from its JSON text.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Entries of the given kind.
	pub fn entries(&self, kind: DescriptorKind) -> &Entries {
		match kind {
			DescriptorKind::Storage => &self.storage,
			DescriptorKind::Call => &self.tx,
			DescriptorKind::Event => &self.events,
			DescriptorKind::Error => &self.errors,
			DescriptorKind::Constant => &self.constants,
			DescriptorKind::RuntimeApi => &self.apis,
		}
	}

	/// Checksum index of `pallet.item`, if the bundle describes it.
	pub fn checksum(&self, kind: DescriptorKind, pallet: &str, item: &str) -> Option<u32> {
		self.entries(kind).get(pallet)?.get(item).copied()
	}

	/// Names of all pallets appearing in any pallet-level kind of entry. Runtime APIs are not
	/// pallets and are not listed.
	pub fn pallets(&self) -> impl Iterator<Item = &str> {
		let mut pallets: Vec<&str> = [
			&self.storage,
			&self.tx,
			&self.events,
			&self.errors,
			&self.constants,
		]
		.into_iter()
		.flat_map(|entries| entries.keys().map(String::as_str))
		.collect();
		pallets.sort_unstable();
		pallets.dedup();
		pallets.into_iter()
	}
}

/// Static information about the assets of a network.
///
/// Reserved for per-asset data; nothing is shipped in it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMetadata {}

#[cfg(test)]
mod tests {
	use super::*;

	const BUNDLE: &str = r#"{
		"storage": { "System": { "Account": 0, "Number": 1 } },
		"tx": { "Balances": { "transfer_keep_alive": 2 } },
		"events": { "System": { "ExtrinsicSuccess": 3 } },
		"apis": { "Metadata": { "metadata_at_version": 4 } }
	}"#;

	#[test]
	fn parses_bundle_with_missing_kinds() {
		let bundle = DescriptorBundle::from_json(BUNDLE).unwrap();
		assert_eq!(bundle.checksum(DescriptorKind::Storage, "System", "Account"), Some(0));
		assert_eq!(
			bundle.checksum(DescriptorKind::Call, "Balances", "transfer_keep_alive"),
			Some(2)
		);
		assert_eq!(
			bundle.checksum(DescriptorKind::RuntimeApi, "Metadata", "metadata_at_version"),
			Some(4)
		);
		assert_eq!(bundle.checksum(DescriptorKind::Call, "System", "remark"), None);
		assert!(bundle.errors.is_empty());
		assert!(bundle.constants.is_empty());
	}

	#[test]
	fn lists_pallets_once() {
		let bundle = DescriptorBundle::from_json(BUNDLE).unwrap();
		assert_eq!(bundle.pallets().collect::<Vec<_>>(), vec!["Balances", "System"]);
	}

	#[test]
	fn rejects_unknown_kinds() {
		assert!(DescriptorBundle::from_json(r#"{ "views": {} }"#).is_err());
	}
}
