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

//! Metadata lookup by runtime code hash.

use crate::{
	hash::{ChainHash, CodeHash},
	registry::{MetadataBytes, MetadataRegistry, NetworkDescriptor},
	LOG_TARGET,
};
use std::sync::Arc;

/// Magic number prefixing every SCALE-encoded runtime metadata document (`meta`).
pub const METADATA_MAGIC: [u8; 4] = *b"meta";

/// Resolves the metadata of the runtime a node is running.
///
/// Resolution never fails: an unknown code hash, a missing asset or a broken one all result in
/// `None`. Concurrent resolutions of the same code hash share a single load.
#[derive(Debug, Clone)]
pub struct MetadataResolver {
	registry: Arc<MetadataRegistry>,
}

impl MetadataResolver {
	/// Resolve against `registry`.
	pub fn new(registry: Arc<MetadataRegistry>) -> Self {
		MetadataResolver { registry }
	}

	/// The registry resolutions are made against.
	pub fn registry(&self) -> &Arc<MetadataRegistry> {
		&self.registry
	}

	/// Decoded metadata of the runtime with the given code hash (`0x`-prefixed hex).
	pub async fn resolve_metadata(&self, code_hash: &str) -> Option<MetadataBytes> {
		let code_hash = match code_hash.parse::<ChainHash>() {
			Ok(code_hash) => code_hash,
			Err(e) => {
				log::trace!(target: LOG_TARGET, "Not resolving metadata of `{code_hash}`: {e}");
				return None
			},
		};
		self.resolve_metadata_by_hash(&code_hash).await
	}

	/// Decoded metadata of the runtime with the given code hash.
	pub async fn resolve_metadata_by_hash(&self, code_hash: &CodeHash) -> Option<MetadataBytes> {
		let network = self.resolve_network(code_hash)?;
		match network.metadata().await {
			Ok(metadata) => Some(metadata),
			Err(e) => {
				log::debug!(
					target: LOG_TARGET,
					"Metadata of {} (runtime {code_hash}) is unavailable: {e}",
					network.name(),
				);
				None
			},
		}
	}

	/// Registry entry of the runtime with the given code hash.
	pub fn resolve_network(&self, code_hash: &CodeHash) -> Option<Arc<NetworkDescriptor>> {
		let network = self.registry.get(code_hash).cloned();
		if network.is_none() {
			log::trace!(target: LOG_TARGET, "Unknown runtime {code_hash}");
		}
		network
	}
}

/// Version of a SCALE-encoded metadata document: the byte following the `meta` magic.
///
/// Only the prefix is inspected; the document itself is not decoded.
pub fn metadata_version(metadata: &[u8]) -> Option<u8> {
	match metadata {
		[m0, m1, m2, m3, version, ..] if [*m0, *m1, *m2, *m3] == METADATA_MAGIC => Some(*version),
		_ => None,
	}
}
