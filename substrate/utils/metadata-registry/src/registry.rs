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

//! Per-network descriptor registry.
//!
//! The registry is an immutable table keyed by runtime code hash. Each entry knows how to load
//! the network's descriptors, the shared common types and the network's metadata, but nothing
//! is loaded until somebody asks for it. Supporting a new runtime means shipping a new table;
//! the registry is never mutated after [`MetadataRegistryBuilder::build`].

use crate::{
	base64::Base64Decoder,
	config::RegistryManifest,
	descriptors::{AssetMetadata, DescriptorBundle},
	error::{Error, LoadError, Result},
	hash::{ChainHash, CodeHash, GenesisHash},
	lazy::{LazyLoader, LoadResult, LoaderState},
	source::AssetSource,
	LOG_TARGET,
};
use std::{
	collections::{hash_map::Entry, HashMap},
	future::Future,
	sync::Arc,
};

/// Decoded bytes of a base64 asset.
pub type MetadataBytes = Arc<[u8]>;

/// Everything the registry knows about one network.
pub struct NetworkDescriptor {
	name: String,
	genesis_hash: GenesisHash,
	code_hash: CodeHash,
	descriptors: Arc<LazyLoader<Arc<DescriptorBundle>>>,
	common_types: Arc<LazyLoader<MetadataBytes>>,
	asset_metadata: AssetMetadata,
	metadata: LazyLoader<MetadataBytes>,
}

impl NetworkDescriptor {
	/// Name of the network.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Genesis hash of the network.
	pub fn genesis_hash(&self) -> GenesisHash {
		self.genesis_hash
	}

	/// Code hash of the runtime this entry describes.
	pub fn code_hash(&self) -> CodeHash {
		self.code_hash
	}

	/// Static asset information.
	pub fn asset_metadata(&self) -> &AssetMetadata {
		&self.asset_metadata
	}

	/// Descriptor bundle of the network. May be shared with other networks.
	pub fn descriptors(
		&self,
	) -> impl Future<Output = LoadResult<Arc<DescriptorBundle>>> + Send + 'static {
		self.descriptors.get()
	}

	/// Decoded types shared by all networks.
	pub fn common_types(&self) -> impl Future<Output = LoadResult<MetadataBytes>> + Send + 'static {
		self.common_types.get()
	}

	/// Decoded SCALE-encoded metadata of the network.
	pub fn metadata(&self) -> impl Future<Output = LoadResult<MetadataBytes>> + Send + 'static {
		self.metadata.get()
	}

	/// State of the metadata loader.
	pub fn metadata_state(&self) -> LoaderState {
		self.metadata.state()
	}
}

impl std::fmt::Debug for NetworkDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("NetworkDescriptor")
			.field("name", &self.name)
			.field("genesis_hash", &self.genesis_hash)
			.field("code_hash", &self.code_hash)
			.field("descriptors", &self.descriptors.name())
			.field("metadata", &self.metadata.name())
			.finish()
	}
}

/// Registry of supported networks, keyed by runtime code hash.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
	entries: HashMap<CodeHash, Arc<NetworkDescriptor>>,
	by_genesis_hash: HashMap<GenesisHash, CodeHash>,
}

impl MetadataRegistry {
	/// Start building a registry whose assets come from `source`. `common_types` names the
	/// base64 asset shared by all networks.
	pub fn builder(
		source: Arc<dyn AssetSource>,
		common_types: impl Into<String>,
	) -> MetadataRegistryBuilder {
		MetadataRegistryBuilder::new(source, common_types)
	}

	/// Build the registry described by `manifest`.
	pub fn from_manifest(
		manifest: &RegistryManifest,
		source: Arc<dyn AssetSource>,
	) -> Result<Self> {
		let mut builder = Self::builder(source, manifest.common_types.clone());
		for network in &manifest.networks {
			let parse = |hash: &str| {
				hash.parse::<ChainHash>()
					.map_err(|source| Error::InvalidHash { network: network.name.clone(), source })
			};
			builder.add_network(
				&network.name,
				parse(&network.genesis_hash)?,
				parse(&network.code_hash)?,
				&network.descriptors,
				&network.metadata,
			)?;
		}
		Ok(builder.build())
	}

	/// Entry for the runtime with the given code hash.
	pub fn get(&self, code_hash: &CodeHash) -> Option<&Arc<NetworkDescriptor>> {
		self.entries.get(code_hash)
	}

	/// Entry for the network with the given genesis hash.
	pub fn by_genesis_hash(&self, genesis_hash: &GenesisHash) -> Option<&Arc<NetworkDescriptor>> {
		self.by_genesis_hash.get(genesis_hash).and_then(|code_hash| self.get(code_hash))
	}

	/// All registered networks, in no particular order.
	pub fn networks(&self) -> impl Iterator<Item = &Arc<NetworkDescriptor>> {
		self.entries.values()
	}

	/// Number of registered networks.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no network is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Load the metadata of every network concurrently.
	///
	/// Returns the number of networks whose metadata is available.
	pub async fn preload(&self) -> usize {
		let loads = self.entries.values().map(|network| network.metadata());
		let loaded = futures::future::join_all(loads)
			.await
			.into_iter()
			.filter(|result| result.is_ok())
			.count();
		log::debug!(target: LOG_TARGET, "Preloaded metadata of {loaded}/{} networks", self.len());
		loaded
	}
}

/// Builder of a [`MetadataRegistry`].
pub struct MetadataRegistryBuilder {
	source: Arc<dyn AssetSource>,
	decoder: Arc<Base64Decoder>,
	common_types: Arc<LazyLoader<MetadataBytes>>,
	descriptors: HashMap<String, Arc<LazyLoader<Arc<DescriptorBundle>>>>,
	registry: MetadataRegistry,
}

impl MetadataRegistryBuilder {
	fn new(source: Arc<dyn AssetSource>, common_types: impl Into<String>) -> Self {
		let decoder = Arc::new(Base64Decoder::new());
		let common_types = Arc::new(base64_loader(&source, &decoder, common_types.into()));
		MetadataRegistryBuilder {
			source,
			decoder,
			common_types,
			descriptors: HashMap::new(),
			registry: MetadataRegistry::default(),
		}
	}

	/// Register a network.
	///
	/// `descriptors` names a JSON descriptor bundle, loaded once for all networks naming it.
	/// `metadata` names the base64 metadata asset of this network.
	pub fn add_network(
		&mut self,
		name: &str,
		genesis_hash: GenesisHash,
		code_hash: CodeHash,
		descriptors: &str,
		metadata: &str,
	) -> Result<&mut Self> {
		if self.registry.entries.contains_key(&code_hash) {
			return Err(Error::DuplicateCodeHash(code_hash))
		}
		match self.registry.by_genesis_hash.entry(genesis_hash) {
			Entry::Occupied(_) => return Err(Error::DuplicateGenesisHash(genesis_hash)),
			Entry::Vacant(entry) => {
				entry.insert(code_hash);
			},
		}

		let descriptors = self
			.descriptors
			.entry(descriptors.to_owned())
			.or_insert_with(|| Arc::new(descriptors_loader(&self.source, descriptors.to_owned())))
			.clone();

		let network = NetworkDescriptor {
			name: name.to_owned(),
			genesis_hash,
			code_hash,
			descriptors,
			common_types: self.common_types.clone(),
			asset_metadata: AssetMetadata::default(),
			metadata: base64_loader(&self.source, &self.decoder, metadata.to_owned()),
		};
		log::debug!(
			target: LOG_TARGET,
			"Registered network {name} (genesis {genesis_hash}, runtime {code_hash})",
		);
		self.registry.entries.insert(code_hash, Arc::new(network));

		Ok(self)
	}

	/// Finish building.
	pub fn build(self) -> MetadataRegistry {
		self.registry
	}
}

impl std::fmt::Debug for MetadataRegistryBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("MetadataRegistryBuilder")
			.field("common_types", &self.common_types.name())
			.field("registry", &self.registry)
			.finish()
	}
}

/// Loader of a base64 asset.
fn base64_loader(
	source: &Arc<dyn AssetSource>,
	decoder: &Arc<Base64Decoder>,
	asset: String,
) -> LazyLoader<MetadataBytes> {
	let source = source.clone();
	let decoder = decoder.clone();
	LazyLoader::new(asset.clone(), move || {
		let source = source.clone();
		let decoder = decoder.clone();
		let asset = asset.clone();
		async move {
			let text = source.load(&asset).await?;
			// assets written to disk usually end with a newline
			Ok(MetadataBytes::from(decoder.decode(text.trim())))
		}
	})
}

/// Loader of a JSON descriptor bundle.
fn descriptors_loader(
	source: &Arc<dyn AssetSource>,
	asset: String,
) -> LazyLoader<Arc<DescriptorBundle>> {
	let source = source.clone();
	LazyLoader::new(asset.clone(), move || {
		let source = source.clone();
		let asset = asset.clone();
		async move {
			let json = source.load(&asset).await?;
			DescriptorBundle::from_json(&json).map(Arc::new).map_err(|e| {
				LoadError::InvalidDescriptors { name: asset, source: Arc::new(e) }
			})
		}
	})
}
