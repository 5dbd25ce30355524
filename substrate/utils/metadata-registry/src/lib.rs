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

//! # Metadata registry
//!
//! Client-side registry of bundled runtime metadata.
//!
//! Light clients and wallets often ship the metadata of the runtimes they support instead of
//! downloading it from the node they connect to. This crate keeps such bundled metadata in a
//! [`MetadataRegistry`], keyed by the code hash of the runtime it was taken from, and resolves
//! it on demand:
//!
//! - assets are base64 text (metadata, shared types) or JSON (descriptor bundles), provided by
//!   an [`AssetSource`];
//! - nothing is loaded until it is asked for, and every asset is loaded and decoded at most
//!   once, however many callers ask for it concurrently;
//! - [`MetadataResolver::resolve_metadata`] never fails: a runtime the registry does not know,
//!   or an asset that cannot be loaded, both yield `None`.
//!
//! ```no_run
//! # async fn run() -> Result<(), substrate_metadata_registry::Error> {
//! use std::sync::Arc;
//! use substrate_metadata_registry::{
//! 	FsAssetSource, MetadataRegistry, MetadataResolver, RegistryManifest,
//! };
//!
//! let manifest = RegistryManifest::from_file("assets/manifest.json")?;
//! let source = Arc::new(FsAssetSource::new("assets"));
//! let registry = MetadataRegistry::from_manifest(&manifest, source)?;
//! let resolver = MetadataResolver::new(Arc::new(registry));
//!
//! let code_hash = "0x0101010101010101010101010101010101010101010101010101010101010101";
//! if let Some(metadata) = resolver.resolve_metadata(code_hash).await {
//! 	println!("{} bytes of metadata", metadata.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod base64;
pub mod config;
pub mod descriptors;
mod error;
pub mod hash;
pub mod lazy;
pub mod networks;
mod registry;
mod resolver;
pub mod source;

pub use config::{NetworkConfig, RegistryManifest};
pub use descriptors::{AssetMetadata, DescriptorBundle, DescriptorKind};
pub use error::{Error, LoadError, Result};
pub use hash::{ChainHash, CodeHash, GenesisHash, InvalidHash};
pub use lazy::{LazyLoader, LoadResult, LoaderState};
pub use registry::{MetadataBytes, MetadataRegistry, MetadataRegistryBuilder, NetworkDescriptor};
pub use resolver::{metadata_version, MetadataResolver, METADATA_MAGIC};
pub use source::{AssetSource, FsAssetSource, StaticAssetSource};

/// Log target of this crate.
const LOG_TARGET: &str = "metadata-registry";
