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

//! Registry errors.

use crate::hash::{ChainHash, InvalidHash};
use std::{io, path::PathBuf, sync::Arc};

/// Result type used when building the registry.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a [`MetadataRegistry`](crate::MetadataRegistry).
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A hash in the manifest could not be parsed.
	#[error("Invalid hash for network `{network}`: {source}")]
	InvalidHash {
		/// Network the hash belongs to.
		network: String,
		/// Parsing error.
		source: InvalidHash,
	},
	/// Two networks share a runtime code hash.
	#[error("Code hash {0} is registered twice")]
	DuplicateCodeHash(ChainHash),
	/// Two networks share a genesis hash.
	#[error("Genesis hash {0} is registered twice")]
	DuplicateGenesisHash(ChainHash),
	/// The manifest file could not be read.
	#[error("Failed to read manifest {path:?}: {source}")]
	ReadManifest {
		/// Path of the manifest.
		path: PathBuf,
		/// Underlying I/O error.
		source: io::Error,
	},
	/// The manifest is not valid JSON or does not match the expected shape.
	#[error("Invalid manifest: {0}")]
	InvalidManifest(#[from] serde_json::Error),
}

/// Errors produced by a lazy loader.
///
/// A loader hands the same outcome to every caller, so the error is cheap to clone.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
	/// The asset source has no asset with this name.
	#[error("Asset `{0}` not found")]
	AssetNotFound(String),
	/// Reading the asset failed.
	#[error("Failed to read asset `{name}`: {source}")]
	Io {
		/// Asset name.
		name: String,
		/// Underlying I/O error.
		source: Arc<io::Error>,
	},
	/// The descriptor bundle is not valid JSON or does not match the expected shape.
	#[error("Invalid descriptor bundle `{name}`: {source}")]
	InvalidDescriptors {
		/// Asset name.
		name: String,
		/// Parsing error.
		source: Arc<serde_json::Error>,
	},
	/// The load panicked.
	#[error("Loader task failed: {0}")]
	Task(String),
}

impl LoadError {
	/// Wrap an I/O error raised while reading `name`.
	pub fn io(name: impl Into<String>, source: io::Error) -> Self {
		if source.kind() == io::ErrorKind::NotFound {
			LoadError::AssetNotFound(name.into())
		} else {
			LoadError::Io { name: name.into(), source: Arc::new(source) }
		}
	}
}
