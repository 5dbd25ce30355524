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

//! Sources of bundled text assets.

use crate::{error::LoadError, LOG_TARGET};
use async_trait::async_trait;
use std::{
	collections::HashMap,
	path::{Path, PathBuf},
};

/// Provides the text assets (base64 blobs and descriptor bundles) the registry is built from.
#[async_trait]
pub trait AssetSource: Send + Sync {
	/// Load the asset called `name`.
	async fn load(&self, name: &str) -> Result<String, LoadError>;
}

/// Assets shipped as files in a directory.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
	root: PathBuf,
}

impl FsAssetSource {
	/// Serve assets from `root`. Asset names are paths relative to it.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		FsAssetSource { root: root.into() }
	}

	/// Directory the assets are read from.
	pub fn root(&self) -> &Path {
		&self.root
	}
}

#[async_trait]
impl AssetSource for FsAssetSource {
	async fn load(&self, name: &str) -> Result<String, LoadError> {
		let path = self.root.join(name);
		log::trace!(target: LOG_TARGET, "Reading asset {}", path.display());
		tokio::fs::read_to_string(&path).await.map_err(|e| LoadError::io(name, e))
	}
}

/// Assets held in memory, typically embedded into the binary with `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetSource {
	assets: HashMap<String, String>,
}

impl StaticAssetSource {
	/// Empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an asset, replacing any previous asset with the same name.
	pub fn with_asset(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
		self.insert(name, content);
		self
	}

	/// Add an asset, replacing any previous asset with the same name.
	pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
		self.assets.insert(name.into(), content.into());
	}
}

#[async_trait]
impl AssetSource for StaticAssetSource {
	async fn load(&self, name: &str) -> Result<String, LoadError> {
		self.assets.get(name).cloned().ok_or_else(|| LoadError::AssetNotFound(name.into()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	#[tokio::test]
	async fn static_source_serves_inserted_assets() {
		let source = StaticAssetSource::new().with_asset("a.b64", "TWFu");
		assert_eq!(source.load("a.b64").await.unwrap(), "TWFu");
		assert_matches!(
			source.load("b.b64").await,
			Err(LoadError::AssetNotFound(name)) if name == "b.b64"
		);
	}

	#[tokio::test]
	async fn fs_source_reads_relative_to_root() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::create_dir(dir.path().join("nested")).unwrap();
		std::fs::write(dir.path().join("nested/a.b64"), "TWE=").unwrap();

		let source = FsAssetSource::new(dir.path());
		assert_eq!(source.root(), dir.path());
		assert_eq!(source.load("nested/a.b64").await.unwrap(), "TWE=");
		assert_matches!(source.load("missing.b64").await, Err(LoadError::AssetNotFound(_)));
	}
}
