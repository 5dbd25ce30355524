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

//! Load-once asynchronous values.
//!
//! A [`LazyLoader`] holds a factory producing the future that loads a value. The first call
//! to [`LazyLoader::get`] runs the factory and starts the load; every other caller, concurrent
//! or later, awaits that same load and receives a clone of its outcome. Failures are cached
//! just like successes: a failed loader stays failed.

use crate::{error::LoadError, LOG_TARGET};
use futures::{
	future::{BoxFuture, Shared},
	FutureExt,
};
use parking_lot::Mutex;
use std::{any::Any, fmt, future::Future, panic::AssertUnwindSafe, sync::Arc};

/// Outcome of a load.
pub type LoadResult<T> = Result<T, LoadError>;

/// Boxed load future.
type LoadFuture<T> = BoxFuture<'static, LoadResult<T>>;

/// Load that has been started and may be awaited by any number of callers.
type SharedLoad<T> = Shared<LoadFuture<T>>;

/// Factory creating the load future.
type Factory<T> = Arc<dyn Fn() -> LoadFuture<T> + Send + Sync>;

/// Observable state of a [`LazyLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
	/// Nobody asked for the value yet.
	Unresolved,
	/// The load has started and has not finished yet.
	Resolving,
	/// The value is available.
	Resolved,
	/// The load has failed. It is not retried.
	Failed,
}

enum Inner<T> {
	Unresolved(Factory<T>),
	Started(SharedLoad<T>),
}

/// Asynchronous value loaded at most once.
pub struct LazyLoader<T: Clone> {
	name: String,
	inner: Mutex<Inner<T>>,
}

impl<T> LazyLoader<T>
where
	T: Clone + Send + Sync + 'static,
{
	/// Create a loader. `factory` is called once, on the first [`get`](Self::get).
	pub fn new<F, Fut>(name: impl Into<String>, factory: F) -> Self
	where
		F: Fn() -> Fut + Send + Sync + 'static,
		Fut: Future<Output = LoadResult<T>> + Send + 'static,
	{
		LazyLoader {
			name: name.into(),
			inner: Mutex::new(Inner::Unresolved(Arc::new(move || factory().boxed()))),
		}
	}

	/// Name of the loaded asset, used in logs.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Get the value, starting the load if this is the first request.
	///
	/// The load starts when this method is called, not when the returned future is first
	/// polled. Dropping the returned future does not cancel the load.
	pub fn get(&self) -> impl Future<Output = LoadResult<T>> + Send + 'static {
		let mut inner = self.inner.lock();
		let factory = match &*inner {
			Inner::Started(load) => return load.clone(),
			Inner::Unresolved(factory) => factory.clone(),
		};

		log::debug!(target: LOG_TARGET, "Loading `{}`", self.name);
		let load = start(self.name.clone(), factory());
		*inner = Inner::Started(load.clone());
		load
	}

	/// Current state of the loader.
	///
	/// Outside of a runtime a load only makes progress, and so only finishes, while some caller
	/// awaits it.
	pub fn state(&self) -> LoaderState {
		match &*self.inner.lock() {
			Inner::Unresolved(_) => LoaderState::Unresolved,
			Inner::Started(load) => match load.peek() {
				None => LoaderState::Resolving,
				Some(Ok(_)) => LoaderState::Resolved,
				Some(Err(_)) => LoaderState::Failed,
			},
		}
	}
}

impl<T: Clone> fmt::Debug for LazyLoader<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("LazyLoader").field("name", &self.name).finish()
	}
}

/// Share `load` between callers and, when running inside a tokio runtime, drive it in the
/// background so that it completes even if every caller stops awaiting it. The background task
/// only drives the shared load: if its runtime shuts down first, the load is resumed by whoever
/// polls it next. Outside of a runtime the load is driven by whoever polls it.
fn start<T>(name: String, load: LoadFuture<T>) -> SharedLoad<T>
where
	T: Clone + Send + Sync + 'static,
{
	let load = async move {
		let result = match AssertUnwindSafe(load).catch_unwind().await {
			Ok(result) => result,
			Err(panic) => Err(LoadError::Task(panic_message(&*panic))),
		};
		if let Err(ref e) = result {
			log::debug!(target: LOG_TARGET, "Loading `{name}` failed: {e}");
		}
		result
	}
	.boxed()
	.shared();

	if let Ok(handle) = tokio::runtime::Handle::try_current() {
		handle.spawn(load.clone().map(drop));
	}
	load
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
	if let Some(message) = panic.downcast_ref::<&str>() {
		format!("load panicked: {message}")
	} else if let Some(message) = panic.downcast_ref::<String>() {
		format!("load panicked: {message}")
	} else {
		"load panicked".into()
	}
}
