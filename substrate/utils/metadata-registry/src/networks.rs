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

//! Genesis hashes of well-known networks.

use crate::hash::GenesisHash;

/// Genesis hash of Polkadot.
pub const POLKADOT_GENESIS_HASH: GenesisHash = GenesisHash::from_hex_const(
	"0x91b171bb158e2d3848fa23a9f1c25182fb8e20313b2c1eb49219da7a70ce90c3",
);

/// Genesis hash of Kusama.
pub const KUSAMA_GENESIS_HASH: GenesisHash = GenesisHash::from_hex_const(
	"0xb0a8d493285c2df73290dfb7e61f870f17b41801197a149ca93654499ea3dafe",
);

/// Genesis hash of Westend.
pub const WESTEND_GENESIS_HASH: GenesisHash = GenesisHash::from_hex_const(
	"0xe143f23803ac50e8f6f8e62695d1ce9e4e1d68aa36c1cd2cfd15340213f3423e",
);

/// Genesis hash of Paseo.
pub const PASEO_GENESIS_HASH: GenesisHash = GenesisHash::from_hex_const(
	"0x77afd6190f1554ad45fd0d31aee62aacc33c6db0ea801129acb813f913e0764f",
);

/// Names and genesis hashes of the well-known networks.
pub fn well_known() -> [(&'static str, GenesisHash); 4] {
	[
		("polkadot", POLKADOT_GENESIS_HASH),
		("kusama", KUSAMA_GENESIS_HASH),
		("westend", WESTEND_GENESIS_HASH),
		("paseo", PASEO_GENESIS_HASH),
	]
}

/// Name of the well-known network with the given genesis hash.
pub fn name_of(genesis_hash: &GenesisHash) -> Option<&'static str> {
	well_known().into_iter().find(|(_, hash)| hash == genesis_hash).map(|(name, _)| name)
}
