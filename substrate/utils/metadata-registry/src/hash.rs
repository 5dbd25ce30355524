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

//! 32-byte chain digests.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Length of a rendered hash: `0x` followed by 64 hex characters.
const RENDERED_LEN: usize = 2 + 2 * 32;

/// A 32-byte digest identifying something on chain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChainHash([u8; 32]);

/// Digest of the runtime code currently deployed on a chain.
pub type CodeHash = ChainHash;

/// Hash of the genesis block of a chain.
pub type GenesisHash = ChainHash;

/// Hash parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHash {
	/// The string is not `0x` followed by 64 characters.
	#[error("expected `0x` followed by 64 hex characters, got {0} characters")]
	Length(usize),
	/// The `0x` prefix is missing.
	#[error("missing `0x` prefix")]
	Prefix,
	/// The string contains non-hex characters.
	#[error("invalid hex character")]
	Hex,
}

impl ChainHash {
	/// Wrap raw bytes.
	pub const fn new(bytes: [u8; 32]) -> Self {
		ChainHash(bytes)
	}

	/// Parse a hash at compile time. Panics (fails the build when used in a constant) if `s`
	/// is not `0x` followed by 64 hex characters.
	pub const fn from_hex_const(s: &str) -> Self {
		const fn nibble(c: u8) -> u8 {
			match c {
				b'0'..=b'9' => c - b'0',
				b'a'..=b'f' => c - b'a' + 10,
				b'A'..=b'F' => c - b'A' + 10,
				_ => panic!("invalid hex character in hash constant"),
			}
		}

		let s = s.as_bytes();
		assert!(s.len() == RENDERED_LEN, "hash constant must be 66 characters long");
		assert!(s[0] == b'0' && s[1] == b'x', "hash constant must start with `0x`");

		let mut bytes = [0u8; 32];
		let mut i = 0;
		while i < 32 {
			bytes[i] = nibble(s[2 + 2 * i]) << 4 | nibble(s[3 + 2 * i]);
			i += 1;
		}
		ChainHash(bytes)
	}

	/// Raw bytes of the hash.
	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl From<[u8; 32]> for ChainHash {
	fn from(bytes: [u8; 32]) -> Self {
		ChainHash(bytes)
	}
}

impl AsRef<[u8]> for ChainHash {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl FromStr for ChainHash {
	type Err = InvalidHash;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() != RENDERED_LEN {
			return Err(InvalidHash::Length(s.len()))
		}
		if !s.starts_with("0x") {
			return Err(InvalidHash::Prefix)
		}
		array_bytes::hex2array::<_, 32>(s).map(ChainHash).map_err(|_| InvalidHash::Hex)
	}
}

impl fmt::Display for ChainHash {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&array_bytes::bytes2hex("0x", self.0))
	}
}

impl fmt::Debug for ChainHash {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl Serialize for ChainHash {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for ChainHash {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const HASH: &str = "0x91b171bb158e2d3848fa23a9f1c25182fb8e20313b2c1eb49219da7a70ce90c3";

	#[test]
	fn parses_and_renders() {
		let hash: ChainHash = HASH.parse().unwrap();
		assert_eq!(hash.as_bytes()[0], 0x91);
		assert_eq!(hash.as_bytes()[31], 0xc3);
		assert_eq!(hash.to_string(), HASH);
		assert_eq!(format!("{hash:?}"), HASH);
	}

	#[test]
	fn upper_case_is_accepted_and_rendered_lower() {
		let upper = format!("0x{}", HASH[2..].to_uppercase());
		let hash: ChainHash = upper.parse().unwrap();
		assert_eq!(hash.to_string(), HASH);
	}

	#[test]
	fn const_parser_agrees_with_runtime_parser() {
		const PARSED: ChainHash = ChainHash::from_hex_const(HASH);
		assert_eq!(PARSED, HASH.parse().unwrap());
	}

	#[test]
	fn rejects_malformed_hashes() {
		assert_eq!("0x00".parse::<ChainHash>(), Err(InvalidHash::Length(4)));
		assert_eq!(HASH[2..].parse::<ChainHash>(), Err(InvalidHash::Length(64)));
		assert_eq!(format!("00{}", &HASH[2..]).parse::<ChainHash>(), Err(InvalidHash::Prefix));
		assert_eq!(format!("0x{}", "zz".repeat(32)).parse::<ChainHash>(), Err(InvalidHash::Hex));
	}

	#[test]
	fn serde_uses_hex_strings() {
		let hash: ChainHash = HASH.parse().unwrap();
		let json = serde_json::to_string(&hash).unwrap();
		assert_eq!(json, format!("\"{HASH}\""));
		assert_eq!(serde_json::from_str::<ChainHash>(&json).unwrap(), hash);
		assert!(serde_json::from_str::<ChainHash>("\"0x1234\"").is_err());
	}
}
