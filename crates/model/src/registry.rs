// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2024-2026 Moneta contributors. All rights reserved.
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The process-wide currency registry.
//!
//! The registry is the only mutable shared state in this crate. A single mutex
//! guards the backing map: every lookup observes either the state before or
//! after a mutation, never a torn read, and `replace` is a single atomic
//! unregister+register step under one lock acquisition.

use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
};

use moneta_core::MUTEX_POISONED;
use ustr::Ustr;

use crate::{currencies::iso_4217_currencies, errors::CurrencyError, types::Currency};

/// The default currency namespace.
pub const ISO_NAMESPACE: &str = "ISO-4217";

/// Holds all known currencies, keyed by `(namespace, code)`.
///
/// Freshly constructed registries are pre-populated with the built-in
/// ISO-4217 table; custom currencies are added and removed through explicit
/// [`register`](Self::register) / [`unregister`](Self::unregister) calls.
#[derive(Debug)]
pub struct CurrencyRegistry {
    map: Mutex<HashMap<(Ustr, Ustr), Currency>>,
}

/// The process-wide currency registry shared by all readers.
pub static CURRENCY_REGISTRY: LazyLock<CurrencyRegistry> = LazyLock::new(CurrencyRegistry::new);

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyRegistry {
    /// Creates a new registry pre-populated with the built-in ISO-4217 table.
    #[must_use]
    pub fn new() -> Self {
        let mut map = HashMap::new();
        for currency in iso_4217_currencies() {
            map.insert((currency.namespace, currency.code), currency);
        }
        Self {
            map: Mutex::new(map),
        }
    }

    fn key(namespace: &str, code: &str) -> (Ustr, Ustr) {
        (Ustr::from(namespace), Ustr::from(code))
    }

    /// Looks up the currency registered under `code` within `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::NotFound`] if no such entry exists.
    pub fn lookup(&self, code: &str, namespace: &str) -> Result<Currency, CurrencyError> {
        let map = self.map.lock().expect(MUTEX_POISONED);
        map.get(&Self::key(namespace, code))
            .copied()
            .ok_or_else(|| CurrencyError::NotFound {
                code: code.to_string(),
                namespace: namespace.to_string(),
            })
    }

    /// Looks up `code` in the default [`ISO_NAMESPACE`], falling back to a
    /// unique match across all namespaces.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::NotFound`] if the code is absent, or present in
    /// more than one namespace (ambiguous without an explicit namespace).
    pub fn get(&self, code: &str) -> Result<Currency, CurrencyError> {
        let map = self.map.lock().expect(MUTEX_POISONED);
        if let Some(currency) = map.get(&Self::key(ISO_NAMESPACE, code)) {
            return Ok(*currency);
        }
        let mut matches = map.values().filter(|c| c.code.as_str() == code);
        match (matches.next(), matches.next()) {
            (Some(currency), None) => Ok(*currency),
            _ => Err(CurrencyError::NotFound {
                code: code.to_string(),
                namespace: "any".to_string(),
            }),
        }
    }

    /// Registers `currency` and returns the stored instance.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::AlreadyExists`] if an entry is already
    /// registered under the same `(code, namespace)` key.
    pub fn register(&self, currency: Currency) -> Result<Currency, CurrencyError> {
        let mut map = self.map.lock().expect(MUTEX_POISONED);
        let key = (currency.namespace, currency.code);
        if map.contains_key(&key) {
            return Err(CurrencyError::AlreadyExists {
                code: currency.code.to_string(),
                namespace: currency.namespace.to_string(),
            });
        }
        map.insert(key, currency);
        log::debug!(
            "Registered currency '{}' in namespace '{}'",
            currency.code,
            currency.namespace
        );
        Ok(currency)
    }

    /// Removes the entry under `(code, namespace)` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::NotFound`] if no such entry exists.
    pub fn unregister(&self, code: &str, namespace: &str) -> Result<Currency, CurrencyError> {
        let mut map = self.map.lock().expect(MUTEX_POISONED);
        let removed =
            map.remove(&Self::key(namespace, code))
                .ok_or_else(|| CurrencyError::NotFound {
                    code: code.to_string(),
                    namespace: namespace.to_string(),
                })?;
        log::debug!("Unregistered currency '{code}' from namespace '{namespace}'");
        Ok(removed)
    }

    /// Atomically replaces the entry under `(code, namespace)` with
    /// `new_currency` (stored under its own key), returning the prior entry.
    ///
    /// The removal and insertion happen under one lock acquisition: no reader
    /// can observe the registry with neither or both entries present. Like
    /// [`register`](Self::register), an existing third entry is never
    /// overwritten: a re-keying replacement whose new `(code, namespace)`
    /// collides with another registration is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the registry untouched, if:
    /// - No entry exists under `(code, namespace)` ([`CurrencyError::NotFound`]).
    /// - `new_currency`'s key differs from the replaced key and is already
    ///   registered ([`CurrencyError::AlreadyExists`]).
    pub fn replace(
        &self,
        code: &str,
        namespace: &str,
        new_currency: Currency,
    ) -> Result<Currency, CurrencyError> {
        let mut map = self.map.lock().expect(MUTEX_POISONED);
        let old_key = Self::key(namespace, code);
        let Some(prior) = map.get(&old_key).copied() else {
            return Err(CurrencyError::NotFound {
                code: code.to_string(),
                namespace: namespace.to_string(),
            });
        };
        let new_key = (new_currency.namespace, new_currency.code);
        if new_key != old_key && map.contains_key(&new_key) {
            return Err(CurrencyError::AlreadyExists {
                code: new_currency.code.to_string(),
                namespace: new_currency.namespace.to_string(),
            });
        }
        map.remove(&old_key);
        map.insert(new_key, new_currency);
        log::debug!(
            "Replaced currency '{code}' in namespace '{namespace}' with '{}'",
            new_currency.code
        );
        Ok(prior)
    }

    /// Returns `true` if an entry exists under `(code, namespace)`.
    #[must_use]
    pub fn contains(&self, code: &str, namespace: &str) -> bool {
        let map = self.map.lock().expect(MUTEX_POISONED);
        map.contains_key(&Self::key(namespace, code))
    }

    /// Returns a snapshot of the registered `(namespace, code)` pairs.
    #[must_use]
    pub fn codes(&self) -> Vec<(Ustr, Ustr)> {
        let map = self.map.lock().expect(MUTEX_POISONED);
        map.keys().copied().collect()
    }

    /// Returns the number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.lock().expect(MUTEX_POISONED).len()
    }

    /// Returns `true` if the registry holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
